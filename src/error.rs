//! 错误处理模块 (修复原则：明确抛出异常)

use std::error::Error;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MayaTestError {
    #[error("文件IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置文件解析错误: {0}")]
    Config(#[from] toml::de::Error),

    #[error("配置文件不存在: {0}")]
    ConfigNotFound(PathBuf),

    #[error("未指定 Maya 版本 (使用 -m/--maya 或配置 default_version)")]
    MissingVersion,

    #[error("参数解析错误: {0}")]
    ArgParse(String),

    #[error("路径不是有效的 UTF-8: {0}")]
    NonUtf8Path(PathBuf),

    #[error("未找到 mayapy: {0}")]
    MayapyNotFound(PathBuf),

    #[error("命令执行失败: {0}")]
    CommandExecutionFailed(String),

    #[error("JSON序列化错误: {0}")]
    Json(#[from] serde_json::Error),
}

impl MayaTestError {
    /// 打印错误到 stderr
    /// verbose = true: 附带完整的 source() 链
    /// verbose = false: 一行提示
    pub fn report(&self, verbose: bool) {
        match self {
            MayaTestError::MayapyNotFound(path) if !verbose => {
                eprintln!("未找到 mayapy: {} (可设置 MAYA_LOCATION)", path.display())
            }
            _ => eprintln!("错误: {}", self),
        }

        if verbose {
            let mut current = self.source();
            while let Some(cause) = current {
                eprintln!("  └─ 原因: {}", cause);
                current = cause.source();
            }
        }
    }
}

/// 简化 Result 类型别名
pub type Result<T> = std::result::Result<T, MayaTestError>;
