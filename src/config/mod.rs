//! 配置文件 (~/.mayatest/config.toml) 与运行设置
//!
//! 优先级：命令行参数 > 配置文件 > 内置默认值

use crate::cli::{Cli, parse_format};
use crate::error::{MayaTestError, Result};
use crate::types::OutputFormat;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// 配置文件内容
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// 未指定 -m 时使用的版本
    pub default_version: Option<u32>,
    /// 未指定 --pytest 时使用的参数
    pub pytest_args: Option<String>,
    /// 是否默认隔离环境
    pub isolate: Option<bool>,
    /// 替代 `-m pytest` 的 pytest 脚本路径
    pub pytest_path: Option<PathBuf>,
    /// 版本号 -> 安装目录
    #[serde(default)]
    pub locations: HashMap<String, PathBuf>,
}

impl FileConfig {
    /// 解析 TOML 文本
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 从文件加载
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(MayaTestError::ConfigNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// 加载配置：显式路径必须存在；默认路径不存在时返回空配置
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "加载配置文件");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// 指定版本的安装目录覆盖
    pub fn location_for(&self, version: u32) -> Option<&PathBuf> {
        self.locations.get(&version.to_string())
    }
}

/// 获取用户配置目录：~/.mayatest
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".mayatest"))
}

/// 默认配置文件路径
pub fn default_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// 合并后的运行设置
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub version: u32,
    pub pytest_args: Option<String>,
    pub pytest_path: Option<PathBuf>,
    pub isolate: bool,
    pub dry_run: bool,
    pub format: OutputFormat,
}

impl Settings {
    /// 合并命令行参数与配置文件
    pub fn resolve(cli: &Cli, file: &FileConfig) -> Result<Self> {
        let version = cli
            .maya
            .or(file.default_version)
            .ok_or(MayaTestError::MissingVersion)?;

        Ok(Self {
            version,
            pytest_args: cli.pytest.clone().or_else(|| file.pytest_args.clone()),
            pytest_path: file.pytest_path.clone(),
            isolate: !cli.no_isolate && file.isolate.unwrap_or(true),
            dry_run: cli.dry_run,
            format: parse_format(&cli.format),
        })
    }
}
