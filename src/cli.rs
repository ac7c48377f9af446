//! CLI 参数定义

use crate::types::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// mayatest - 在 mayapy 下运行 pytest
#[derive(Parser, Debug)]
#[command(
    name = "mayatest",
    version,
    about = "在 Maya 自带的 Python 解释器下运行 pytest",
    long_about = "定位 Maya 安装目录中的 mayapy，在隔离的临时 MAYA_APP_DIR 中运行 pytest，并透传退出码"
)]
pub struct Cli {
    /// Maya 版本 (如 2020)
    #[arg(short, long)]
    pub maya: Option<u32>,

    /// 透传给 pytest 的参数 (如 --pytest="--cov=./")
    #[arg(long, allow_hyphen_values = true)]
    pub pytest: Option<String>,

    /// 不创建隔离的 Maya 环境
    #[arg(long)]
    pub no_isolate: bool,

    /// 只打印命令，不执行
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// 打印命令时的格式 (text/json)
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// 打印 mayapy 路径后退出
    #[arg(long)]
    pub locate: bool,

    /// 配置文件路径 (默认 ~/.mayatest/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 详细输出模式
    #[arg(short, long)]
    pub verbose: bool,
}

/// 解析参数列表（第一个元素为程序名）
pub fn args_parser<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// 解析输出格式
pub fn parse_format(format: &str) -> OutputFormat {
    OutputFormat::from(format)
}
