//! mayatest - 在 Maya 自带的 mayapy 解释器下运行 pytest
//!
//! 定位 Maya 安装目录，推导 mayapy 路径，并在隔离的临时 MAYA_APP_DIR 中启动 pytest

// CLI 定义
pub mod cli;

// 配置文件与运行设置
pub mod config;

// 核心流程（定位、构造、执行）
pub mod maya;

pub mod error;
pub mod types;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

// 重新导出常用类型
pub use maya::Locator;
pub use error::{MayaTestError, Result};
pub use types::{Invocation, OutputFormat, Platform};
pub use utils::isolation::CleanEnvironment;
