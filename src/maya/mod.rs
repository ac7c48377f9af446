//! 核心流程：定位 mayapy → 构造命令 → 在隔离环境中执行

pub mod locator;
pub mod runner;

pub use locator::Locator;
pub use runner::{construct_command, render, run};
