//! 构造并执行 mayapy + pytest 命令

use crate::config::Settings;
use crate::maya::locator::Locator;
use crate::error::{MayaTestError, Result};
use crate::types::{Invocation, OutputFormat};
use crate::utils::args::split_args;
use crate::utils::executor::CommandExecutor;
use crate::utils::isolation::CleanEnvironment;

/// 构造命令：[mayapy, -m, pytest, <pytest 参数>...]
///
/// 配置了 `pytest_path` 时用该脚本替代 `-m pytest`。
pub fn construct_command(settings: &Settings, locator: &Locator) -> Result<Invocation> {
    let program = locator.mayapy(settings.version);

    let mut args = match &settings.pytest_path {
        Some(path) => {
            let path = path
                .to_str()
                .ok_or_else(|| MayaTestError::NonUtf8Path(path.clone()))?;
            vec![path.to_string()]
        }
        None => vec!["-m".to_string(), "pytest".to_string()],
    };

    if let Some(pytest_args) = &settings.pytest_args {
        args.extend(split_args(pytest_args)?);
    }

    Ok(Invocation { program, args })
}

/// 渲染待执行的命令
pub fn render(invocation: &Invocation, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(invocation.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(invocation)?),
    }
}

/// 运行测试，返回 mayapy 的退出码
pub fn run(settings: &Settings, locator: &Locator) -> Result<i32> {
    let invocation = construct_command(settings, locator)?;

    if !invocation.program.is_file() {
        tracing::warn!(mayapy = %invocation.program.display(), "mayapy 不存在");
        return Err(MayaTestError::MayapyNotFound(invocation.program));
    }

    tracing::info!(command = %invocation, isolate = settings.isolate, "启动 mayapy");

    // 守卫存活到子进程结束
    let _clean_env = if settings.isolate {
        Some(CleanEnvironment::enter()?)
    } else {
        None
    };

    CommandExecutor::exec(&invocation)
}
