//! 命令执行器
//!
//! 子进程继承当前进程的环境变量以及 stdin/stdout/stderr，
//! 因此在 CleanEnvironment 作用域内启动即可拿到隔离后的环境。

use crate::error::{MayaTestError, Result};
use crate::types::Invocation;
use std::process::{Command, Stdio};

/// 被信号终止、没有退出码时使用的退出码
const SIGNALED_EXIT_CODE: i32 = 1;

pub struct CommandExecutor;

impl CommandExecutor {
    /// 执行命令并等待结束
    ///
    /// # 返回
    /// 子进程的退出码
    pub fn exec(invocation: &Invocation) -> Result<i32> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let status = cmd.status().map_err(|e| {
            MayaTestError::CommandExecutionFailed(format!(
                "{}: {}",
                invocation.program.display(),
                e
            ))
        })?;

        match status.code() {
            Some(code) => Ok(code),
            None => {
                tracing::warn!(status = %status, "mayapy 被信号终止");
                Ok(SIGNALED_EXIT_CODE)
            }
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::path::PathBuf;

    #[test]
    #[serial]
    fn test_exec_returns_exit_code() {
        let inv = Invocation {
            program: PathBuf::from("sh"),
            args: vec!["-c".into(), "exit 7".into()],
        };
        assert_eq!(CommandExecutor::exec(&inv).unwrap(), 7);
    }

    #[test]
    #[serial]
    fn test_exec_missing_program() {
        let inv = Invocation {
            program: PathBuf::from("/nonexistent/mayapy"),
            args: vec![],
        };
        assert!(matches!(
            CommandExecutor::exec(&inv),
            Err(MayaTestError::CommandExecutionFailed(_))
        ));
    }

    #[test]
    #[serial]
    fn test_exec_signaled() {
        let inv = Invocation {
            program: PathBuf::from("sh"),
            args: vec!["-c".into(), "kill -9 $$".into()],
        };
        assert_eq!(CommandExecutor::exec(&inv).unwrap(), SIGNALED_EXIT_CODE);
    }
}
