//! 隔离的 Maya 运行环境
//!
//! 进入时创建临时 MAYA_APP_DIR，并清空 MAYA_SCRIPT_PATH / MAYA_MODULE_PATH；
//! 释放时删除临时目录并把这些变量恢复为进入前的状态（原本未设置的会被移除）。

use crate::error::Result;
use std::env;
use std::ffi::OsString;
use std::mem::ManuallyDrop;
use std::path::Path;
use tempfile::TempDir;

pub const MAYA_APP_DIR: &str = "MAYA_APP_DIR";
pub const MAYA_SCRIPT_PATH: &str = "MAYA_SCRIPT_PATH";
pub const MAYA_MODULE_PATH: &str = "MAYA_MODULE_PATH";

/// 临时目录名前缀
const APP_DIR_PREFIX: &str = "maya_app_dir";

/// 被隔离的环境变量
const ISOLATED_VARS: [&str; 3] = [MAYA_APP_DIR, MAYA_SCRIPT_PATH, MAYA_MODULE_PATH];

/// 干净环境守卫 - Drop 时自动还原
#[derive(Debug)]
pub struct CleanEnvironment {
    // 只在 Drop 中取出，以便调用 TempDir::close 并记录删除失败
    app_dir: ManuallyDrop<TempDir>,
    saved: Vec<(&'static str, Option<OsString>)>,
}

impl CleanEnvironment {
    /// 进入干净环境
    pub fn enter() -> Result<Self> {
        Self::enter_in(&env::temp_dir())
    }

    /// 在指定父目录下创建临时 MAYA_APP_DIR
    pub fn enter_in(parent: &Path) -> Result<Self> {
        let saved = ISOLATED_VARS
            .iter()
            .map(|&key| (key, env::var_os(key)))
            .collect();

        let app_dir = tempfile::Builder::new()
            .prefix(APP_DIR_PREFIX)
            .tempdir_in(parent)?;

        // 先构造守卫，之后任何失败都能由 Drop 还原
        let guard = Self {
            app_dir: ManuallyDrop::new(app_dir),
            saved,
        };

        let app_dir = guard.app_dir();
        tracing::debug!(app_dir = %app_dir.display(), "进入隔离的 Maya 环境");
        set_var(MAYA_APP_DIR, app_dir.as_os_str());
        set_var(MAYA_SCRIPT_PATH, "");
        set_var(MAYA_MODULE_PATH, "");

        Ok(guard)
    }

    /// 临时 MAYA_APP_DIR 路径
    pub fn app_dir(&self) -> &Path {
        self.app_dir.path()
    }
}

impl Drop for CleanEnvironment {
    fn drop(&mut self) {
        // SAFETY: drop 之后不再访问 self.app_dir
        let dir = unsafe { ManuallyDrop::take(&mut self.app_dir) };
        let path = dir.path().to_path_buf();
        if let Err(e) = dir.close() {
            tracing::warn!(app_dir = %path.display(), error = %e, "删除临时 MAYA_APP_DIR 失败");
        }

        for (key, value) in self.saved.drain(..) {
            match value {
                Some(value) => set_var(key, &value),
                None => remove_var(key),
            }
        }
        tracing::debug!("已还原 Maya 环境变量");
    }
}

// 本工具为单线程，环境变量只在主线程修改
fn set_var(key: &str, value: impl AsRef<std::ffi::OsStr>) {
    unsafe {
        env::set_var(key, value);
    }
}

fn remove_var(key: &str) {
    unsafe {
        env::remove_var(key);
    }
}
