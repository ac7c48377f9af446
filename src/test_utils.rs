//! 测试工具模块
//!
//! 提供环境变量守卫与伪造的 Maya 安装目录，避免测试之间互相污染

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use crate::types::Platform;
use tempfile::TempDir;

/// 环境变量守卫 - 自动清理
pub struct EnvGuard {
    original_vars: HashMap<String, String>,
}

impl Default for EnvGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvGuard {
    /// 创建一个新的环境守卫，记录当前环境变量
    pub fn new() -> Self {
        let original_vars: HashMap<String, String> = env::vars().collect();
        Self { original_vars }
    }

    /// 设置测试环境变量（自动包装为 unsafe）
    pub fn set_var(&self, key: &str, value: &str) {
        unsafe {
            env::set_var(key, value);
        }
    }

    /// 移除环境变量（自动包装为 unsafe）
    pub fn remove_var(&self, key: &str) {
        unsafe {
            env::remove_var(key);
        }
    }
}

impl Drop for EnvGuard {
    /// 释放时恢复原始环境变量
    fn drop(&mut self) {
        let current: Vec<String> = env::vars().map(|(key, _)| key).collect();
        for key in current {
            if !self.original_vars.contains_key(&key) {
                self.remove_var(&key);
            }
        }

        for (key, value) in &self.original_vars {
            if env::var(key).as_ref() != Ok(value) {
                self.set_var(key, value);
            }
        }
    }
}

/// 伪造的 Maya 安装目录：<root>/bin/mayapy
pub struct FakeMaya {
    root: TempDir,
}

impl FakeMaya {
    /// 创建安装目录，mayapy 为给定内容的脚本
    ///
    /// 先写入临时文件并关闭，再 rename 到位；调用方需 #[serial]，
    /// 避免其他线程 fork 时继承写句柄导致 ETXTBSY
    pub fn with_script(script: &str) -> Self {
        let root = tempfile::tempdir().unwrap();
        let bin = root.path().join("bin");
        std::fs::create_dir_all(&bin).unwrap();

        let staging = bin.join("mayapy.partial");
        std::fs::write(&staging, script).unwrap();

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&staging, std::fs::Permissions::from_mode(0o755)).unwrap();
        }

        let maya = Self { root };
        std::fs::rename(&staging, maya.mayapy()).unwrap();
        maya
    }

    /// 安装目录（用作 MAYA_LOCATION）
    pub fn location(&self) -> &Path {
        self.root.path()
    }

    pub fn mayapy(&self) -> PathBuf {
        self.location()
            .join("bin")
            .join(format!("mayapy{}", Platform::current().exe_suffix()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_guard_cleanup() {
        {
            let guard = EnvGuard::new();
            guard.set_var("MAYATEST_GUARD_VAR", "value");
            assert_eq!(env::var("MAYATEST_GUARD_VAR").unwrap(), "value");
        }
        assert!(env::var("MAYATEST_GUARD_VAR").is_err());
    }

    #[test]
    #[serial]
    fn test_fake_maya_layout() {
        let maya = FakeMaya::with_script("#!/bin/sh\nexit 0\n");
        assert!(maya.mayapy().is_file());
        assert!(maya.mayapy().starts_with(maya.location()));
        assert!(!maya.location().join("bin").join("mayapy.partial").exists());
    }
}
