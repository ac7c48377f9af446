//! Windows 注册表中的 Maya 安装信息
//!
//! Maya 安装程序写入：
//! HKLM\SOFTWARE\Autodesk\Maya\<version>\Setup\InstallPath -> MAYA_INSTALL_LOCATION

use std::path::PathBuf;

/// 注册表子键路径
pub fn install_key(version: u32) -> String {
    format!("SOFTWARE\\Autodesk\\Maya\\{}\\Setup\\InstallPath", version)
}

/// 查询注册表中的安装目录（非 Windows 平台恒为 None）
pub fn installed_location(version: u32) -> Option<PathBuf> {
    #[cfg(windows)]
    {
        use winreg::RegKey;
        use winreg::enums::*;

        let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
        let key = match hklm.open_subkey_with_flags(install_key(version), KEY_READ) {
            Ok(key) => key,
            Err(e) => {
                tracing::debug!(version, error = %e, "注册表中没有 Maya 安装信息");
                return None;
            }
        };

        let location: String = key.get_value("MAYA_INSTALL_LOCATION").ok()?;
        let trimmed = location.trim_end_matches(['\\', '/']);
        if trimmed.is_empty() {
            return None;
        }
        Some(PathBuf::from(trimmed))
    }

    #[cfg(not(windows))]
    {
        let _ = version;
        None
    }
}
