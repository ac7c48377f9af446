//! Maya 安装目录与 mayapy 路径解析
//!
//! 解析顺序：
//! 1. MAYA_LOCATION 环境变量（与版本无关）
//! 2. 配置文件 [locations] 中的版本覆盖
//! 3. Windows 注册表（仅 `Locator::from_host`）
//! 4. 平台默认安装目录
//!
//! 安装不存在时仍返回构造出的路径，此处不做校验。

use crate::config::FileConfig;
use crate::types::Platform;
use crate::utils::registry;
use std::collections::HashMap;
use std::path::PathBuf;

/// 覆盖安装目录的环境变量
pub const MAYA_LOCATION: &str = "MAYA_LOCATION";

/// Maya 2016 起 Linux 默认安装目录不再带 `-x64` 后缀
const LINUX_X64_SUFFIX_BEFORE: u32 = 2016;

/// 安装路径解析器
#[derive(Debug, Clone)]
pub struct Locator {
    platform: Platform,
    maya_location: Option<PathBuf>,
    overrides: HashMap<u32, PathBuf>,
    use_registry: bool,
}

impl Locator {
    /// 不带任何覆盖的解析器
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            maya_location: None,
            overrides: HashMap::new(),
            use_registry: false,
        }
    }

    /// 按当前主机构造：读取 MAYA_LOCATION、配置文件覆盖，Windows 上启用注册表
    pub fn from_host(config: &FileConfig) -> Self {
        let platform = Platform::current();
        let mut locator = Self::new(platform)
            .with_overrides(config)
            .with_registry(platform == Platform::Windows);

        if let Some(location) = std::env::var_os(MAYA_LOCATION) {
            locator = locator.with_maya_location(PathBuf::from(location));
        }
        locator
    }

    /// 设置 MAYA_LOCATION 覆盖
    pub fn with_maya_location(mut self, location: impl Into<PathBuf>) -> Self {
        self.maya_location = Some(location.into());
        self
    }

    /// 读取配置文件中的版本覆盖（键不是整数的条目会被忽略）
    pub fn with_overrides(mut self, config: &FileConfig) -> Self {
        for (key, path) in &config.locations {
            match key.trim().parse::<u32>() {
                Ok(version) => {
                    self.overrides.insert(version, path.clone());
                }
                Err(_) => tracing::warn!(key = %key, "忽略无效的版本号"),
            }
        }
        self
    }

    pub fn with_registry(mut self, enabled: bool) -> Self {
        self.use_registry = enabled;
        self
    }

    /// Maya 安装目录
    pub fn maya_location(&self, version: u32) -> PathBuf {
        if let Some(location) = &self.maya_location {
            tracing::debug!(location = %location.display(), "使用 MAYA_LOCATION");
            return location.clone();
        }

        if let Some(location) = self.overrides.get(&version) {
            tracing::debug!(version, location = %location.display(), "使用配置文件中的安装目录");
            return location.clone();
        }

        if self.use_registry {
            if let Some(location) = registry::installed_location(version) {
                tracing::debug!(version, location = %location.display(), "使用注册表中的安装目录");
                return location;
            }
        }

        self.default_location(version)
    }

    /// 平台默认安装目录
    pub fn default_location(&self, version: u32) -> PathBuf {
        let location = match self.platform {
            Platform::Windows => format!("C:/Program Files/Autodesk/Maya{}", version),
            Platform::MacOs => format!("/Applications/Autodesk/maya{}/Maya.app/Contents", version),
            Platform::Linux => {
                let mut location = format!("/usr/autodesk/maya{}", version);
                if version < LINUX_X64_SUFFIX_BEFORE {
                    location.push_str("-x64");
                }
                location
            }
        };
        PathBuf::from(location)
    }

    /// mayapy 可执行文件路径（按 OsStr 拼接，不经过 UTF-8 转换）
    pub fn mayapy(&self, version: u32) -> PathBuf {
        self.maya_location(version)
            .join("bin")
            .join(format!("mayapy{}", self.platform.exe_suffix()))
    }
}
