//! 核心数据结构定义 (表达原则：用数据结构表达逻辑)

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// 宿主操作系统（决定 Maya 默认安装位置）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    MacOs,
    /// 非 Windows / macOS 的系统一律按 Linux 处理
    Linux,
}

impl Platform {
    /// 编译目标对应的平台
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }

    /// 可执行文件后缀
    pub fn exe_suffix(&self) -> &'static str {
        match self {
            Platform::Windows => ".exe",
            _ => "",
        }
    }
}

/// 待执行的命令：解释器 + 参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl Invocation {
    /// 完整命令列表（程序在首位）
    pub fn to_vec(&self) -> Vec<String> {
        let mut cmd = Vec::with_capacity(self.args.len() + 1);
        cmd.push(self.program.display().to_string());
        cmd.extend(self.args.iter().cloned());
        cmd
    }
}

impl fmt::Display for Invocation {
    /// 类 shell 的单行展示，含空白的参数加双引号
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .to_vec()
            .into_iter()
            .map(|part| {
                if part.is_empty() || part.chars().any(char::is_whitespace) {
                    format!("\"{}\"", part.replace('"', "\\\""))
                } else {
                    part
                }
            })
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}

/// 输出格式类型
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" | "j" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from("J"), OutputFormat::Json);
        assert_eq!(OutputFormat::from("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::from("whatever"), OutputFormat::Text);
    }

    #[test]
    fn test_invocation_display_quotes_whitespace() {
        let inv = Invocation {
            program: PathBuf::from("/usr/autodesk/maya2020/bin/mayapy"),
            args: vec!["-m".into(), "pytest".into(), "-k".into(), "a and b".into()],
        };
        assert_eq!(
            inv.to_string(),
            "/usr/autodesk/maya2020/bin/mayapy -m pytest -k \"a and b\""
        );
    }

    #[test]
    fn test_invocation_to_vec_program_first() {
        let inv = Invocation {
            program: PathBuf::from("mayapy"),
            args: vec!["-m".into(), "pytest".into()],
        };
        assert_eq!(inv.to_vec(), vec!["mayapy", "-m", "pytest"]);
    }

    #[test]
    fn test_exe_suffix() {
        assert_eq!(Platform::Windows.exe_suffix(), ".exe");
        assert_eq!(Platform::Linux.exe_suffix(), "");
        assert_eq!(Platform::MacOs.exe_suffix(), "");
    }
}
