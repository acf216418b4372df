use std::fmt;
use std::str::FromStr;

use crate::internal::error::ConfigError;

/// 连接 WebDAV 服务所用的协议
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }

    /// 未显式指定端口时使用的默认端口
    pub fn default_port(&self) -> u16 {
        match self {
            Protocol::Http => 80,
            Protocol::Https => 443,
        }
    }
}

impl FromStr for Protocol {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "http" => Ok(Protocol::Http),
            "https" => Ok(Protocol::Https),
            other => {
                tracing::error!(protocol = other, "无法识别的协议");
                Err(ConfigError::CouldNotDetermineProtocol {
                    protocol: other.to_string(),
                })
            }
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
