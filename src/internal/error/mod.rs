//! 会话相关错误类型。

mod operation_failed;

use thiserror::Error;

pub use operation_failed::OperationFailed;

/// 构造会话时的配置错误
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("端口必须是数字，实际输入: {0}")]
    NotNumber(String),

    #[error("TCP/UDP 端口应在 1 到 65535 之间，实际输入: {0}")]
    BadPortNumber(i64),

    #[error("无法根据协议 {protocol:?} 推断默认端口")]
    CouldNotDetermineProtocol { protocol: String },
}

#[derive(Debug, Error)]
pub enum WebDavError {
    #[error("配置无效: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("{0}")]
    OperationFailed(#[from] OperationFailed),

    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("凭据无法放入 Authorization 头: {0}")]
    InvalidCredentials(#[from] reqwest::header::InvalidHeaderValue),

    #[error("读取客户端证书失败: {0}")]
    ReadCertificate(std::io::Error),

    #[error("打开本地文件失败: {0}")]
    OpenFile(std::io::Error),

    #[error("创建文件失败: {0}")]
    CreateFile(std::io::Error),

    #[error("写入文件失败: {0}")]
    WriteFile(std::io::Error),

    #[error("XML 解析失败: {0}")]
    Xml(String),

    #[error("无效的 getcontentlength: {0}")]
    InvalidContentLength(String),

    #[error("重定向响应缺少可用的 Location 头")]
    MissingLocation,

    #[error("重定向次数超过上限 {0}")]
    TooManyRedirects(usize),
}

impl WebDavError {
    /// 若为状态码不匹配的错误，返回服务端实际状态码
    pub fn actual_status(&self) -> Option<u16> {
        match self {
            WebDavError::OperationFailed(failed) => Some(failed.actual_code),
            _ => None,
        }
    }
}

impl From<quick_xml::Error> for WebDavError {
    fn from(e: quick_xml::Error) -> Self {
        WebDavError::Xml(e.to_string())
    }
}
