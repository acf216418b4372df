use std::fmt;

use reqwest::{Method, StatusCode};

/// 会话支持的 WebDAV 方法
///
/// 封闭枚举：每个方法都对应一个固定的操作名，用于拼装失败原因，不存在"未知方法"的情况。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WebDavMethod {
    HEAD,
    GET,
    PUT,
    DELETE,
    MKCOL,
    PROPFIND,
}

impl WebDavMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            WebDavMethod::HEAD => "HEAD",
            WebDavMethod::GET => "GET",
            WebDavMethod::PUT => "PUT",
            WebDavMethod::DELETE => "DELETE",
            WebDavMethod::MKCOL => "MKCOL",
            WebDavMethod::PROPFIND => "PROPFIND",
        }
    }

    /// 人类可读的操作名，出现在 `Failed to {operation} "{path}"` 中
    pub fn operation_name(&self) -> &'static str {
        match self {
            WebDavMethod::HEAD => "get header",
            WebDavMethod::GET => "download",
            WebDavMethod::PUT => "upload",
            WebDavMethod::DELETE => "delete",
            WebDavMethod::MKCOL => "create directory",
            WebDavMethod::PROPFIND => "list directory",
        }
    }

    /// 转换成 reqwest 的请求方法，扩展方法（MKCOL/PROPFIND）走 `from_bytes`
    pub fn to_request_method(&self) -> Method {
        match self {
            WebDavMethod::HEAD => Method::HEAD,
            WebDavMethod::GET => Method::GET,
            WebDavMethod::PUT => Method::PUT,
            WebDavMethod::DELETE => Method::DELETE,
            WebDavMethod::MKCOL | WebDavMethod::PROPFIND => {
                Method::from_bytes(self.as_str().as_bytes())
                    .expect("MKCOL/PROPFIND 是合法的 HTTP 方法")
            }
        }
    }
}

impl fmt::Display for WebDavMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 期望的响应状态码：单个状态码，或一组可接受的状态码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedStatus {
    Single(u16),
    Set(&'static [u16]),
}

impl ExpectedStatus {
    pub fn contains(&self, code: u16) -> bool {
        match self {
            ExpectedStatus::Single(expected) => *expected == code,
            ExpectedStatus::Set(codes) => codes.contains(&code),
        }
    }

    pub fn codes(&self) -> &[u16] {
        match self {
            ExpectedStatus::Single(code) => std::slice::from_ref(code),
            ExpectedStatus::Set(codes) => codes,
        }
    }
}

/// 渲染成 `201 Created, 405 Method Not Allowed` 这样的形式
impl fmt::Display for ExpectedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .codes()
            .iter()
            .map(|code| format!("{} {}", code, reason_phrase(*code)))
            .collect::<Vec<_>>()
            .join(", ");
        f.write_str(&rendered)
    }
}

/// 标准原因短语，没有登记的状态码返回 `UNKNOWN`
pub fn reason_phrase(code: u16) -> &'static str {
    StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or("UNKNOWN")
}
