use std::fmt;

use crate::internal::webdav::enums::{ExpectedStatus, WebDavMethod, reason_phrase};

/// 服务端返回的状态码不在期望集合内
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationFailed {
    pub method: WebDavMethod,
    pub path: String,
    pub expected_code: ExpectedStatus,
    pub actual_code: u16,
}

impl OperationFailed {
    pub fn new(
        method: WebDavMethod,
        path: &str,
        expected_code: ExpectedStatus,
        actual_code: u16,
    ) -> Self {
        let failed = Self {
            method,
            path: path.to_string(),
            expected_code,
            actual_code,
        };
        tracing::error!("{}", failed);
        failed
    }

    /// 简短原因，如 `Failed to create directory "a/b"`
    pub fn reason(&self) -> String {
        format!(
            "Failed to {} \"{}\"",
            self.method.operation_name(),
            self.path
        )
    }
}

impl fmt::Display for OperationFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{reason}.\n     Operation     :  {method} {path}\n     Expected code :  {expected}\n     Actual code   :  {actual} {actual_reason}",
            reason = self.reason(),
            method = self.method,
            path = self.path,
            expected = self.expected_code,
            actual = self.actual_code,
            actual_reason = reason_phrase(self.actual_code),
        )
    }
}

impl std::error::Error for OperationFailed {}
