use core::fmt;

use serde::Deserialize;

/// 预先构造好的认证凭据，优先级高于 `username`/`password`
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Credentials {
    Basic { username: String, password: String },
    Bearer(String),
}

/// 防止debug泄漏账号
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<hidden>")
                .finish(),
            Credentials::Bearer(_) => {
                f.debug_tuple("Bearer").field(&"<hidden>").finish()
            }
        }
    }
}
