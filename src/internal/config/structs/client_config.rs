use core::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::internal::auth::structs::credentials::Credentials;
use crate::internal::config::enums::Protocol;
use crate::internal::config::functions::check_port::check_port_number;
use crate::internal::error::ConfigError;

/// 会话配置
///
/// 可以直接从配置文件反序列化，也可以用链式方法构造：
///
/// ```rust,no_run
/// # use webdav_session::config::ClientConfig;
/// let config = ClientConfig::new("dav.example.com")
///     .protocol("https")
///     .credentials("account", "password")
///     .path("remote.php/dav");
/// ```
#[derive(Clone, Deserialize)]
pub struct ClientConfig {
    pub host: String,

    /// 端口，允许数字或文本，未设置时按协议推断
    #[serde(default, deserialize_with = "de_port")]
    pub port: Option<String>,

    #[serde(default = "default_protocol")]
    pub protocol: String,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,

    #[serde(default)]
    pub auth: Option<Credentials>,

    #[serde(default = "default_verify_ssl")]
    pub verify_ssl: bool,

    /// 追加在 `scheme://host:port` 之后的基础路径
    #[serde(default)]
    pub path: Option<String>,

    /// PEM 格式的客户端证书（证书与私钥放在同一个文件里）
    #[serde(default)]
    pub cert: Option<PathBuf>,

    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

fn default_protocol() -> String {
    Protocol::Http.as_str().to_string()
}

fn default_verify_ssl() -> bool {
    true
}

/// 端口既可以写成数字也可以写成字符串，统一收成字符串，留给 `check_port_number` 校验
fn de_port<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPort {
        Number(i64),
        Text(String),
    }

    let raw: Option<RawPort> = Option::deserialize(deserializer)?;
    Ok(raw.map(|p| match p {
        RawPort::Number(n) => n.to_string(),
        RawPort::Text(s) => s,
    }))
}

/// 防止debug泄漏账号
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("protocol", &self.protocol)
            .field("username", &self.username)
            .field("auth", &self.auth)
            .field("verify_ssl", &self.verify_ssl)
            .field("path", &self.path)
            .field("cert", &self.cert)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: None,
            protocol: default_protocol(),
            username: None,
            password: None,
            auth: None,
            verify_ssl: default_verify_ssl(),
            path: None,
            cert: None,
            timeout_seconds: None,
        }
    }

    /// 设置端口；此处不校验，构造会话时统一校验
    pub fn port(mut self, port: impl ToString) -> Self {
        self.port = Some(port.to_string());
        self
    }

    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = protocol.into();
        self
    }

    /// 设置 Basic 认证的账号密码
    pub fn credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn auth(mut self, auth: Credentials) -> Self {
        self.auth = Some(auth);
        self
    }

    pub fn verify_ssl(mut self, verify_ssl: bool) -> Self {
        self.verify_ssl = verify_ssl;
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn cert(mut self, cert: impl AsRef<Path>) -> Self {
        self.cert = Some(cert.as_ref().to_path_buf());
        self
    }

    pub fn timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    /// 解析协议，未知协议返回 `CouldNotDetermineProtocol`
    pub fn resolve_protocol(&self) -> Result<Protocol, ConfigError> {
        Protocol::from_str(&self.protocol)
    }

    /// 解析最终端口：显式端口需通过校验，否则取协议默认端口
    pub fn resolve_port(&self) -> Result<u16, ConfigError> {
        match self.port.as_deref().map(str::trim) {
            Some(port) if !port.is_empty() => check_port_number(port),
            _ => Ok(self.resolve_protocol()?.default_port()),
        }
    }

    /// 拼出 `{protocol}://{host}:{port}[/{path}]`
    pub fn base_url(&self) -> Result<String, ConfigError> {
        let protocol = self.resolve_protocol()?;
        let port = self.resolve_port()?;

        let mut base_url = format!("{}://{}:{}", protocol, self.host, port);
        if let Some(path) = self.path.as_deref().filter(|p| !p.is_empty()) {
            base_url = format!("{}/{}", base_url, path);
        }

        Ok(base_url)
    }

    /// 最终生效的凭据：`auth` 优先，其次是同时非空的账号密码
    pub fn effective_credentials(&self) -> Option<Credentials> {
        if let Some(auth) = &self.auth {
            return Some(auth.clone());
        }

        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(username), Some(password))
                if !username.is_empty() && !password.is_empty() =>
            {
                Some(Credentials::Basic {
                    username: username.to_string(),
                    password: password.to_string(),
                })
            }
            _ => None,
        }
    }
}
