use core::fmt;
use std::sync::Arc;
use std::time::Duration;

use base64::Engine;
use reqwest::{
    Client, Identity,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
    redirect,
};
use sha2::{Digest, Sha256};

use crate::internal::auth::structs::credentials::Credentials;
use crate::internal::config::structs::client_config::ClientConfig;
use crate::internal::error::WebDavError;

/// 认证结构体
///
/// 该结构体定位
/// - 持有已经配置好认证、证书、TLS 校验的 http 客户端
/// - 客户端禁用自动重定向，重定向由需要的操作自行处理
///
/// 默认Eq时只比较凭据指纹，不会暴露凭据本身
#[derive(Clone)]
pub struct WebdavAuth {
    pub client: Client, // 内部是Arc，不需要特殊处理
    pub(crate) encrypted_token: Arc<String>, // 对外导出时，不允许直接访问，哪怕它是被加密的
}

impl WebdavAuth {
    /// 按配置创建认证结构体
    pub fn new(config: &ClientConfig) -> Result<Self, WebDavError> {
        let http_client = _InternalHttpClient::_create(config)?;

        Ok(Self {
            client: http_client.client,
            encrypted_token: Arc::new(http_client.encrypted_token),
        })
    }

    /// 仅比较token是否相等
    pub fn eq_only_token(&self, other: &Self) -> bool {
        self.encrypted_token == other.encrypted_token
    }
}

/// 用于比较认证结构体是否相等
impl PartialEq for WebdavAuth {
    fn eq(&self, other: &Self) -> bool {
        self.encrypted_token == other.encrypted_token
    }
}

/// 防止debug泄漏账号
impl fmt::Debug for WebdavAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebdavAuth")
            .field("client", &"<Client with hidden authorization>")
            .finish()
    }
}

/// 内部临时使用的http客户端结构体，在初始化WebdavAuth时使用
struct _InternalHttpClient {
    client: Client,
    encrypted_token: String,
}

impl _InternalHttpClient {
    fn _encrypt_str(data: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(data.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// 生成 Authorization 头的值
    fn _authorization(credentials: &Credentials) -> String {
        match credentials {
            Credentials::Basic { username, password } => {
                let token = base64::engine::general_purpose::STANDARD
                    .encode(format!("{username}:{password}"));
                format!("Basic {}", token)
            }
            Credentials::Bearer(token) => format!("Bearer {}", token),
        }
    }

    /// 创建http客户端，内部使用
    fn _create(config: &ClientConfig) -> Result<Self, WebDavError> {
        let mut headers = HeaderMap::new();

        let authorization =
            config.effective_credentials().map(|c| Self::_authorization(&c));

        if let Some(value) = &authorization {
            let mut auth_value = HeaderValue::from_str(value)?;
            auth_value.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth_value);
        }

        if !config.verify_ssl {
            tracing::warn!(host = %config.host, "已关闭 TLS 证书校验");
        }

        let mut builder = Client::builder()
            .http1_only()
            .default_headers(headers)
            .redirect(redirect::Policy::none())
            .danger_accept_invalid_certs(!config.verify_ssl);

        if let Some(cert_path) = &config.cert {
            let pem =
                std::fs::read(cert_path).map_err(WebDavError::ReadCertificate)?;
            builder = builder.identity(Identity::from_pem(&pem)?);
        }

        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        let http_client = builder.build()?;

        let encrypted_token =
            Self::_encrypt_str(authorization.as_deref().unwrap_or_default());

        Ok(Self { client: http_client, encrypted_token })
    }
}
