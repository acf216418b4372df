use reqwest::Response;

use crate::internal::auth::structs::webdav_auth::WebdavAuth;
use crate::internal::config::structs::client_config::ClientConfig;
use crate::internal::error::WebDavError;
use crate::internal::path::structs::path_resolver::PathResolver;
use crate::internal::webdav::enums::{ExpectedStatus, WebDavMethod};
use crate::internal::webdav::functions::send_request::{SendOptions, send_request};

/// WebDAV 会话
///
/// 一个会话对应一个服务端账号，持有 http 客户端和虚拟工作目录。
/// 所有操作都是依次 await 的单次请求，内部没有并发、没有重试。
///
/// 会改变工作目录的操作（`change_directory`、`create_directories`）需要 `&mut self`，
/// 需要并发使用时请为每个调用方各建一个会话。
///
/// ```rust,no_run
/// # use webdav_session::WebDavSession;
/// # use webdav_session::config::ClientConfig;
/// # async fn example() -> Result<(), webdav_session::error::WebDavError> {
/// let mut session = WebDavSession::new(
///     ClientConfig::new("dav.example.com")
///         .protocol("https")
///         .credentials("account", "password"),
/// )?;
///
/// session.create_directories("backup/2024").await?;
/// session.change_directory("backup/2024");
/// session.upload("report.pdf", "report.pdf").await?;
///
/// for record in session.list_resources(".").await? {
///     println!("{} {}", record.resource_url(), record.file_size());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WebDavSession {
    pub(crate) auth: WebdavAuth,
    pub(crate) resolver: PathResolver,
}

impl WebDavSession {
    /// 按配置创建会话，端口与协议在这里一次性校验
    pub fn new(config: ClientConfig) -> Result<Self, WebDavError> {
        let base_url = config.base_url()?;
        let auth = WebdavAuth::new(&config)?;

        tracing::debug!(%base_url, "WebDAV 会话已创建");

        Ok(Self { auth, resolver: PathResolver::new(base_url) })
    }

    pub fn base_url(&self) -> &str {
        self.resolver.base_url()
    }

    pub fn current_working_directory(&self) -> &str {
        self.resolver.current_working_directory()
    }

    /// 把路径解析成完整请求地址
    pub fn resolve(&self, path: &str) -> String {
        self.resolver.resolve(path)
    }

    /// 切换虚拟工作目录，只做字符串运算，不访问服务端
    pub fn change_directory(&mut self, path: &str) {
        self.resolver.change_directory(path);
    }

    /// 发送任意 WebDAV 请求并校验状态码，返回原始响应
    pub async fn send(
        &self,
        method: WebDavMethod,
        path: &str,
        expected: ExpectedStatus,
        options: SendOptions,
    ) -> Result<Response, WebDavError> {
        send_request(&self.auth, &self.resolver, method, path, expected, options)
            .await
    }
}
