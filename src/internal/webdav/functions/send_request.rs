use reqwest::header::HeaderMap;
use reqwest::{Body, Response};

use crate::internal::auth::structs::webdav_auth::WebdavAuth;
use crate::internal::error::{OperationFailed, WebDavError};
use crate::internal::path::structs::path_resolver::PathResolver;
use crate::internal::webdav::enums::{ExpectedStatus, WebDavMethod};

/// 单次请求的附加内容
#[derive(Debug, Default)]
pub struct SendOptions {
    pub headers: HeaderMap,
    pub body: Option<Body>,
}

impl SendOptions {
    pub fn with_headers(headers: HeaderMap) -> Self {
        Self { headers, body: None }
    }

    pub fn with_body(body: Body) -> Self {
        Self { headers: HeaderMap::new(), body: Some(body) }
    }
}

/// 发送一次 WebDAV 请求并校验状态码
///
/// 客户端本身已禁用自动重定向，3xx 原样返回给调用方判断。
/// 状态码不在 `expected` 中时返回 `OperationFailed`，传输层错误原样透出。
pub(crate) async fn send_request(
    webdav_auth: &WebdavAuth,
    resolver: &PathResolver,
    method: WebDavMethod,
    path: &str,
    expected: ExpectedStatus,
    options: SendOptions,
) -> Result<Response, WebDavError> {
    let url = resolver.resolve(path);
    tracing::debug!(%method, %url, "发送 WebDAV 请求");

    let mut request = webdav_auth
        .client
        .request(method.to_request_method(), &url)
        .headers(options.headers);

    if let Some(body) = options.body {
        request = request.body(body);
    }

    let response = request.send().await?;
    let actual = response.status().as_u16();

    if !expected.contains(actual) {
        return Err(OperationFailed::new(method, path, expected, actual).into());
    }

    Ok(response)
}
