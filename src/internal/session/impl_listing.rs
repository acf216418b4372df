use reqwest::header::{HeaderMap, HeaderValue, LOCATION};
use reqwest::{Response, StatusCode};
use url::Url;

use crate::internal::error::WebDavError;
use crate::internal::resource::structs::resource_record::ResourceRecord;
use crate::internal::session::structs::webdav_session::WebDavSession;
use crate::internal::webdav::enums::{ExpectedStatus, WebDavMethod};
use crate::internal::webdav::functions::send_request::SendOptions;
use crate::internal::webdav::raw_xml::impl_multi_status::ToResourceRecords;
use crate::internal::webdav::raw_xml::multi_status::MultiStatus;

/// 列目录时最多跟随的重定向次数
pub const MAX_REDIRECT_HOPS: usize = 5;

/// 只返回当前资源及直接子资源
const PROPFIND_DEPTH: &str = "1";

const PROPFIND_EXPECTED: ExpectedStatus = ExpectedStatus::Set(&[207, 301]);
const HEAD_EXPECTED: ExpectedStatus = ExpectedStatus::Set(&[200, 301, 404]);

/// 取出 301 响应 Location 的路径部分，相对地址按请求地址补全
fn redirect_path(request_url: &str, response: &Response) -> Result<String, WebDavError> {
    let location = response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(WebDavError::MissingLocation)?;

    let target = Url::parse(request_url)
        .and_then(|base| base.join(location))
        .map_err(|_| WebDavError::MissingLocation)?;

    Ok(target.path().to_string())
}

impl WebDavSession {
    /// 列出目录下的资源（PROPFIND，Depth: 1）
    ///
    /// 返回的记录包含被请求的目录本身。传 `"."` 列出当前工作目录。
    /// 服务端返回 301 时取 Location 的路径重新请求，最多跟随 `MAX_REDIRECT_HOPS` 次。
    pub async fn list_resources(
        &self,
        remote_path: &str,
    ) -> Result<Vec<ResourceRecord>, WebDavError> {
        let mut path = remote_path.to_string();

        for hop in 0..=MAX_REDIRECT_HOPS {
            let mut headers = HeaderMap::new();
            headers.insert("Depth", HeaderValue::from_static(PROPFIND_DEPTH));

            let response = self
                .send(
                    WebDavMethod::PROPFIND,
                    &path,
                    PROPFIND_EXPECTED,
                    SendOptions::with_headers(headers),
                )
                .await?;

            if response.status() == StatusCode::MOVED_PERMANENTLY {
                let next = redirect_path(&self.resolve(&path), &response)?;
                tracing::warn!(hop, from = %path, to = %next, "列目录被重定向");
                path = next;
                continue;
            }

            let xml_text = response.text().await?;
            let multi_status = MultiStatus::from_xml(&xml_text)?;

            return multi_status.to_resource_records();
        }

        Err(WebDavError::TooManyRedirects(MAX_REDIRECT_HOPS))
    }

    /// 列出当前工作目录
    pub async fn list_working_directory(
        &self,
    ) -> Result<Vec<ResourceRecord>, WebDavError> {
        self.list_resources(".").await
    }

    /// 资源是否存在（HEAD），只有 404 视为不存在
    pub async fn resource_exists(&self, remote_path: &str) -> Result<bool, WebDavError> {
        let response = self
            .send(
                WebDavMethod::HEAD,
                remote_path,
                HEAD_EXPECTED,
                SendOptions::default(),
            )
            .await?;

        Ok(response.status() != StatusCode::NOT_FOUND)
    }
}
