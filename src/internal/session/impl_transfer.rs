use std::path::Path;

use bytes::BytesMut;
use futures_util::StreamExt;
use reqwest::Body;
use reqwest::header::{CONTENT_LENGTH, HeaderMap, HeaderValue};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::internal::error::WebDavError;
use crate::internal::session::structs::webdav_session::WebDavSession;
use crate::internal::webdav::enums::{ExpectedStatus, WebDavMethod};
use crate::internal::webdav::functions::send_request::SendOptions;

/// 下载时每次写入本地文件的块大小（1 MiB）
pub const DOWNLOAD_CHUNK_SIZE: usize = 1024 * 1024;

const PUT_EXPECTED: ExpectedStatus = ExpectedStatus::Set(&[200, 201, 204]);
const GET_EXPECTED: ExpectedStatus = ExpectedStatus::Single(200);

impl WebDavSession {
    /// 上传本地文件（PUT），文件内容以流的形式作为请求体
    ///
    /// 文件句柄归请求体所有，请求结束（成功或失败）后即被关闭。
    pub async fn upload(
        &self,
        local_source: impl AsRef<Path>,
        remote_path: &str,
    ) -> Result<(), WebDavError> {
        let file = File::open(local_source.as_ref())
            .await
            .map_err(WebDavError::OpenFile)?;
        let length = file.metadata().await.map_err(WebDavError::OpenFile)?.len();

        // 带上长度，避免服务端收到 chunked 编码
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_LENGTH, HeaderValue::from(length));

        let options = SendOptions { headers, body: Some(Body::from(file)) };
        self.send(WebDavMethod::PUT, remote_path, PUT_EXPECTED, options)
            .await?;

        Ok(())
    }

    /// 下载远程文件（GET）到本地，响应体按 1 MiB 一块写入
    pub async fn download(
        &self,
        remote_path: &str,
        local_destination: impl AsRef<Path>,
    ) -> Result<(), WebDavError> {
        let response = self
            .send(
                WebDavMethod::GET,
                remote_path,
                GET_EXPECTED,
                SendOptions::default(),
            )
            .await?;

        let mut file = File::create(local_destination.as_ref())
            .await
            .map_err(WebDavError::CreateFile)?;

        let mut stream = response.bytes_stream();
        let mut buffer = BytesMut::with_capacity(DOWNLOAD_CHUNK_SIZE);
        let mut bytes_done: u64 = 0;

        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result?;
            let mut rest = &chunk[..];

            while !rest.is_empty() {
                let take = (DOWNLOAD_CHUNK_SIZE - buffer.len()).min(rest.len());
                buffer.extend_from_slice(&rest[..take]);
                rest = &rest[take..];

                if buffer.len() == DOWNLOAD_CHUNK_SIZE {
                    file.write_all(&buffer).await.map_err(WebDavError::WriteFile)?;
                    bytes_done += buffer.len() as u64;
                    buffer.clear();
                }
            }
        }

        if !buffer.is_empty() {
            file.write_all(&buffer).await.map_err(WebDavError::WriteFile)?;
            bytes_done += buffer.len() as u64;
        }

        file.flush().await.map_err(WebDavError::WriteFile)?;

        tracing::debug!(remote_path, bytes_done, "下载完成");

        Ok(())
    }
}
