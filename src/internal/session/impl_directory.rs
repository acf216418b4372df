use crate::internal::auth::structs::webdav_auth::WebdavAuth;
use crate::internal::error::WebDavError;
use crate::internal::path::structs::path_resolver::PathResolver;
use crate::internal::path::structs::working_directory_guard::WorkingDirectoryGuard;
use crate::internal::session::structs::webdav_session::WebDavSession;
use crate::internal::webdav::enums::{ExpectedStatus, WebDavMethod};
use crate::internal::webdav::functions::send_request::{SendOptions, send_request};

const MKCOL_EXPECTED: ExpectedStatus = ExpectedStatus::Single(201);
/// 目录已存在（405）或被服务端重定向（301）都视为成功
const MKCOL_SAFE_EXPECTED: ExpectedStatus = ExpectedStatus::Set(&[201, 301, 405]);
const DELETE_EXPECTED: ExpectedStatus = ExpectedStatus::Set(&[200, 204]);
const DELETE_SAFE_EXPECTED: ExpectedStatus = ExpectedStatus::Set(&[200, 204, 404]);

/// 409 表示父目录缺失等结构性冲突，不能当作"已存在"忽略
const CONFLICT: u16 = 409;

async fn mkcol(
    auth: &WebdavAuth,
    resolver: &PathResolver,
    path: &str,
    safe: bool,
) -> Result<(), WebDavError> {
    let expected = if safe { MKCOL_SAFE_EXPECTED } else { MKCOL_EXPECTED };
    send_request(
        auth,
        resolver,
        WebDavMethod::MKCOL,
        path,
        expected,
        SendOptions::default(),
    )
    .await?;
    Ok(())
}

/// 拆分多级目录，保留开头的 `/` 作为绝对路径标记
fn split_segments(path: &str) -> Vec<String> {
    let mut segments: Vec<String> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();

    if path.starts_with('/') {
        if let Some(first) = segments.first_mut() {
            first.insert(0, '/');
        }
    }

    segments
}

impl WebDavSession {
    /// 创建单个目录（MKCOL）
    ///
    /// `safe` 为 true 时，目录已存在（405）或被重定向（301）不会报错。
    pub async fn create_directory(
        &self,
        path: &str,
        safe: bool,
    ) -> Result<(), WebDavError> {
        mkcol(&self.auth, &self.resolver, path, safe).await
    }

    /// 逐级创建多级目录，父目录总是先于子目录创建
    ///
    /// 每一级都以 safe 模式创建，然后无论结果如何都进入该级目录；
    /// 遇到 409 立即返回错误，其余状态码不匹配的情况记录后继续。
    /// 返回时（包括出错和 future 被丢弃）工作目录一定恢复为调用前的值。
    pub async fn create_directories(&mut self, path: &str) -> Result<(), WebDavError> {
        let segments = split_segments(path);
        if segments.is_empty() {
            return Ok(());
        }

        let auth = &self.auth;
        let mut guard = WorkingDirectoryGuard::new(&mut self.resolver);

        for segment in &segments {
            let created = mkcol(auth, &guard, segment, true).await;
            guard.change_directory(segment);

            match created {
                Ok(()) => {}
                Err(WebDavError::OperationFailed(failed))
                    if failed.actual_code == CONFLICT =>
                {
                    return Err(failed.into());
                }
                Err(WebDavError::OperationFailed(failed)) => {
                    tracing::warn!(
                        segment = %segment,
                        status = failed.actual_code,
                        "创建目录未成功，继续处理下一级"
                    );
                }
                Err(other) => return Err(other),
            }
        }

        tracing::debug!(
            path,
            restored = guard.snapshot(),
            "多级目录创建完成"
        );

        Ok(())
    }

    /// 删除目录，路径会被规范成恰好一个结尾 `/`
    ///
    /// `safe` 为 true 时，目录不存在（404）不会报错。
    pub async fn delete_directory(
        &self,
        path: &str,
        safe: bool,
    ) -> Result<(), WebDavError> {
        let path = format!("{}/", path.trim_end_matches('/'));
        let expected = if safe { DELETE_SAFE_EXPECTED } else { DELETE_EXPECTED };

        self.send(WebDavMethod::DELETE, &path, expected, SendOptions::default())
            .await?;
        Ok(())
    }

    /// 删除单个资源
    pub async fn delete_resource(&self, path: &str) -> Result<(), WebDavError> {
        self.send(
            WebDavMethod::DELETE,
            path,
            DELETE_EXPECTED,
            SendOptions::default(),
        )
        .await?;
        Ok(())
    }
}

