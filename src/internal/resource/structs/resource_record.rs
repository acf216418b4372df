use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// 列目录得到的单个资源，每个 `<D:response>` 对应一条
///
/// 构造后不可变，时间字段保留服务端原始文本，需要时再用 `modified_at`/`created_at` 解析。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRecord {
    resource_url: String,           // `<D:href>` 原文，以 `/` 结尾表示目录
    resource_name: Option<String>,  // `<D:displayname>`
    file_size: u64,                 // `<D:getcontentlength>`，缺省为 0
    modified_time: String,          // `<D:getlastmodified>`，HTTP-date 原文
    creation_time: String,          // `<D:creationdate>`，ISO-8601 原文
    content_type: String,           // `<D:getcontenttype>`
}

impl ResourceRecord {
    pub fn new(
        resource_url: String,
        resource_name: Option<String>,
        file_size: u64,
        modified_time: String,
        creation_time: String,
        content_type: String,
    ) -> Self {
        Self {
            resource_url,
            resource_name,
            file_size,
            modified_time,
            creation_time,
            content_type,
        }
    }

    pub fn resource_url(&self) -> &str {
        &self.resource_url
    }

    pub fn resource_name(&self) -> Option<&str> {
        self.resource_name.as_deref()
    }

    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    pub fn modified_time(&self) -> &str {
        &self.modified_time
    }

    pub fn creation_time(&self) -> &str {
        &self.creation_time
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// `href` 以 `/` 结尾即视为目录
    pub fn is_directory(&self) -> bool {
        self.resource_url.ends_with('/')
    }

    /// 友好名称：优先用 displayname，否则从 href 末尾提取并 URL 解码
    pub fn decoded_name(&self) -> String {
        match self.resource_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => percent_encoding::percent_decode_str(
                self.resource_url
                    .trim_end_matches('/')
                    .rsplit('/')
                    .next()
                    .unwrap_or(""),
            )
            .decode_utf8_lossy()
            .to_string(),
        }
    }

    /// 解析 HTTP-date 格式的修改时间，缺失或格式不对时返回 None
    pub fn modified_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc2822(self.modified_time.trim()).ok()
    }

    /// 解析 ISO-8601 格式的创建时间，缺失或格式不对时返回 None
    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(self.creation_time.trim()).ok()
    }
}
