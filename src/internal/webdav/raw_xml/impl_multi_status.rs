use crate::internal::error::WebDavError;
use crate::internal::resource::structs::resource_record::ResourceRecord;
use crate::internal::webdav::raw_xml::multi_status::{DavProperty, MultiStatus, RawResponse};

pub trait ToResourceRecords {
    fn to_resource_records(self) -> Result<Vec<ResourceRecord>, WebDavError>;
}

fn parse_content_length(raw: Option<String>) -> Result<u64, WebDavError> {
    // 缺失或为空时按 0 处理，有值但不是数字时报错
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(0),
        Some(text) => text
            .parse::<u64>()
            .map_err(|_| WebDavError::InvalidContentLength(text.to_string())),
    }
}

fn build_record(mut raw: RawResponse) -> Result<ResourceRecord, WebDavError> {
    let file_size = parse_content_length(raw.take(DavProperty::ContentLength))?;

    Ok(ResourceRecord::new(
        raw.take(DavProperty::Href).unwrap_or_default(),
        raw.take(DavProperty::DisplayName).filter(|name| !name.is_empty()),
        file_size,
        raw.take(DavProperty::LastModified).unwrap_or_default(),
        raw.take(DavProperty::CreationDate).unwrap_or_default(),
        raw.take(DavProperty::ContentType).unwrap_or_default(),
    ))
}

impl ToResourceRecords for MultiStatus {
    /// 每个 `<D:response>` 生成一条记录，包括被请求的目录本身
    fn to_resource_records(self) -> Result<Vec<ResourceRecord>, WebDavError> {
        self.responses.into_iter().map(build_record).collect()
    }
}
