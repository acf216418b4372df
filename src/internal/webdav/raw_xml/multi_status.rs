use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;

use crate::internal::error::WebDavError;

/// WebDAV 的 XML 命名空间
pub const DAV_NAMESPACE: &[u8] = b"DAV:";

/// 从 `<D:response>` 中提取的属性
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DavProperty {
    /// `<href>`：资源路径
    Href,
    /// `<displayname>`：显示名
    DisplayName,
    /// `<getcontentlength>`：文件大小（字节）
    ContentLength,
    /// `<getlastmodified>`：最后修改时间（HTTP-date）
    LastModified,
    /// `<creationdate>`：创建时间（ISO8601）
    CreationDate,
    /// `<getcontenttype>`：MIME 类型
    ContentType,
}

impl DavProperty {
    const ALL: [DavProperty; 6] = [
        DavProperty::Href,
        DavProperty::DisplayName,
        DavProperty::ContentLength,
        DavProperty::LastModified,
        DavProperty::CreationDate,
        DavProperty::ContentType,
    ];
    const COUNT: usize = Self::ALL.len();

    pub fn local_name(&self) -> &'static str {
        match self {
            DavProperty::Href => "href",
            DavProperty::DisplayName => "displayname",
            DavProperty::ContentLength => "getcontentlength",
            DavProperty::LastModified => "getlastmodified",
            DavProperty::CreationDate => "creationdate",
            DavProperty::ContentType => "getcontenttype",
        }
    }

    pub fn from_local_name(name: &[u8]) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|property| property.local_name().as_bytes() == name)
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// 对应单个 `<D:response>` 节点，每个属性只保留子树中第一次出现的值
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
    values: [Option<String>; DavProperty::COUNT],
}

impl RawResponse {
    pub fn get(&self, property: DavProperty) -> Option<&str> {
        self.values[property.index()].as_deref()
    }

    pub fn take(&mut self, property: DavProperty) -> Option<String> {
        self.values[property.index()].take()
    }

    fn is_found(&self, property: DavProperty) -> bool {
        self.values[property.index()].is_some()
    }

    fn set(&mut self, property: DavProperty, value: String) {
        self.values[property.index()] = Some(value);
    }
}

/// 对应 WebDAV 响应 XML 顶层的 `<D:multistatus>` 节点
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiStatus {
    /// 根节点下的 `<D:response>` 列表，顺序与响应体一致
    pub responses: Vec<RawResponse>,
}

/// 正在收集文本的属性节点
struct Capture {
    property: DavProperty,
    depth: usize,
    text: String,
}

fn is_dav(ns: &ResolveResult<'_>) -> bool {
    matches!(ns, ResolveResult::Bound(Namespace(uri)) if *uri == DAV_NAMESPACE)
}

impl MultiStatus {
    /// 解析 207 响应体
    ///
    /// 按命名空间匹配而不是按前缀匹配，`D:`、`d:` 或默认命名空间都能识别；
    /// 非 `DAV:` 命名空间下的同名元素会被忽略。
    pub fn from_xml(xml: &str) -> Result<Self, WebDavError> {
        // 不裁剪空白，属性文本保持服务端原样
        let mut reader = NsReader::from_str(xml);

        let mut responses = Vec::new();
        let mut current: Option<(usize, RawResponse)> = None;
        let mut captures: Vec<Capture> = Vec::new();
        let mut depth = 0usize;

        loop {
            let (ns, event) = reader.read_resolved_event()?;
            let in_dav = is_dav(&ns);

            match event {
                Event::Start(e) => {
                    depth += 1;
                    let local = e.local_name();

                    match current.as_mut() {
                        Some((_, response)) => {
                            let property = in_dav
                                .then(|| DavProperty::from_local_name(local.as_ref()))
                                .flatten();
                            if let Some(property) = property {
                                let pending =
                                    captures.iter().any(|c| c.property == property);
                                if !response.is_found(property) && !pending {
                                    captures.push(Capture {
                                        property,
                                        depth,
                                        text: String::new(),
                                    });
                                }
                            }
                        }
                        None if in_dav
                            && depth == 2
                            && local.as_ref() == b"response" =>
                        {
                            current = Some((depth, RawResponse::default()));
                        }
                        None => {}
                    }
                }
                Event::Empty(e) => {
                    let local = e.local_name();

                    match current.as_mut() {
                        Some((_, response)) => {
                            let property = in_dav
                                .then(|| DavProperty::from_local_name(local.as_ref()))
                                .flatten();
                            if let Some(property) = property {
                                let pending =
                                    captures.iter().any(|c| c.property == property);
                                if !response.is_found(property) && !pending {
                                    response.set(property, String::new());
                                }
                            }
                        }
                        None if in_dav
                            && depth == 1
                            && local.as_ref() == b"response" =>
                        {
                            responses.push(RawResponse::default());
                        }
                        None => {}
                    }
                }
                Event::Text(e) => {
                    if let Some(capture) = captures.last_mut() {
                        if capture.depth == depth {
                            capture.text.push_str(&e.unescape()?);
                        }
                    }
                }
                Event::CData(e) => {
                    if let Some(capture) = captures.last_mut() {
                        if capture.depth == depth {
                            capture.text.push_str(&String::from_utf8_lossy(&e));
                        }
                    }
                }
                Event::End(_) => {
                    if captures.last().is_some_and(|c| c.depth == depth) {
                        if let (Some(capture), Some((_, response))) =
                            (captures.pop(), current.as_mut())
                        {
                            response.set(capture.property, capture.text);
                        }
                    }

                    if current.as_ref().is_some_and(|(d, _)| *d == depth) {
                        if let Some((_, response)) = current.take() {
                            responses.push(response);
                        }
                        captures.clear();
                    }

                    depth = depth.saturating_sub(1);
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(Self { responses })
    }
}
