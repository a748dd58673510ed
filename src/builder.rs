//! Translation of a [`RequestDescriptor`] into a wire request.

use std::borrow::Cow;

use log::warn;
use nestnet_interface::Request as WireRequest;

use crate::body::Body;
use crate::encoding::encode_form_value;
use crate::error::Result;
use crate::multipart;
use crate::request::{Method, RequestDescriptor};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Header name and value pairs.
pub type Headers = Vec<(Cow<'static, str>, Cow<'static, str>)>;

/// A transport-ready request built from a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltRequest {
    method: Method,
    url: String,
    headers: Headers,
    body: Option<Vec<u8>>,
}

impl BuiltRequest {
    pub fn method(&self) -> Method {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// All headers. Names are unique when compared case-insensitively.
    pub fn headers(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
        &self.headers
    }

    /// Gets a header value, comparing names case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| &**v)
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}

impl From<BuiltRequest> for WireRequest {
    fn from(req: BuiltRequest) -> Self {
        WireRequest {
            method: req.method,
            url: req.url,
            headers: req.headers,
            body: req.body,
        }
    }
}

/// Inserts or replaces a header; a later value wins over an earlier one with the same name.
pub(crate) fn set_header(
    headers: &mut Headers,
    name: Cow<'static, str>,
    value: Cow<'static, str>,
) {
    match headers.iter().position(|(k, _)| k.eq_ignore_ascii_case(&name)) {
        Some(idx) => headers[idx] = (name, value),
        None => headers.push((name, value)),
    }
}

impl RequestDescriptor {
    /// Builds the wire request for this descriptor.
    ///
    /// `extra_headers` are merged last and override headers derived from the body encoding.
    /// A multipart body gets a fresh boundary on every call; everything else is
    /// deterministic.
    pub fn build<K, V>(&self, extra_headers: impl IntoIterator<Item = (K, V)>) -> Result<BuiltRequest>
    where
        K: Into<Cow<'static, str>>,
        V: Into<Cow<'static, str>>,
    {
        let url = self.url()?;
        let mut headers = Headers::new();

        let body = match &self.body {
            Body::None => None,
            Body::Form { fields } => {
                let encoded = fields
                    .iter()
                    .map(|(k, v)| format!("{k}={}", encode_form_value(v)))
                    .collect::<Vec<_>>()
                    .join("&");
                set_header(&mut headers, "Content-Type".into(), FORM_CONTENT_TYPE.into());
                Some(encoded.into_bytes())
            }
            Body::Json { content } => {
                set_header(&mut headers, "Content-Type".into(), JSON_CONTENT_TYPE.into());
                Some(content.to_vec())
            }
            Body::Encodable(value) => {
                set_header(&mut headers, "Content-Type".into(), JSON_CONTENT_TYPE.into());
                Some(value.to_bytes().unwrap_or_else(|e| {
                    warn!(target: "nestnet::builder", "url={url} encodable body failed to serialize, sending empty body: {e}");
                    Vec::new()
                }))
            }
            Body::Multipart { parts } => {
                let boundary = multipart::generate_boundary();
                set_header(
                    &mut headers,
                    "Content-Type".into(),
                    format!("multipart/form-data; boundary={boundary}").into(),
                );
                Some(multipart::encode(&boundary, parts))
            }
        };

        for (k, v) in extra_headers {
            set_header(&mut headers, k.into(), v.into());
        }

        Ok(BuiltRequest {
            method: self.method,
            url,
            headers,
            body,
        })
    }
}
