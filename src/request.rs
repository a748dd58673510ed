use std::borrow::Cow;

use crate::body::Body;
use crate::encoding::{encode_path, encode_query};
use crate::error::{Error, Result};

pub use nestnet_interface::Method;

/// A declarative description of one HTTP request.
///
/// The descriptor is immutable once built; the `with_*` methods consume and return it.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub(crate) method: Method,
    pub(crate) host: Cow<'static, str>,
    pub(crate) endpoint: Cow<'static, [u8]>,
    pub(crate) query: Cow<'static, [u8]>,
    pub(crate) body: Body,
}

impl RequestDescriptor {
    pub fn new(
        method: Method,
        host: impl Into<Cow<'static, str>>,
        endpoint: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            method,
            host: host.into(),
            endpoint: into_bytes(endpoint.into()),
            query: Cow::Borrowed(b""),
            body: Body::None,
        }
    }

    pub fn get(host: impl Into<Cow<'static, str>>, endpoint: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Method::Get, host, endpoint)
    }

    pub fn post(
        host: impl Into<Cow<'static, str>>,
        endpoint: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(Method::Post, host, endpoint)
    }

    pub fn put(host: impl Into<Cow<'static, str>>, endpoint: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Method::Put, host, endpoint)
    }

    pub fn delete(
        host: impl Into<Cow<'static, str>>,
        endpoint: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(Method::Delete, host, endpoint)
    }

    /// Replaces the endpoint with raw bytes, e.g. a path taken from a file name.
    ///
    /// Bytes that are not valid UTF-8 make [`RequestDescriptor::url`] fail.
    pub fn with_raw_endpoint(mut self, endpoint: impl Into<Cow<'static, [u8]>>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the raw, unencoded query string. A non-empty query must carry its leading `?`.
    pub fn with_query(mut self, query: impl Into<Cow<'static, str>>) -> Self {
        self.query = into_bytes(query.into());
        self
    }

    pub fn with_body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Composes the absolute request URL.
    ///
    /// The endpoint and query are percent-encoded, the endpoint is joined to the host with
    /// exactly one `/`, and the encoded query is appended as is.
    pub fn url(&self) -> Result<String> {
        let endpoint = encode_path(&self.endpoint).ok_or_else(|| {
            Error::MalformedUrl(format!(
                "endpoint is not valid UTF-8: {}",
                String::from_utf8_lossy(&self.endpoint)
            ))
        })?;
        let query = encode_query(&self.query).ok_or_else(|| {
            Error::MalformedUrl(format!(
                "query string is not valid UTF-8: {}",
                String::from_utf8_lossy(&self.query)
            ))
        })?;

        let host = self.host.trim_end_matches('/');
        let endpoint = endpoint.strip_prefix('/').unwrap_or(&endpoint);
        let url = format!("{host}/{endpoint}{query}");

        url::Url::parse(&url).map_err(|e| Error::MalformedUrl(format!("{url}: {e}")))?;
        Ok(url)
    }
}

fn into_bytes(s: Cow<'static, str>) -> Cow<'static, [u8]> {
    match s {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}
