//! Wire-level request and response types exchanged with a transport.

use std::borrow::Cow;

/// HTTP method of a wire request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl Method {
    /// The upper-case method token sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A fully-formed request ready to be handed to a transport.
///
/// Header names are unique when compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method.
    pub method: Method,
    /// The absolute request URL.
    pub url: String,
    /// Request headers in insertion order.
    pub headers: Vec<(Cow<'static, str>, Cow<'static, str>)>,
    /// The request body, if any.
    pub body: Option<Vec<u8>>,
}

impl Request {
    /// Gets the value of a header, comparing names case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| &**v)
    }
}

/// What a transport reports back for a completed exchange.
///
/// The status code is opaque metadata; nestnet never interprets it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers as received.
    pub headers: Vec<(String, String)>,
    /// The raw response body.
    pub body: Vec<u8>,
}
