//! Multipart form body generation.

use std::borrow::Cow;
use std::fmt::Debug;

/// One named part of a multipart form.
///
/// A part carrying a file name is a file part; otherwise it is a plain value part.
#[derive(Clone, PartialEq, Eq)]
pub struct Part {
    pub(crate) name: Cow<'static, str>,
    pub(crate) file_name: Option<Cow<'static, str>>,
    pub(crate) content_type: Option<Cow<'static, str>>,
    pub(crate) data: Cow<'static, [u8]>,
}

impl Part {
    /// Creates a plain value part. The text is sent as UTF-8 bytes without a file name or
    /// content type.
    pub fn text(name: impl Into<Cow<'static, str>>, value: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            file_name: None,
            content_type: None,
            data: match value.into() {
                Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
                Cow::Owned(s) => Cow::Owned(s.into_bytes()),
            },
        }
    }

    /// Creates a file part.
    pub fn file(
        name: impl Into<Cow<'static, str>>,
        file_name: impl Into<Cow<'static, str>>,
        content_type: impl Into<Cow<'static, str>>,
        data: impl Into<Cow<'static, [u8]>>,
    ) -> Self {
        Self {
            name: name.into(),
            file_name: Some(file_name.into()),
            content_type: Some(content_type.into()),
            data: data.into(),
        }
    }

    /// The form field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The file name, present for file parts only.
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// The content type, present for file parts only.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// The raw part bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl Debug for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Part")
            .field("name", &self.name)
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("data_len", &self.data.len())
            .finish()
    }
}

/// Generates a fresh boundary token.
pub fn generate_boundary() -> String {
    format!("Boundary-{}", uuid::Uuid::new_v4().simple())
}

fn estimate_body_size(boundary: &str, parts: &[Part]) -> usize {
    let size: usize = parts
        .iter()
        .map(|part| {
            64 + boundary.len()
                + part.name.len()
                + part.file_name.as_ref().map(|s| s.len()).unwrap_or_default()
                + part.content_type.as_ref().map(|s| s.len()).unwrap_or_default()
                + part.data.len()
        })
        .sum();
    size + boundary.len() + 6
}

/// Replaces characters that would end the quoted value or the header line.
fn quoted_value<'a>(value: &'a str, stripped: &[char]) -> Cow<'a, str> {
    if value.contains(stripped) {
        value.replace(stripped, "_").into()
    } else {
        value.into()
    }
}

/// Generates a complete multipart body from parts, in the order given.
///
/// Each delimiter line directly follows the previous part's bytes, and the body ends with
/// `CRLF--boundary--`. Part bytes are embedded verbatim. The caller must make sure
/// `boundary` does not occur in any part's data; [`generate_boundary`] makes that
/// practically certain. Quotes and line breaks in names are replaced with `_`, as are
/// slashes and backslashes in file names.
pub fn encode(boundary: &str, parts: &[Part]) -> Vec<u8> {
    const NAME_STRIPPED: &[char] = &['"', '\r', '\n'];
    const FILE_NAME_STRIPPED: &[char] = &['"', '\\', '/', '\r', '\n'];

    let mut body = Vec::with_capacity(estimate_body_size(boundary, parts));

    for part in parts {
        body.extend_from_slice(b"--");
        body.extend_from_slice(boundary.as_bytes());
        body.extend_from_slice(b"\r\nContent-Disposition: form-data; name=\"");
        body.extend_from_slice(quoted_value(&part.name, NAME_STRIPPED).as_bytes());
        body.push(b'"');
        if let Some(file_name) = &part.file_name {
            body.extend_from_slice(b"; filename=\"");
            body.extend_from_slice(quoted_value(file_name, FILE_NAME_STRIPPED).as_bytes());
            body.push(b'"');
        }
        body.extend_from_slice(b"\r\n");
        if let Some(content_type) = &part.content_type {
            body.extend_from_slice(b"Content-Type: \"");
            body.extend_from_slice(quoted_value(content_type, NAME_STRIPPED).as_bytes());
            body.extend_from_slice(b"\"\r\n");
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(&part.data);
    }

    body.extend_from_slice(b"\r\n--");
    body.extend_from_slice(boundary.as_bytes());
    body.extend_from_slice(b"--");
    body
}
