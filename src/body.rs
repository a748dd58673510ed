use std::borrow::Cow;
use std::fmt::{self, Debug, Display};
use std::sync::Arc;

use crate::multipart::Part;

/// Error type returned by [`NetworkEncodable::to_bytes`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A value that can serialize itself into a request body.
pub trait NetworkEncodable: Send + Sync {
    /// Serializes the value into bytes.
    fn to_bytes(&self) -> Result<Vec<u8>, BoxError>;
}

/// How the payload of a request is encoded.
#[derive(Clone, Default)]
pub enum Body {
    /// No body.
    #[default]
    None,
    /// `application/x-www-form-urlencoded` fields in insertion order.
    Form {
        /// Field names and their textual values.
        fields: Vec<(Cow<'static, str>, String)>,
    },
    /// `multipart/form-data` parts in insertion order.
    Multipart {
        /// The parts of the form.
        parts: Vec<Part>,
    },
    /// JSON bytes sent verbatim.
    Json {
        /// The encoded JSON document.
        content: Cow<'static, [u8]>,
    },
    /// A value serialized when the request is built.
    Encodable(Arc<dyn NetworkEncodable>),
}

impl Body {
    /// Creates a form body from name/value pairs.
    pub fn form<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Cow<'static, str>>,
        V: Display,
    {
        Self::Form {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        }
    }

    /// Creates a multipart body from parts.
    pub fn multipart(parts: impl IntoIterator<Item = Part>) -> Self {
        Self::Multipart {
            parts: parts.into_iter().collect(),
        }
    }

    /// Creates a JSON body from already-encoded bytes.
    pub fn json_bytes(bytes: impl Into<Cow<'static, [u8]>>) -> Self {
        Self::Json {
            content: bytes.into(),
        }
    }

    /// Creates a body from a value that encodes itself.
    pub fn encodable(value: impl NetworkEncodable + 'static) -> Self {
        Self::Encodable(Arc::new(value))
    }

    /// Creates a body serializing `value` as JSON when the request is built.
    #[cfg(feature = "json")]
    #[cfg_attr(docsrs, doc(cfg(feature = "json")))]
    pub fn json<T>(value: T) -> Self
    where
        T: serde::Serialize + Send + Sync + 'static,
    {
        Self::encodable(Json(value))
    }
}

impl Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Body::None => f.write_str("Body::None"),
            Body::Form { fields } => f
                .debug_struct("Body::Form")
                .field("fields", fields)
                .finish(),
            Body::Multipart { parts } => f
                .debug_struct("Body::Multipart")
                .field("parts", parts)
                .finish(),
            Body::Json { content } => f
                .debug_struct("Body::Json")
                .field("content_len", &content.len())
                .finish(),
            Body::Encodable(_) => f.write_str("Body::Encodable"),
        }
    }
}

/// Wraps a [`serde::Serialize`] value so it encodes as JSON.
#[cfg(feature = "json")]
#[cfg_attr(docsrs, doc(cfg(feature = "json")))]
#[derive(Debug, Clone)]
pub struct Json<T>(pub T);

#[cfg(feature = "json")]
impl<T> NetworkEncodable for Json<T>
where
    T: serde::Serialize + Send + Sync,
{
    fn to_bytes(&self) -> Result<Vec<u8>, BoxError> {
        Ok(serde_json::to_vec(&self.0)?)
    }
}

/// Constructs a form body from name/value pairs, keeping their order.
///
/// Values can be anything implementing [`std::fmt::Display`].
///
/// ```
/// let body = nestnet::body_form! {
///     "q" => "rust lang",
///     "page" => 2,
/// };
/// ```
#[macro_export]
macro_rules! body_form {
    ($($key:expr => $value:expr),* $(,)?) => {
        $crate::Body::Form {
            fields: vec![$(($key.into(), ::std::string::ToString::to_string(&$value)),)*],
        }
    };
}
