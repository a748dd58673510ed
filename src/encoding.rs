//! Percent-encoding for URL paths, query strings and form values.
//!
//! Every byte outside the allowed set of the respective component is written as a `%XX`
//! escape. Non-ASCII text is encoded as its UTF-8 bytes.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left untouched in a URL path: unreserved, sub-delims except `;`, `:`, `@` and
/// `/`.
const PATH_ALLOWED: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b'=')
    .remove(b':')
    .remove(b'@')
    .remove(b'/');

/// The path set plus `;` and `?`, so a pass-through query like `?a=b&c=d` keeps its
/// structure.
const QUERY_ALLOWED: AsciiSet = PATH_ALLOWED.remove(b';').remove(b'?');

/// Characters left untouched in a form value: alphanumerics and `-._~/?`.
const FORM_ALLOWED: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/')
    .remove(b'?');

/// Encodes a URL path.
///
/// Returns `None` when `path` is not valid UTF-8 text.
pub fn encode_path(path: &[u8]) -> Option<String> {
    encode_text(path, &PATH_ALLOWED)
}

/// Encodes a raw query string, including any leading `?` the caller supplied.
///
/// Returns `None` when `query` is not valid UTF-8 text.
pub fn encode_query(query: &[u8]) -> Option<String> {
    encode_text(query, &QUERY_ALLOWED)
}

/// Encodes a single `application/x-www-form-urlencoded` value.
pub fn encode_form_value(value: &str) -> String {
    utf8_percent_encode(value, &FORM_ALLOWED).to_string()
}

fn encode_text(input: &[u8], allowed: &'static AsciiSet) -> Option<String> {
    let text = std::str::from_utf8(input).ok()?;
    Some(utf8_percent_encode(text, allowed).to_string())
}
