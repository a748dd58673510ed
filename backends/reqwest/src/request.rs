use std::borrow::Cow;

use http::{HeaderName, HeaderValue};
use nestnet_interface::{Method, Request};
use reqwest::{Client, RequestBuilder, Url};

use crate::error::{ReqwestBackendError, Result};

pub fn convert_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn convert_header_name(s: Cow<'static, str>) -> Result<HeaderName> {
    HeaderName::from_bytes(s.as_bytes())
        .map_err(|_| ReqwestBackendError::InvalidHeaderName(s.into_owned()))
}

fn convert_header_value(k: &str, v: Cow<'static, str>) -> Result<HeaderValue> {
    HeaderValue::from_str(&v).map_err(|_| ReqwestBackendError::InvalidHeaderValue(k.into()))
}

pub fn build_request(client: &Client, req: Request) -> Result<RequestBuilder> {
    let url = Url::parse(&req.url).map_err(|_| ReqwestBackendError::InvalidUrl(req.url.clone()))?;
    let mut request_builder = client.request(convert_method(req.method), url);

    for (key, value) in req.headers {
        let value = convert_header_value(&key, value)?;
        request_builder = request_builder.header(convert_header_name(key)?, value);
    }

    if let Some(body) = req.body {
        request_builder = request_builder.body(body);
    }

    Ok(request_builder)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(headers: Vec<(Cow<'static, str>, Cow<'static, str>)>) -> Request {
        Request {
            method: Method::Post,
            url: "http://127.0.0.1:1/items?x=1".into(),
            headers,
            body: Some(b"payload".to_vec()),
        }
    }

    #[test]
    fn test_build_request_carries_everything() {
        let client = Client::new();
        let built = build_request(
            &client,
            request(vec![("Content-Type".into(), "text/plain".into())]),
        )
        .unwrap()
        .build()
        .unwrap();
        assert_eq!(built.method(), reqwest::Method::POST);
        assert_eq!(built.url().as_str(), "http://127.0.0.1:1/items?x=1");
        assert_eq!(built.headers()["content-type"], "text/plain");
        assert_eq!(built.body().and_then(|b| b.as_bytes()), Some(&b"payload"[..]));
    }

    #[test]
    fn test_invalid_header_value() {
        let client = Client::new();
        let err = build_request(&client, request(vec![("X-Bad".into(), "a\r\nb".into())]))
            .unwrap_err();
        assert!(matches!(err, ReqwestBackendError::InvalidHeaderValue(_)));
    }

    #[test]
    fn test_invalid_url() {
        let client = Client::new();
        let mut req = request(vec![]);
        req.url = "no scheme".into();
        let err = build_request(&client, req).unwrap_err();
        assert!(matches!(err, ReqwestBackendError::InvalidUrl(url) if url == "no scheme"));
    }
}
