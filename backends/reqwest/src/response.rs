use nestnet_interface::Response;

use crate::error::{ReqwestBackendError, Result};

/// Reads the whole response, enforcing the optional body size limit.
pub(crate) async fn collect_response(
    mut response: reqwest::Response,
    max_response_buffer_size: Option<u64>,
) -> Result<Response> {
    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(k, v)| {
            (
                k.as_str().to_owned(),
                String::from_utf8_lossy(v.as_bytes()).into_owned(),
            )
        })
        .collect();

    if let (Some(max), Some(len)) = (max_response_buffer_size, response.content_length()) {
        if len > max {
            return Err(ReqwestBackendError::ResponseTooLarge);
        }
    }

    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        if max_response_buffer_size.is_some_and(|max| (body.len() + chunk.len()) as u64 > max) {
            return Err(ReqwestBackendError::ResponseTooLarge);
        }
        body.extend_from_slice(&chunk);
    }

    Ok(Response {
        status,
        headers,
        body,
    })
}
