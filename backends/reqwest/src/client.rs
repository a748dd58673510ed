use std::sync::{Arc, OnceLock};

use http::{HeaderMap, HeaderName, HeaderValue};
use nestnet_interface::client::TransportOptions;
use nestnet_interface::Result as NestnetResult;
use reqwest::Client;

use crate::error::{ReqwestBackendError, Result};

/// A transport sending requests with a shared [`reqwest::Client`].
///
/// Cloning shares the connection pool and the managed runtime.
#[derive(Clone)]
pub struct ReqwestTransport {
    pub(crate) client: Client,
    pub(crate) max_response_buffer_size: Option<u64>,
    pub(crate) managed_runtime: Arc<OnceLock<tokio::runtime::Runtime>>,
}

impl ReqwestTransport {
    pub fn new(options: TransportOptions) -> NestnetResult<Self> {
        let client = build_reqwest_client(&options)?;
        Ok(Self::from_client(client, options.max_response_buffer_size))
    }

    /// Wraps an already configured client.
    pub fn from_client(client: Client, max_response_buffer_size: Option<u64>) -> Self {
        Self {
            client,
            max_response_buffer_size,
            managed_runtime: Arc::new(OnceLock::new()),
        }
    }
}

pub fn build_reqwest_client(options: &TransportOptions) -> Result<Client> {
    let mut builder = Client::builder();

    if let Some(user_agent) = &options.user_agent {
        builder = builder.user_agent(user_agent);
    }
    let default_headers: Result<HeaderMap> = options
        .default_headers
        .iter()
        .map(|(k, v)| {
            Ok::<_, ReqwestBackendError>((
                HeaderName::from_bytes(k.as_bytes())
                    .map_err(|_| ReqwestBackendError::InvalidHeaderName(k.into()))?,
                HeaderValue::from_str(v)
                    .map_err(|_| ReqwestBackendError::InvalidHeaderValue(k.into()))?,
            ))
        })
        .collect();

    if !options.use_default_proxy {
        builder = builder.no_proxy();
    }
    builder = builder.redirect(if options.follow_redirects {
        reqwest::redirect::Policy::default()
    } else {
        reqwest::redirect::Policy::none()
    });
    if let Some(timeout) = options.request_timeout {
        builder = builder.timeout(timeout);
    }

    builder
        .default_headers(default_headers?)
        .build()
        .map_err(ReqwestBackendError::Reqwest)
}
