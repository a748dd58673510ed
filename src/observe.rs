//! Diagnostic hooks around dispatch.
//!
//! An observer sees every wire request before it is handed to the transport and every
//! transport result after completion. Observers cannot change the outcome.

use log::debug;
use nestnet_interface::{Error as TransportError, Request, Response};

const LOGGED_BODY_LIMIT: usize = 10_000;

/// Hooks invoked by the [`crate::Dispatcher`] around each exchange.
pub trait DispatchObserver: Send + Sync + 'static {
    /// Called right before the request is handed to the transport.
    fn on_request(&self, _req: &Request) {}

    /// Called when the transport has completed the exchange.
    fn on_response(&self, _req: &Request, _result: &Result<Response, TransportError>) {}
}

/// Writes request and response diagnostics through the [`log`] facade.
///
/// Lines are emitted at debug level under the `nestnet::dispatch` target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogObserver {
    /// Log method, URL and headers of each request.
    pub request_logging: bool,
    /// Log status, headers and body length of each response, or the transport error.
    pub response_logging: bool,
    /// Also log body text of requests and responses.
    pub response_data_logging: bool,
}

impl LogObserver {
    /// Whether this observer would write anything at all.
    pub fn is_enabled(&self) -> bool {
        self.request_logging || self.response_logging
    }
}

impl DispatchObserver for LogObserver {
    fn on_request(&self, req: &Request) {
        if !self.request_logging {
            return;
        }
        debug!(target: "nestnet::dispatch", ">>> method={} url={}", req.method.as_str(), req.url);
        for (k, v) in &req.headers {
            debug!(target: "nestnet::dispatch", ">>> header {k}={v}");
        }
        if let (true, Some(body)) = (self.response_data_logging, &req.body) {
            debug!(
                target: "nestnet::dispatch",
                ">>> body_len={} body={}",
                body.len(),
                String::from_utf8_lossy(&body[..body.len().min(LOGGED_BODY_LIMIT)])
            );
        }
    }

    fn on_response(&self, req: &Request, result: &Result<Response, TransportError>) {
        if !self.response_logging {
            return;
        }
        match result {
            Err(e) => {
                debug!(target: "nestnet::dispatch", "<<< url={} error={e}", req.url);
            }
            Ok(res) => {
                debug!(target: "nestnet::dispatch", "<<< url={} status={}", req.url, res.status);
                for (k, v) in &res.headers {
                    debug!(target: "nestnet::dispatch", "<<< header {k}={v}");
                }
                debug!(target: "nestnet::dispatch", "<<< body_len={}", res.body.len());
                if self.response_data_logging {
                    debug!(
                        target: "nestnet::dispatch",
                        "<<< body={}",
                        String::from_utf8_lossy(&res.body)
                    );
                }
            }
        }
    }
}
