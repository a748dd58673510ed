use std::sync::Arc;
use std::time::Duration;

use nestnet_interface::client::TransportOptions;
use nestnet_interface::transport::{AnyTransport, Transport};

use super::{BuildDispatcherError, BuildDispatcherResult, Dispatcher};
use crate::observe::{DispatchObserver, LogObserver};

/// Configures and creates a [`Dispatcher`].
#[derive(Clone, Default)]
pub struct DispatcherBuilder {
    pub(crate) options: TransportOptions,
    pub(crate) bearer_token: Option<String>,
    pub(crate) log: LogObserver,
    pub(crate) observers: Vec<Arc<dyn DispatchObserver>>,
}

impl DispatcherBuilder {
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.options.user_agent = Some(user_agent.into());
        self
    }

    /// Adds a header the transport sends with every request.
    ///
    /// Headers built from a descriptor take precedence over these.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options
            .default_headers
            .push((name.into(), value.into()));
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.options.request_timeout = Some(timeout);
        self
    }

    pub fn max_response_buffer_size(mut self, size: u64) -> Self {
        self.options.max_response_buffer_size = Some(size);
        self
    }

    pub fn no_redirects(mut self) -> Self {
        self.options.follow_redirects = false;
        self
    }

    pub fn no_proxy(mut self) -> Self {
        self.options.use_default_proxy = false;
        self
    }

    /// Sets the initial bearer token. It can be changed later with
    /// [`Dispatcher::set_bearer_token`].
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn request_logging(mut self, enabled: bool) -> Self {
        self.log.request_logging = enabled;
        self
    }

    pub fn response_logging(mut self, enabled: bool) -> Self {
        self.log.response_logging = enabled;
        self
    }

    /// Includes request and response bodies in the diagnostics.
    pub fn response_data_logging(mut self, enabled: bool) -> Self {
        self.log.response_data_logging = enabled;
        self
    }

    pub fn observer(mut self, observer: impl DispatchObserver) -> Self {
        self.observers.push(Arc::new(observer));
        self
    }

    /// Creates a dispatcher using the registered transport backend.
    pub fn build(self) -> BuildDispatcherResult<Dispatcher> {
        let transport = nestnet_interface::register::BACKEND
            .get()
            .ok_or(BuildDispatcherError::NoBackend)?
            .create_transport(self.options.clone())?;
        Ok(self.finish(transport))
    }

    /// Creates a dispatcher that owns the given transport.
    ///
    /// The transport options of this builder are not applied; the transport is used as
    /// configured.
    pub fn build_with(self, transport: impl Transport) -> Dispatcher {
        self.finish(Arc::new(transport))
    }

    fn finish(self, transport: Arc<dyn AnyTransport>) -> Dispatcher {
        let mut observers = self.observers;
        if self.log.is_enabled() {
            observers.insert(0, Arc::new(self.log));
        }
        Dispatcher::from_parts(transport, self.bearer_token, observers)
    }
}
