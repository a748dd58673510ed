//! Dispatching descriptors through a transport.

mod builder;
mod error;
mod outcome;

use std::fmt;
use std::io;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use futures::executor::ThreadPool;
use nestnet_interface::transport::AnyTransport;
use nestnet_interface::Request as WireRequest;

pub use builder::DispatcherBuilder;
pub use error::{BuildDispatcherError, BuildDispatcherResult};
pub use outcome::DispatchOutcome;

use crate::observe::DispatchObserver;
use crate::request::RequestDescriptor;

/// Builds requests from descriptors and hands them to an owned transport.
///
/// Cloning is cheap and clones share the transport, the bearer token and the
/// background executor. Concurrent calls never share build state.
#[derive(Clone)]
pub struct Dispatcher {
    inner: Arc<Inner>,
}

struct Inner {
    transport: Arc<dyn AnyTransport>,
    bearer_token: RwLock<Option<String>>,
    observers: Vec<Arc<dyn DispatchObserver>>,
    executor: OnceLock<ThreadPool>,
}

impl Dispatcher {
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::default()
    }

    pub(crate) fn from_parts(
        transport: Arc<dyn AnyTransport>,
        bearer_token: Option<String>,
        observers: Vec<Arc<dyn DispatchObserver>>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                transport,
                bearer_token: RwLock::new(bearer_token),
                observers,
                executor: OnceLock::new(),
            }),
        }
    }

    /// Sets the token sent as `Authorization: Bearer <token>` on subsequent calls.
    ///
    /// Calls already in flight keep the token they were built with.
    pub fn set_bearer_token(&self, token: impl Into<String>) {
        *self
            .inner
            .bearer_token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(token.into());
    }

    pub fn clear_bearer_token(&self) {
        *self
            .inner
            .bearer_token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn bearer_token(&self) -> Option<String> {
        self.inner
            .bearer_token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn auth_headers(&self) -> Vec<(&'static str, String)> {
        match self.bearer_token() {
            Some(token) => vec![("Authorization", format!("Bearer {token}"))],
            None => vec![],
        }
    }

    /// Builds and sends the request described by `descriptor`.
    ///
    /// Resolves to exactly one outcome. Any HTTP status counts as success; only transport
    /// errors produce [`DispatchOutcome::Failure`], and a request that cannot be built
    /// yields [`DispatchOutcome::BuildFailure`] without touching the network.
    pub async fn execute(&self, descriptor: &RequestDescriptor) -> DispatchOutcome {
        let built = match descriptor.build(self.auth_headers()) {
            Ok(built) => built,
            Err(e) => return DispatchOutcome::BuildFailure(e),
        };
        let req = WireRequest::from(built);

        for observer in &self.inner.observers {
            observer.on_request(&req);
        }
        let observed = (!self.inner.observers.is_empty()).then(|| req.clone());

        let result = self.inner.transport.send(req).await;

        if let Some(req) = observed {
            for observer in &self.inner.observers {
                observer.on_response(&req, &result);
            }
        }

        match result {
            Ok(res) => DispatchOutcome::Success(res.body),
            Err(e) => DispatchOutcome::Failure(e.into()),
        }
    }

    /// Dispatches in the background and calls `on_complete` exactly once with the outcome.
    ///
    /// Returns immediately. The callback runs on a background thread owned by this
    /// dispatcher, not on the calling thread.
    pub fn execute_with<F>(&self, descriptor: RequestDescriptor, on_complete: F)
    where
        F: FnOnce(DispatchOutcome) + Send + 'static,
    {
        let executor = match self.executor() {
            Ok(executor) => executor,
            Err(e) => return on_complete(DispatchOutcome::Failure(e.into())),
        };
        let dispatcher = self.clone();
        executor.spawn_ok(async move {
            let outcome = dispatcher.execute(&descriptor).await;
            on_complete(outcome);
        });
    }

    fn executor(&self) -> io::Result<&ThreadPool> {
        if let Some(executor) = self.inner.executor.get() {
            return Ok(executor);
        }
        let executor = ThreadPool::builder()
            .name_prefix("nestnet-dispatch-")
            .create()?;
        Ok(self.inner.executor.get_or_init(|| executor))
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Describe<'a>(&'a dyn AnyTransport);
        impl fmt::Debug for Describe<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.describe(f)
            }
        }
        f.debug_struct("Dispatcher")
            .field("transport", &Describe(&*self.inner.transport))
            .field("observers", &self.inner.observers.len())
            .finish_non_exhaustive()
    }
}
