use std::future::Future;
use std::sync::OnceLock;

use log::trace;
use nestnet_interface::transport::Transport;
use nestnet_interface::{Request, Response, Result as NestnetResult};
use tokio::runtime::{Handle, Runtime};

use crate::client::ReqwestTransport;
use crate::error::Result;
use crate::response::collect_response;

impl Transport for ReqwestTransport {
    fn describe(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ReqwestTransport")
    }

    async fn send(&self, req: Request) -> NestnetResult<Response> {
        let request_builder = crate::request::build_request(&self.client, req)?;
        let max_response_buffer_size = self.max_response_buffer_size;

        execute_with_runtime_async(&self.managed_runtime, move || async move {
            let response = request_builder.send().await?;
            collect_response(response, max_response_buffer_size).await
        })
        .await
        .map_err(Into::into)
    }
}

/// Create a new tokio runtime for requests issued outside of tokio
fn create_managed_runtime() -> Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .thread_name("nestnet-reqwest")
        .worker_threads(1)
        .enable_all()
        .build()
        .expect("Failed to create managed tokio runtime")
}

/// Run the exchange on the current tokio runtime, or on the managed one when there is none
async fn execute_with_runtime_async<F, Fut, T>(managed_runtime: &OnceLock<Runtime>, task: F) -> Result<T>
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = Result<T>> + Send + 'static,
    T: Send + 'static,
{
    if Handle::try_current().is_ok() {
        task().await
    } else {
        trace!(target: "nestnet::reqwest", "no tokio runtime in scope, using managed runtime");
        let runtime = managed_runtime.get_or_init(create_managed_runtime);
        runtime.spawn(task()).await?
    }
}
