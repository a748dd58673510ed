#![cfg(test)]

use std::{
    collections::BTreeMap,
    convert::Infallible,
    future::Future,
    io,
    net::SocketAddr,
    pin::Pin,
    sync::{LazyLock, Mutex, Once},
};

use http_body_util::Full;
use hyper::{
    body::{self, Bytes},
    server::conn::http1,
    service::service_fn,
    Request, Response,
};
use hyper_util::rt::TokioIo;
use nestnet::DispatcherBuilder;
use tokio::net::TcpListener;

mod fixtures;

#[must_use]
struct HyperFixtureHandle(String);

impl Drop for HyperFixtureHandle {
    fn drop(&mut self) {
        let failed_request = {
            let mut services = HYPER_SERVICE_FIXTURES.lock().unwrap();
            services
                .remove(&*self.0)
                .expect("fixture not found")
                .assertion_failed_request
        };
        if let Some(req) = failed_request {
            panic!("assertion failed for request {}: {}", self.0, req);
        }
    }
}

/// The response to send back, and a description of the request if it did not look as expected.
type FixtureAssertionResult = (Response<Full<Bytes>>, Result<(), String>);

type HyperServiceFixtureCallback = Box<
    dyn Fn(Request<body::Incoming>) -> Pin<Box<dyn Future<Output = FixtureAssertionResult> + Send>>
        + Send
        + Sync,
>;
struct HyperServiceFixture {
    svc: HyperServiceFixtureCallback,
    assertion_failed_request: Option<String>,
}

static HYPER_SERVICE_FIXTURES: Mutex<BTreeMap<String, HyperServiceFixture>> =
    Mutex::new(BTreeMap::new());

fn add_hyper_fixture<Fut>(
    url: impl Into<String>,
    svc_fn: impl Fn(Request<body::Incoming>) -> Fut + Send + Sync + 'static,
) -> HyperFixtureHandle
where
    Fut: Future<Output = FixtureAssertionResult> + Send + 'static,
{
    let mut url: String = url.into();
    if !url.starts_with('/') {
        url.insert(0, '/');
    }
    let svc = Box::new(move |req| Box::pin(svc_fn(req)) as _);
    let fixture = HyperServiceFixture {
        svc,
        assertion_failed_request: None,
    };
    {
        let url = url.clone();
        let mut services = HYPER_SERVICE_FIXTURES.lock().unwrap();
        services.insert(url, fixture);
    }
    HyperFixtureHandle(url)
}

async fn handle_service(req: Request<body::Incoming>) -> Result<Response<Full<Bytes>>, Infallible> {
    let path = req.uri().path().to_owned();
    let fut = {
        let services = HYPER_SERVICE_FIXTURES.lock().unwrap();
        match services.get(&*path) {
            Some(fixture) => (fixture.svc)(req),
            None => {
                let mut res = Response::new(Full::new(Bytes::from_static(b"no fixture")));
                *res.status_mut() = hyper::StatusCode::NOT_FOUND;
                return Ok(res);
            }
        }
    };
    let (response, result) = fut.await;

    if let Err(req) = result {
        let mut services = HYPER_SERVICE_FIXTURES.lock().unwrap();
        if let Some(fixture) = services.get_mut(&*path) {
            fixture.assertion_failed_request = Some(req);
        }
    }

    Ok(response)
}

async fn setup_hyper_impl() -> Result<String, io::Error> {
    let addr = SocketAddr::from(([127, 0, 0, 1], 0));

    let listener = TcpListener::bind(addr).await?;
    let port = listener.local_addr()?.port();

    tokio::spawn(async move {
        loop {
            let (stream, _) = listener.accept().await.expect("accept failed");
            let io = TokioIo::new(stream);

            tokio::task::spawn(async move {
                if let Err(err) = http1::Builder::new()
                    .serve_connection(io, service_fn(handle_service))
                    .await
                {
                    eprintln!("Error serving connection: {err:?}");
                }
            });
        }
    });

    Ok(format!("http://127.0.0.1:{port}"))
}

static TOKIO_RT: LazyLock<tokio::runtime::Runtime> = LazyLock::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap()
});

/// Registers the backend and starts the fixture server, returning the server's base URL.
fn init_host() -> io::Result<String> {
    use tokio::sync::OnceCell;

    static BACKEND_INIT: Once = Once::new();
    BACKEND_INIT.call_once(init_backend);

    static HYPER_SERVICE_INIT: OnceCell<io::Result<String>> = OnceCell::const_new();
    TOKIO_RT.block_on(async {
        match HYPER_SERVICE_INIT.get_or_init(setup_hyper_impl).await {
            Ok(url) => Ok(url.clone()),
            Err(err) => Err(io::Error::new(err.kind(), err.to_string())),
        }
    })
}

fn init_builder() -> io::Result<(String, DispatcherBuilder)> {
    Ok((init_host()?, DispatcherBuilder::default().request_logging(true)))
}

macro_rules! declare_backends {
    ($(($feature:expr, $pkg:ident)),* $(,)*) => {
        cfg_if::cfg_if! {
            if #[cfg(any())] {
            } $(
                else if #[cfg(feature = $feature)] {
                    use $pkg as backend;
                }
            )* else {
                pub mod backend {
                    pub fn register() { }
                }
            }
        }

        #[allow(non_upper_case_globals)]
        let backend_feature_count = 0 $(+ cfg!(feature = $feature) as u32)*;
        match backend_feature_count {
            0 => panic!("No backend feature enabled."),
            1 => backend::register(),
            _ => panic!("Multiple backend features enabled."),
        }
    };
}

fn init_backend() {
    declare_backends!(("reqwest", nestnet_backend_reqwest));
}
