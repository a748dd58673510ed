use std::borrow::Cow;
use std::sync::mpsc;
use std::thread;

use nestnet_backend_reqwest::ReqwestBackend;
use nestnet_interface::client::TransportOptions;
use nestnet_interface::transport::{Transport, TransportBackend};
use nestnet_interface::{Method, Request};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const RESPONSE: &[u8] = b"HTTP/1.1 200 OK\r\ncontent-length: 5\r\nconnection: close\r\n\r\nhello";

/// Starts a server answering every connection with [`RESPONSE`] on its own runtime thread.
fn spawn_server() -> String {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async move {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();
            loop {
                let (mut stream, _) = listener.accept().await.unwrap();
                tokio::spawn(async move {
                    let mut buf = [0u8; 4096];
                    let _ = stream.read(&mut buf).await;
                    let _ = stream.write_all(RESPONSE).await;
                    let _ = stream.shutdown().await;
                });
            }
        });
    });
    format!("http://{}/", rx.recv().unwrap())
}

fn request(url: &str, i: usize) -> Request {
    Request {
        method: Method::Get,
        url: url.to_owned(),
        headers: vec![(Cow::Borrowed("X-Test-Request"), Cow::Owned(i.to_string()))],
        body: None,
    }
}

/// Test that the transport works inside a futures executor (not tokio)
#[test]
fn test_async_inside_futures_executor() {
    let url = spawn_server();
    let transport = ReqwestBackend
        .create_transport(TransportOptions::default())
        .unwrap();

    let response = futures::executor::block_on(transport.send(request(&url, 0))).unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.body, b"hello");
}

/// Test that the transport works inside a tokio runtime
#[tokio::test]
async fn test_async_inside_tokio_runtime() {
    let url = spawn_server();
    let transport = ReqwestBackend
        .create_transport(TransportOptions::default())
        .unwrap();

    let response = transport.send(request(&url, 0)).await.unwrap();
    assert_eq!(response.status, 200);
}

/// Test that multiple concurrent requests work from plain threads
#[test]
fn test_concurrent_requests_from_threads() {
    let url = spawn_server();
    let transport = ReqwestBackend
        .create_transport(TransportOptions::default())
        .unwrap();

    let handles: Vec<_> = (0..5)
        .map(|i| {
            let transport = transport.clone();
            let url = url.clone();
            thread::spawn(move || {
                let response = futures::executor::block_on(transport.send(request(&url, i))).unwrap();
                assert_eq!(response.status, 200);
                i
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), i);
    }
}
