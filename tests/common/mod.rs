//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use pvt_webgui::config::AppConfig;
use pvt_webgui::lifecycle::{bootstrap, Shutdown};

/// The crate's shipped browser assets.
pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Config listening on an ephemeral localhost port.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.static_files.dir = STATIC_DIR.into();
    config
}

/// Start a server in the background and return its address.
#[allow(dead_code)]
pub async fn start_server(config: AppConfig, shutdown: &Shutdown) -> SocketAddr {
    let ready = bootstrap(config).await.unwrap();
    let addr = ready.listener.local_addr().unwrap();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = ready.server.run(ready.listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    addr
}

/// Build a GET request for `uri`.
#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Collect a response body into a string.
#[allow(dead_code)]
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
