#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use reqwest::Client;
use server::config::{Config, DEFAULT_UPSTREAM_TIMEOUT_MS};

/// Build a reqwest client for tests.
pub fn client() -> Client {
    Client::new()
}

/// Serve `app` on an ephemeral localhost port for the rest of the test.
pub async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server error");
    });
    addr
}

/// Start a stub prediction service. Routes should be mounted under `/api`.
/// Returns the base URL the proxy should be configured with.
pub async fn spawn_upstream(app: Router) -> String {
    let addr = serve(app).await;
    format!("http://{addr}/api")
}

/// Start the real proxy pointed at `upstream_base_url`.
pub async fn spawn_proxy(upstream_base_url: &str) -> String {
    spawn_proxy_with_timeout(
        upstream_base_url,
        Duration::from_millis(DEFAULT_UPSTREAM_TIMEOUT_MS),
    )
    .await
}

pub async fn spawn_proxy_with_timeout(upstream_base_url: &str, timeout: Duration) -> String {
    let mut config = Config::with_upstream(upstream_base_url);
    config.upstream_timeout = timeout;
    let app = server::app::build_router(&config).expect("Failed to build router");
    let addr = serve(app).await;
    format!("http://{addr}")
}

/// A base URL nothing is listening on.
pub fn unreachable_upstream() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("No local addr");
    drop(listener);
    format!("http://{addr}/api")
}
