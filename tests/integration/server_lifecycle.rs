//! Server behaviour independent of routes: headers, concurrency, shutdown.

use std::time::Duration;

use crate::helpers::*;
use reqwest::{Client, StatusCode};
use tokio::task::JoinSet;
use tokio_diag::env::MapEnv;

/// Test every response carries a request id
#[tokio::test]
async fn test_request_id_header() {
    let server = TestServer::start(MapEnv::new()).await;

    let first = server.get("/health").await;
    let second = server.get("/health").await;

    assert_has_header(&first, "x-request-id");
    assert_has_header(&second, "x-request-id");
    assert_ne!(first.headers()["x-request-id"], second.headers()["x-request-id"]);
}

/// Test concurrent requests are served independently
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_requests() {
    let server = TestServer::start(MapEnv::from([("TITLE", "Concurrent")])).await;

    let mut tasks = JoinSet::new();
    for i in 0..16 {
        let client = server.client.clone();
        let url = server.url(if i % 2 == 0 { "/" } else { "/health" });
        tasks.spawn(async move { client.get(url).send().await.map(|r| r.status()) });
    }

    while let Some(result) = tasks.join_next().await {
        let status = result.expect("task panicked").expect("request failed");
        assert_eq!(status, StatusCode::OK);
    }
}

/// Test shutdown drains connections and stops accepting new requests
#[tokio::test]
async fn test_graceful_shutdown() {
    let server = TestServer::start(MapEnv::new()).await;

    // No idle pooling, so the first connection closes after its response
    let client = Client::builder()
        .pool_max_idle_per_host(0)
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let resp = client.get(server.url("/health")).send().await.unwrap();
    assert_status(&resp, StatusCode::OK);
    drop(resp);

    assert!(server.shutdown().await, "connections did not drain");

    let result = client.get(server.url("/health")).send().await;
    assert!(result.is_err(), "server still answering after shutdown");
}
