//! Health endpoint tests

use crate::helpers::*;
use reqwest::StatusCode;
use tokio_diag::env::MapEnv;

/// Test /health returns the JSON liveness document
#[tokio::test]
async fn test_health() {
    let server = TestServer::start(MapEnv::new()).await;
    let resp = server.get("/health").await;

    assert_status(&resp, StatusCode::OK);
    assert_header_starts_with(&resp, "content-type", "application/json");

    let value: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(value["status"], "healthy");
    let ts = value["timestamp"].as_str().expect("timestamp is a string");
    assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok(), "bad timestamp {}", ts);
}

/// Test health stays fast when the database is unreachable
#[tokio::test]
async fn test_health_ignores_database() {
    let server = TestServer::start(MapEnv::from([("DB_HOST", "unreachable-host.invalid")])).await;

    let start = std::time::Instant::now();
    let resp = server.get("/health").await;

    assert_status(&resp, StatusCode::OK);
    assert!(start.elapsed() < std::time::Duration::from_secs(1));
}
