//! Diagnostic page tests: content, masking and catch-all routing.

use crate::helpers::*;
use reqwest::StatusCode;
use tokio_diag::env::MapEnv;

fn app_env() -> MapEnv {
    MapEnv::from([
        ("TITLE", "Orders Service"),
        ("MICROSERVICE", "orders-api"),
        ("ENVIRONMENT", "staging"),
        ("VERSION", "2.4.1"),
        ("DB_PASSWORD", "hunter2"),
        ("STRIPE_SECRET", "sk_live_123"),
        ("HOME", "/home/app"),
    ])
}

/// Test the index page shows application settings and host details
#[tokio::test]
async fn test_index_page() {
    let server = TestServer::start(app_env()).await;
    let resp = server.get("/").await;

    assert_status(&resp, StatusCode::OK);
    assert_header_starts_with(&resp, "content-type", "text/html");

    let body = resp.text().await.unwrap();
    assert!(body.contains("Orders Service"));
    assert!(body.contains("orders-api"));
    assert!(body.contains("staging"));
    assert!(body.contains("2.4.1"));
    assert!(body.contains("diag-test-host"));
    assert!(body.contains("hyper test"));
    assert!(body.contains("/home/app"));
}

/// Test sensitive values never leave the server
#[tokio::test]
async fn test_sensitive_values_masked() {
    let server = TestServer::start(app_env()).await;
    let body = server.get("/").await.text().await.unwrap();

    assert!(!body.contains("hunter2"));
    assert!(!body.contains("sk_live_123"));
    assert!(body.contains("DB_PASSWORD"));
    assert!(body.contains("STRIPE_SECRET"));
    assert!(body.contains("*** HIDDEN FOR SECURITY ***"));
}

/// Test defaults when nothing is configured
#[tokio::test]
async fn test_index_defaults() {
    let server = TestServer::start(MapEnv::new()).await;
    let resp = server.get("/").await;

    assert_status(&resp, StatusCode::OK);
    let body = resp.text().await.unwrap();
    assert!(body.contains("Untitled Application"));
    assert!(body.contains("<td>not configured</td>"));
    assert!(body.contains("No tables to show."));
}

/// Test request details reflect the client
#[tokio::test]
async fn test_request_details() {
    let server = TestServer::start(MapEnv::new()).await;
    let resp = server
        .get_with_headers("/", &[("User-Agent", "diag-integration/1.0")])
        .await;

    let body = resp.text().await.unwrap();
    assert!(body.contains("diag-integration/1.0"));
    assert!(body.contains("<td>127.0.0.1</td>"));
    assert!(body.contains(&format!("http://{}/", server.addr)));
}

/// Test missing User-Agent shows the placeholder
#[tokio::test]
async fn test_missing_user_agent() {
    let server = TestServer::start(MapEnv::new()).await;
    // reqwest sends no User-Agent unless configured
    assert_body_contains(server.get("/").await, "Not available").await;
}

/// Test unknown paths serve the index page instead of 404
#[tokio::test]
async fn test_catch_all_serves_index() {
    let server = TestServer::start(app_env()).await;

    for path in ["/unknown", "/deeply/nested/path", "/error/abc", "/healthz", "/error/"] {
        let resp = server.get(path).await;
        assert_status(&resp, StatusCode::OK);
        assert_body_contains(resp, "Orders Service").await;
    }
}

/// Test an unreachable database is reported inline, not as a failure
#[tokio::test]
async fn test_unreachable_database_reported() {
    let env = MapEnv::from([("DB_HOST", "unreachable-host.invalid"), ("DB_NAME", "orders")]);
    let server = TestServer::start(env).await;
    let resp = server.get("/").await;

    assert_status(&resp, StatusCode::OK);
    let body = resp.text().await.unwrap();
    assert!(body.contains("unreachable-host.invalid"));
    assert!(body.contains("<td>error: "));
    assert!(body.contains("No tables to show."));
}

/// Test only GET and HEAD are accepted
#[tokio::test]
async fn test_method_not_allowed() {
    let server = TestServer::start(MapEnv::new()).await;

    let resp = server.client.post(server.url("/")).send().await.unwrap();
    assert_status(&resp, StatusCode::METHOD_NOT_ALLOWED);
    assert_header_starts_with(&resp, "allow", "GET");

    let resp = server.client.head(server.url("/")).send().await.unwrap();
    assert_status(&resp, StatusCode::OK);
}
