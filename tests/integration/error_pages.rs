//! Error page tests

use crate::helpers::*;
use reqwest::StatusCode;
use tokio_diag::env::MapEnv;

/// Test known codes use their message and status
#[tokio::test]
async fn test_known_error_page() {
    let server = TestServer::start(MapEnv::new()).await;

    let resp = server.get("/error/404").await;
    assert_status(&resp, StatusCode::NOT_FOUND);
    assert_header_starts_with(&resp, "content-type", "text/html");
    assert_body_contains(resp, "404 Resource Not Found").await;

    let resp = server.get("/error/503").await;
    assert_status(&resp, StatusCode::SERVICE_UNAVAILABLE);
    assert_body_contains(resp, "temporarily unavailable").await;
}

/// Test unknown codes fall back to a generic page with the same status
#[tokio::test]
async fn test_unknown_error_page() {
    let server = TestServer::start(MapEnv::new()).await;

    let resp = server.get("/error/418").await;
    assert_eq!(resp.status().as_u16(), 418);
    let body = resp.text().await.unwrap();
    assert!(body.contains("418 Unknown Error"));
    assert!(body.contains("An unspecified error has occurred."));

    let resp = server.get("/error/999").await;
    assert_eq!(resp.status().as_u16(), 999);
}

/// Test codes that cannot be an HTTP status are answered with 500
#[tokio::test]
async fn test_out_of_range_error_code() {
    let server = TestServer::start(MapEnv::new()).await;

    let resp = server.get("/error/42").await;
    assert_status(&resp, StatusCode::INTERNAL_SERVER_ERROR);
    assert_body_contains(resp, "42 Unknown Error").await;

    // Larger than any status, still an error page rather than the index
    let resp = server.get("/error/99999999999").await;
    assert_status(&resp, StatusCode::INTERNAL_SERVER_ERROR);
    assert_body_contains(resp, "99999999999 Unknown Error").await;
}
