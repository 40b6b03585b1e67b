//! HTTP response building.

use bytes::Bytes;
use http::header::{self, HeaderValue};
use http_body_util::Full;
use hyper::{Response, StatusCode};
use serde::Serialize;

/// Response type produced by every handler.
pub type HttpResponse = Response<Full<Bytes>>;

/// Pre-allocated static header values for common content types.
mod content_types {
    use super::*;
    pub static TEXT_PLAIN: HeaderValue = HeaderValue::from_static("text/plain; charset=utf-8");
    pub static TEXT_HTML: HeaderValue = HeaderValue::from_static("text/html; charset=utf-8");
    pub static APPLICATION_JSON: HeaderValue = HeaderValue::from_static("application/json");
}

static SERVER: HeaderValue =
    HeaderValue::from_static(concat!("tokio_diag/", env!("CARGO_PKG_VERSION")));

static INTERNAL_ERROR_BODY: Bytes = Bytes::from_static(b"Internal Server Error");
static METHOD_NOT_ALLOWED_BODY: Bytes = Bytes::from_static(b"Method Not Allowed");
static ALLOWED_METHODS: HeaderValue = HeaderValue::from_static("GET, HEAD");

#[inline]
fn build(status: StatusCode, content_type: &HeaderValue, body: Bytes) -> HttpResponse {
    let mut resp = Response::new(Full::new(body));
    *resp.status_mut() = status;
    let headers = resp.headers_mut();
    headers.insert(header::CONTENT_TYPE, content_type.clone());
    headers.insert(header::SERVER, SERVER.clone());
    resp
}

/// HTML response.
#[inline]
pub fn html(status: StatusCode, body: String) -> HttpResponse {
    build(status, &content_types::TEXT_HTML, Bytes::from(body))
}

/// JSON response. Serialization of plain data structs does not fail; if it
/// does, the body is `{}`.
pub fn json<T: Serialize>(status: StatusCode, value: &T) -> HttpResponse {
    let body = serde_json::to_vec(value).unwrap_or_else(|_| b"{}".to_vec());
    build(status, &content_types::APPLICATION_JSON, Bytes::from(body))
}

/// Generic 500 response (details go to the log, not the client).
#[inline]
pub fn internal_error() -> HttpResponse {
    build(
        StatusCode::INTERNAL_SERVER_ERROR,
        &content_types::TEXT_PLAIN,
        INTERNAL_ERROR_BODY.clone(),
    )
}

/// 405 for anything but GET/HEAD.
#[inline]
pub fn method_not_allowed() -> HttpResponse {
    let mut resp = build(
        StatusCode::METHOD_NOT_ALLOWED,
        &content_types::TEXT_PLAIN,
        METHOD_NOT_ALLOWED_BODY.clone(),
    );
    resp.headers_mut()
        .insert(header::ALLOW, ALLOWED_METHODS.clone());
    resp
}
