//! Caller-visible facts about the inbound request.

use std::net::SocketAddr;

use http::header;
use http::Request;
use serde::Serialize;

/// Shown when the request has no User-Agent header.
pub const USER_AGENT_PLACEHOLDER: &str = "Not available";

#[derive(Debug, Clone, Serialize)]
pub struct RequestInfo {
    pub remote_addr: String,
    pub user_agent: String,
    pub method: String,
    pub url: String,
}

impl RequestInfo {
    /// Project the request into its displayed fields.
    ///
    /// `fallback_host` is used when the request carries neither an absolute
    /// URI nor a Host header (HTTP/1.0).
    pub fn describe<B>(req: &Request<B>, remote_addr: SocketAddr, fallback_host: &str) -> Self {
        let user_agent = req
            .headers()
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(USER_AGENT_PLACEHOLDER)
            .to_string();

        Self {
            remote_addr: remote_addr.ip().to_string(),
            user_agent,
            method: req.method().to_string(),
            url: full_url(req, fallback_host),
        }
    }
}

fn full_url<B>(req: &Request<B>, fallback_host: &str) -> String {
    let uri = req.uri();
    let path = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

    // HTTP/2 requests carry the authority in the URI
    let host = uri
        .authority()
        .map(|a| a.as_str())
        .or_else(|| {
            req.headers()
                .get(header::HOST)
                .and_then(|v| v.to_str().ok())
        })
        .unwrap_or(fallback_host);
    let scheme = uri.scheme_str().unwrap_or("http");

    format!("{}://{}{}", scheme, host, path)
}
