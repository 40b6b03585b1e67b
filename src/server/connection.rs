//! Per-connection HTTP serving.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use http::header::{self, HeaderValue};
use hyper::body::{Body, Incoming as IncomingBody};
use hyper::service::service_fn;
use hyper::Request;
use hyper_util::rt::{TokioExecutor, TokioIo, TokioTimer};
use hyper_util::server::conn::auto;
use tokio::net::TcpStream;
use tracing::{debug, error};

use super::handler::PageComposer;
use super::response::{self, HttpResponse};

/// Response header carrying the request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Check if an error is a common connection reset or timeout.
#[inline]
fn is_connection_error(err_str: &str) -> bool {
    err_str.contains("connection reset")
        || err_str.contains("Connection reset")
        || err_str.contains("broken pipe")
        || err_str.contains("os error 104")
        || err_str.contains("os error 32")
        || err_str.contains("timed out")
        || err_str.contains("HeaderTimeout")
}

/// Connection handler context, shared by all connections of a server.
pub struct ConnectionContext {
    pub composer: PageComposer,
    pub active_connections: Arc<AtomicUsize>,
    /// Header read timeout (HEADER_TIMEOUT).
    pub header_timeout: Duration,
    /// Access logging enabled (ACCESS_LOG=1).
    pub access_log_enabled: bool,
}

/// Decrements the active connection counter when the connection ends.
struct ConnectionGuard(Arc<AtomicUsize>);

impl ConnectionGuard {
    fn new(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::Relaxed);
        Self(Arc::clone(counter))
    }
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::Relaxed);
    }
}

impl ConnectionContext {
    /// Serve HTTP/1.1 or HTTP/2 on an accepted TCP connection.
    pub async fn handle_connection(self: Arc<Self>, stream: TcpStream, remote_addr: SocketAddr) {
        let _guard = ConnectionGuard::new(&self.active_connections);

        let ctx = Arc::clone(&self);
        let service = service_fn(move |req| {
            let ctx = Arc::clone(&ctx);
            async move { Ok::<_, Infallible>(ctx.handle_request(req, remote_addr).await) }
        });

        let io = TokioIo::new(stream);
        if let Err(err) = auto::Builder::new(TokioExecutor::new())
            .http1()
            .timer(TokioTimer::new())
            .header_read_timeout(Some(self.header_timeout))
            .keep_alive(true)
            .serve_connection(io, service)
            .await
        {
            let err_str = format!("{:?}", err);
            if !is_connection_error(&err_str) {
                debug!("Connection error: {:?}", err);
            }
        }
    }

    async fn handle_request(&self, req: Request<IncomingBody>, remote_addr: SocketAddr) -> HttpResponse {
        let start = Instant::now();
        let request_id = uuid::Uuid::new_v4().simple().to_string();

        // No route reads a body
        let (parts, _body) = req.into_parts();
        let req = Request::from_parts(parts, ());

        let mut resp = match self.composer.handle(&req, remote_addr).await {
            Ok(resp) => resp,
            Err(e) => {
                error!(
                    request_id = %request_id,
                    path = req.uri().path(),
                    "Request failed: {}",
                    e
                );
                response::internal_error()
            }
        };

        if let Ok(value) = HeaderValue::from_str(&request_id) {
            resp.headers_mut().insert(REQUEST_ID_HEADER, value);
        }

        if self.access_log_enabled {
            let ua = req
                .headers()
                .get(header::USER_AGENT)
                .and_then(|v| v.to_str().ok());
            tracing::info!(
                target: "access",
                request_id = %request_id,
                method = %req.method(),
                path = req.uri().path(),
                query = req.uri().query(),
                status = resp.status().as_u16(),
                bytes = resp.body().size_hint().exact().unwrap_or(0),
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                ip = %remote_addr.ip(),
                ua = ua,
            );
        }

        resp
    }
}
