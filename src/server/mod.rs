//! HTTP server for the diagnostic pages.
//!
//! This module provides the [`Server`] type that accepts TCP connections and
//! answers every request through a [`PageComposer`].
//!
//! # Routes
//!
//! | Path | Response |
//! |---|---|
//! | `/` | diagnostic page |
//! | `/health` | `{"status":"healthy","timestamp":...}` |
//! | `/error/<code>` | error page with status `<code>` |
//! | anything else | diagnostic page |
//!
//! # Example
//!
//! ```rust,ignore
//! use tokio_diag::server::{PageComposer, Server};
//! use tokio_diag::config::ServerConfig;
//!
//! let server = Server::bind(ServerConfig::default(), PageComposer::from_process())?;
//! server.run().await?;
//! ```
//!
//! # Graceful Shutdown
//!
//! [`Server::trigger_shutdown`] stops the accept loop; [`Server::wait_for_drain`]
//! waits for open connections to finish.

pub mod connection;
pub mod error_pages;
pub mod handler;
pub mod response;
pub mod routing;

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use socket2::{Domain, Protocol, SockRef, Socket, TcpKeepalive, Type};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::config::ServerConfig;
use connection::ConnectionContext;

pub use handler::PageComposer;

/// HTTP server bound to a listening socket.
pub struct Server {
    config: ServerConfig,
    listener: TcpListener,
    local_addr: SocketAddr,
    ctx: Arc<ConnectionContext>,
    /// Active connections counter
    active_connections: Arc<AtomicUsize>,
    /// Shutdown signal sender
    shutdown_tx: watch::Sender<bool>,
    /// Shutdown signal receiver (cloneable)
    shutdown_rx: watch::Receiver<bool>,
    /// Shutdown initiated flag
    shutdown_initiated: AtomicBool,
}

impl Server {
    /// Bind the listening socket. Must be called inside a Tokio runtime.
    pub fn bind(config: ServerConfig, composer: PageComposer) -> std::io::Result<Self> {
        let std_listener = Self::create_listener(config.listen_addr)?;
        let listener = TcpListener::from_std(std_listener)?;
        let local_addr = listener.local_addr()?;

        let active_connections = Arc::new(AtomicUsize::new(0));
        let ctx = Arc::new(ConnectionContext {
            composer: composer.with_fallback_host(local_addr.to_string()),
            active_connections: Arc::clone(&active_connections),
            header_timeout: config.header_timeout,
            access_log_enabled: config.access_log,
        });

        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Ok(Self {
            config,
            listener,
            local_addr,
            ctx,
            active_connections,
            shutdown_tx,
            shutdown_rx,
            shutdown_initiated: AtomicBool::new(false),
        })
    }

    fn create_listener(addr: SocketAddr) -> std::io::Result<std::net::TcpListener> {
        let domain = if addr.is_ipv6() {
            Domain::IPV6
        } else {
            Domain::IPV4
        };

        let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
        socket.set_reuse_address(true)?;
        socket.set_nonblocking(true)?;
        socket.bind(&addr.into())?;
        socket.listen(1024)?;

        Ok(socket.into())
    }

    /// Address the server is listening on (resolves port 0).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Get current active connections count.
    pub fn active_connections(&self) -> usize {
        self.active_connections.load(Ordering::Relaxed)
    }

    /// Get the configured drain timeout.
    pub fn drain_timeout(&self) -> Duration {
        self.config.drain_timeout
    }

    /// Accept connections until shutdown is triggered.
    pub async fn run(&self) -> std::io::Result<()> {
        info!("Server listening on http://{}", self.local_addr);

        let mut shutdown_rx = self.shutdown_rx.clone();
        if *shutdown_rx.borrow() {
            return Ok(());
        }

        loop {
            tokio::select! {
                result = self.listener.accept() => {
                    let (stream, remote_addr) = match result {
                        Ok(conn) => conn,
                        Err(e) => {
                            error!("Accept error: {}", e);
                            continue;
                        }
                    };

                    let _ = stream.set_nodelay(true);

                    let keepalive = TcpKeepalive::new()
                        .with_time(Duration::from_secs(5))
                        .with_interval(Duration::from_secs(1))
                        .with_retries(3);
                    let _ = SockRef::from(&stream).set_tcp_keepalive(&keepalive);

                    let ctx = Arc::clone(&self.ctx);
                    tokio::spawn(async move {
                        ctx.handle_connection(stream, remote_addr).await;
                    });
                }
                _ = shutdown_rx.changed() => {
                    debug!("Received shutdown signal, stopping accept loop");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Trigger graceful shutdown.
    /// Signals the accept loop to stop accepting new connections.
    pub fn trigger_shutdown(&self) {
        if self.shutdown_initiated.swap(true, Ordering::SeqCst) {
            return; // Already initiated
        }
        let _ = self.shutdown_tx.send(true);
    }

    /// Wait for all active connections to drain.
    /// Returns true if drained successfully, false if timeout was reached.
    pub async fn wait_for_drain(&self, timeout: Duration) -> bool {
        let start = std::time::Instant::now();
        let check_interval = Duration::from_millis(100);

        loop {
            let active = self.active_connections.load(Ordering::Relaxed);
            if active == 0 {
                return true;
            }

            if start.elapsed() >= timeout {
                warn!("Drain timeout reached with {} active connections", active);
                return false;
            }

            debug!("Waiting for {} connections to drain...", active);
            tokio::time::sleep(check_interval).await;
        }
    }
}
