//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use super::parse::{env_bool, env_duration, env_parse};
use super::ConfigError;
use crate::env::EnvSource;

/// Default listen address.
pub const DEFAULT_LISTEN_ADDR: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 80);

/// Server configuration loaded from environment.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Listen address (default: 0.0.0.0:80).
    pub listen_addr: SocketAddr,
    /// Tokio worker threads (0 = one per CPU).
    pub workers: usize,
    /// Time allowed for a client to send request headers.
    pub header_timeout: Duration,
    /// Graceful shutdown drain timeout.
    pub drain_timeout: Duration,
    /// Log one access line per request.
    pub access_log: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn from_source<S: EnvSource + ?Sized>(env: &S) -> Result<Self, ConfigError> {
        let listen_addr: SocketAddr = env_parse(env, "LISTEN_ADDR", DEFAULT_LISTEN_ADDR)?;

        let drain_timeout_secs: u64 = env_parse(env, "DRAIN_TIMEOUT_SECS", 30)?;

        Ok(Self {
            listen_addr,
            workers: env_parse(env, "WORKERS", 0)?,
            header_timeout: env_duration(env, "HEADER_TIMEOUT", "10s")?,
            drain_timeout: Duration::from_secs(drain_timeout_secs),
            access_log: env_bool(env, "ACCESS_LOG", false),
        })
    }

    /// Worker thread count with 0 resolved to the CPU count.
    pub fn worker_threads(&self) -> usize {
        if self.workers == 0 {
            num_cpus::get()
        } else {
            self.workers
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR,
            workers: 0,
            header_timeout: Duration::from_secs(10),
            drain_timeout: Duration::from_secs(30),
            access_log: false,
        }
    }
}
