//! Process configuration loaded once at startup.
//!
//! Application settings shown on the diagnostic page (`TITLE`, `DB_HOST`, ...)
//! are not part of this; they are read per request through [`crate::env`].
//!
//! # Example
//!
//! ```rust,ignore
//! use tokio_diag::config::Config;
//!
//! let config = Config::from_env()?;
//! println!("Listen address: {}", config.server.listen_addr);
//! ```

mod error;
mod logging;
mod parse;
mod server;

pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use parse::parse_duration;
pub use server::{ServerConfig, DEFAULT_LISTEN_ADDR};

use crate::env::{EnvSource, ProcessEnv};

/// Complete application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(&ProcessEnv)
    }

    /// Load configuration from an arbitrary environment.
    pub fn from_source<S: EnvSource + ?Sized>(env: &S) -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_source(env)?,
            logging: LoggingConfig::from_source(env)?,
        })
    }

    /// Print configuration summary to log.
    pub fn log_summary(&self) {
        use tracing::info;

        info!("Configuration loaded:");
        info!("  Listen: {}", self.server.listen_addr);
        info!("  Workers: {}", self.server.worker_threads());
        info!("  Header timeout: {:?}", self.server.header_timeout);
        info!("  Drain timeout: {}s", self.server.drain_timeout.as_secs());
        info!("  Log format: {:?}", self.logging.format);

        if self.server.access_log {
            info!("  Access log: enabled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnv;

    #[test]
    fn test_config_defaults() {
        let config = Config::from_source(&MapEnv::new()).expect("Should load config");

        assert_eq!(config.server.listen_addr, DEFAULT_LISTEN_ADDR);
        assert!(!config.server.access_log);
        assert_eq!(config.logging.filter, "tokio_diag=info");
    }

    #[test]
    fn test_config_error_propagates() {
        let env = MapEnv::from([("DRAIN_TIMEOUT_SECS", "soon")]);
        assert!(Config::from_source(&env).is_err());
    }
}
