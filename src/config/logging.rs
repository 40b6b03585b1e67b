//! Logging configuration.

use super::parse::{env_opt, env_or};
use super::ConfigError;
use crate::env::EnvSource;

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable `tracing_subscriber::fmt` output.
    Text,
    /// One JSON object per line.
    Json,
}

/// Logging configuration loaded from environment.
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    /// Log level filter (from LOG_LEVEL or RUST_LOG).
    pub filter: String,
    /// Output format (LOG_FORMAT).
    pub format: LogFormat,
    /// Service name for structured logging.
    pub service_name: String,
}

impl LoggingConfig {
    /// Load configuration from environment variables.
    ///
    /// LOG_LEVEL accepts simple values: trace, debug, info, warn, error
    /// RUST_LOG accepts full tracing filter syntax: tokio_diag=debug,hyper=warn
    pub fn from_source<S: EnvSource + ?Sized>(env: &S) -> Result<Self, ConfigError> {
        let format = match env_or(env, "LOG_FORMAT", "text").to_lowercase().as_str() {
            "text" => LogFormat::Text,
            "json" => LogFormat::Json,
            other => {
                return Err(ConfigError::Invalid {
                    key: "LOG_FORMAT".into(),
                    message: format!("'{}', expected json or text", other),
                })
            }
        };

        Ok(Self {
            filter: Self::resolve_log_filter(env),
            format,
            service_name: env_or(env, "SERVICE_NAME", "tokio_diag"),
        })
    }

    /// Priority: LOG_LEVEL > RUST_LOG > default (info)
    fn resolve_log_filter<S: EnvSource + ?Sized>(env: &S) -> String {
        if let Some(level) = env_opt(env, "LOG_LEVEL") {
            let level = level.to_lowercase();
            match level.as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => {
                    return format!("tokio_diag={}", level);
                }
                _ => {
                    // Subscriber is not installed yet
                    eprintln!(
                        "Warning: Invalid LOG_LEVEL '{}', expected: trace, debug, info, warn, error",
                        level
                    );
                }
            }
        }

        env_opt(env, "RUST_LOG").unwrap_or_else(|| "tokio_diag=info".to_string())
    }
}
