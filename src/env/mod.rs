//! Application settings read from the process environment.
//!
//! Every request reads its settings fresh through an [`EnvSource`], so the
//! handlers never touch `std::env` directly and tests can inject a fixed
//! environment with [`MapEnv`].
//!
//! # Example
//!
//! ```rust
//! use tokio_diag::env::{MapEnv, Settings};
//!
//! let settings = Settings::new(MapEnv::from([("TITLE", "Billing")]));
//! assert_eq!(settings.get("TITLE", "Untitled Application"), "Billing");
//! assert_eq!(settings.get("VERSION", "1.0.0"), "1.0.0");
//! ```

mod source;

pub use source::{EnvSource, MapEnv, ProcessEnv};

/// Application setting names and their defaults.
pub mod keys {
    pub const TITLE: (&str, &str) = ("TITLE", "Untitled Application");
    pub const MICROSERVICE: (&str, &str) = ("MICROSERVICE", "Unconfigured Microservice");
    pub const ENVIRONMENT: (&str, &str) = ("ENVIRONMENT", "development");
    pub const VERSION: (&str, &str) = ("VERSION", "1.0.0");
    pub const DB_HOST: (&str, &str) = ("DB_HOST", "localhost");
    pub const DB_PORT: (&str, &str) = ("DB_PORT", "3306");
    pub const DB_USER: (&str, &str) = ("DB_USER", "db_user");
    pub const DB_PASSWORD: (&str, &str) = ("DB_PASSWORD", "db_password");
    pub const DB_NAME: (&str, &str) = ("DB_NAME", "db_name");
}

/// Named-setting reader over an [`EnvSource`].
#[derive(Clone, Debug, Default)]
pub struct Settings<S: EnvSource> {
    source: S,
}

impl<S: EnvSource> Settings<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Read `name`, falling back to `default` when it is unset or empty.
    pub fn get(&self, name: &str, default: &str) -> String {
        self.source
            .var(name)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| default.to_string())
    }

    /// Read a `(name, default)` pair from [`keys`].
    #[inline]
    pub fn key(&self, key: (&str, &str)) -> String {
        self.get(key.0, key.1)
    }

    /// The underlying environment.
    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }
}
