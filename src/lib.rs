//! tokio_diag - Diagnostic web endpoint powered by Rust and Tokio.
//!
//! This crate serves a single HTML page describing the process it runs in:
//! application settings from the environment, host details, database
//! reachability, a masked environment dump and the incoming request. It also
//! answers `/health` and renders `/error/<code>` pages.
//!
//! # Architecture
//!
//! - [`env`] - narrow environment accessor, swappable in tests
//! - [`inspect`] - the information sources shown on the page
//! - [`view`] - HTML rendering
//! - [`server`] - routing, page composition and the HTTP server loop
//!
//! # Example
//!
//! ```rust,ignore
//! use tokio_diag::{Config, PageComposer, Server};
//!
//! let config = Config::from_env()?;
//! let server = Server::bind(config.server, PageComposer::from_process())?;
//! server.run().await?;
//! ```

/// Package version and git commit hash: "0.1.0 (abc12345)".
/// The hash is empty when built outside a checkout.
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_VERSION"), ")");

pub mod config;
pub mod core;
pub mod env;
pub mod health;
pub mod inspect;
pub mod logging;
pub mod server;
pub mod view;

// Re-exports for convenience
pub use config::Config;
pub use server::{PageComposer, Server};
