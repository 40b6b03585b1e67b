//! Integration tests for tokio_diag
//!
//! Each test starts its own server in-process on 127.0.0.1 with an ephemeral
//! port, so no external setup is needed.
//!
//! Run with: cargo test --test integration

mod helpers;

mod diagnostic_page;
mod error_pages;
mod health;
mod server_lifecycle;
