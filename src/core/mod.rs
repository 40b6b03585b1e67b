//! Core types shared by the inspectors and the HTTP layer.
//!
//! - [`Error`] - failures that abort a request with a 500
//! - [`Result`] - result alias over [`Error`]

mod error;

pub use error::{Error, Result};
