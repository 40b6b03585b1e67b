//! Core error types.

/// Errors that abort request handling or startup.
///
/// Database failures are not represented here; they are reported inline
/// on the page.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Host name could not be resolved to an address.
    #[error("failed to resolve host '{host}': {source}")]
    Resolve {
        host: String,
        #[source]
        source: std::io::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
