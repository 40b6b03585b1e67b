//! Error page descriptors for `/error/<code>`.
//!
//! Known HTTP error codes have a fixed message and description; any other
//! code gets a descriptor built from the code itself.

use http::StatusCode;
use serde::Serialize;

/// Description used for codes missing from the table.
pub const UNKNOWN_DESCRIPTION: &str = "An unspecified error has occurred.";

/// Message, description and status for one error code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDescriptor {
    pub code: u64,
    pub message: String,
    pub description: String,
}

impl ErrorDescriptor {
    /// Look up `code`, falling back to an "Unknown Error" descriptor.
    pub fn for_code(code: u64) -> Self {
        match known(code) {
            Some((message, description)) => Self {
                code,
                message: message.to_string(),
                description: description.to_string(),
            },
            None => Self {
                code,
                message: format!("{} Unknown Error", code),
                description: UNKNOWN_DESCRIPTION.to_string(),
            },
        }
    }

    /// Response status: the code itself, or `None` when it cannot be put
    /// on a status line (outside 100..=999).
    pub fn status(&self) -> Option<StatusCode> {
        u16::try_from(self.code)
            .ok()
            .and_then(|c| StatusCode::from_u16(c).ok())
    }
}

fn known(code: u64) -> Option<(&'static str, &'static str)> {
    let entry = match code {
        400 => (
            "400 Bad Request",
            "The server cannot process the request due to a client error.",
        ),
        401 => (
            "401 Unauthorized",
            "Authentication is required to access the resource.",
        ),
        403 => (
            "403 Access Denied",
            "The client does not have permission to access this resource.",
        ),
        404 => (
            "404 Resource Not Found",
            "The requested page or resource does not exist on the server.",
        ),
        409 => (
            "409 Conflict",
            "The request conflicts with the current state of the server.",
        ),
        500 => (
            "500 Internal Server Error",
            "Internal server error. Contact the administrator.",
        ),
        501 => (
            "501 Not Implemented",
            "The server does not support the requested functionality.",
        ),
        502 => (
            "502 Bad Gateway",
            "The server received an invalid response from an upstream server.",
        ),
        503 => (
            "503 Service Unavailable",
            "The service is temporarily unavailable.",
        ),
        504 => (
            "504 Gateway Timeout",
            "The server did not receive a timely response from an upstream server.",
        ),
        _ => return None,
    };
    Some(entry)
}
