//! Health status type.

use chrono::Local;
use serde::Serialize;

/// Health status response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    /// Always "healthy" while the process answers
    pub status: &'static str,
    /// RFC 3339 local time the status was produced
    pub timestamp: String,
}

impl HealthStatus {
    /// Create a healthy status stamped with the current time.
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            timestamp: Local::now().to_rfc3339(),
        }
    }
}
