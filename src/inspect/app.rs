//! Application metadata.

use serde::Serialize;

use crate::env::{keys, EnvSource, Settings};

/// Format of [`AppInfo::current_time`].
pub const CURRENT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Application metadata resolved at request time.
#[derive(Debug, Clone, Serialize)]
pub struct AppInfo {
    pub title: String,
    pub microservice: String,
    pub environment: String,
    pub version: String,
    /// Local wall-clock time when the snapshot was taken.
    pub current_time: String,
}

impl AppInfo {
    pub fn collect<S: EnvSource>(settings: &Settings<S>) -> Self {
        Self {
            title: settings.key(keys::TITLE),
            microservice: settings.key(keys::MICROSERVICE),
            environment: settings.key(keys::ENVIRONMENT),
            version: settings.key(keys::VERSION),
            current_time: chrono::Local::now()
                .format(CURRENT_TIME_FORMAT)
                .to_string(),
        }
    }
}
