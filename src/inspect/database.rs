//! Best-effort database probe.
//!
//! One short-lived connection per request: connect, list tables, close. No
//! pool, no retry. Failures never fail the request; they are reported in
//! [`DbConfig::status`].

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Serialize, Serializer};
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlRow};
use sqlx::{Connection, Row};
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::env::{keys, EnvSource, Settings};

/// Host value that disables probing.
pub const UNCONFIGURED_HOST: &str = "localhost";

/// Deadline for a single probe, connect and query together.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Shown for database settings that are not set.
pub const NOT_CONFIGURED: &str = "not configured";

/// Table names in the order the server returned them.
pub type DbTableList = Vec<String>;

/// Outcome of the probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbStatus {
    NotConfigured,
    Connected,
    Error(String),
}

impl fmt::Display for DbStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DbStatus::NotConfigured => write!(f, "not configured"),
            DbStatus::Connected => write!(f, "connected"),
            DbStatus::Error(msg) => write!(f, "error: {}", msg),
        }
    }
}

impl Serialize for DbStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Database settings shown on the page. The password is never included.
///
/// Port, user and name show [`NOT_CONFIGURED`] when unset, even though the
/// connection attempt falls back to defaults for them.
#[derive(Debug, Clone, Serialize)]
pub struct DbConfig {
    pub host: String,
    pub port: String,
    pub user: String,
    pub name: String,
    pub status: DbStatus,
}

impl DbConfig {
    fn from_settings<S: EnvSource>(settings: &Settings<S>, status: DbStatus) -> Self {
        Self {
            host: settings.key(keys::DB_HOST),
            port: settings.get(keys::DB_PORT.0, NOT_CONFIGURED),
            user: settings.get(keys::DB_USER.0, NOT_CONFIGURED),
            name: settings.get(keys::DB_NAME.0, NOT_CONFIGURED),
            status,
        }
    }
}

/// Connection parameters for one probe.
#[derive(Clone)]
pub struct DbTarget {
    pub host: String,
    pub port: String,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl DbTarget {
    pub fn from_settings<S: EnvSource>(settings: &Settings<S>) -> Self {
        Self {
            host: settings.key(keys::DB_HOST),
            port: settings.key(keys::DB_PORT),
            user: settings.key(keys::DB_USER),
            password: settings.key(keys::DB_PASSWORD),
            name: settings.key(keys::DB_NAME),
        }
    }
}

impl fmt::Debug for DbTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbTarget")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Probe failure.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("invalid port '{0}'")]
    InvalidPort(String),

    #[error("connection timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("{0}")]
    Driver(#[from] sqlx::Error),
}

/// Connects to a database and lists its tables.
#[async_trait]
pub trait DatabaseProber: Send + Sync + 'static {
    async fn list_tables(&self, target: &DbTarget) -> Result<DbTableList, ProbeError>;
}

/// Probe the configured database.
///
/// A host of `localhost` (the default) is treated as "no database expected"
/// and no connection is attempted.
pub async fn probe<S, P>(settings: &Settings<S>, prober: &P) -> (DbConfig, DbTableList)
where
    S: EnvSource,
    P: DatabaseProber + ?Sized,
{
    let target = DbTarget::from_settings(settings);

    if target.host == UNCONFIGURED_HOST {
        debug!("DB_HOST is {}, skipping database probe", UNCONFIGURED_HOST);
        return (
            DbConfig::from_settings(settings, DbStatus::NotConfigured),
            Vec::new(),
        );
    }

    match prober.list_tables(&target).await {
        Ok(tables) => {
            debug!(host = %target.host, tables = tables.len(), "Database probe succeeded");
            (DbConfig::from_settings(settings, DbStatus::Connected), tables)
        }
        Err(e) => {
            warn!(host = %target.host, "Database connection error: {}", e);
            (
                DbConfig::from_settings(settings, DbStatus::Error(e.to_string())),
                Vec::new(),
            )
        }
    }
}

/// MySQL prober using a single `sqlx` connection.
#[derive(Debug, Clone)]
pub struct MySqlProber {
    timeout: Duration,
}

impl MySqlProber {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the deadline for the whole probe (connect and query).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for MySqlProber {
    fn default() -> Self {
        Self {
            timeout: PROBE_TIMEOUT,
        }
    }
}

#[async_trait]
impl DatabaseProber for MySqlProber {
    async fn list_tables(&self, target: &DbTarget) -> Result<DbTableList, ProbeError> {
        let port: u16 = target
            .port
            .parse()
            .map_err(|_| ProbeError::InvalidPort(target.port.clone()))?;

        let options = MySqlConnectOptions::new()
            .host(&target.host)
            .port(port)
            .username(&target.user)
            .password(&target.password)
            .database(&target.name);

        // One deadline covers connect and query
        let deadline = Instant::now() + self.timeout;

        let mut conn = tokio::time::timeout_at(deadline, MySqlConnection::connect_with(&options))
            .await
            .map_err(|_| ProbeError::Timeout(self.timeout))??;

        let result = tokio::time::timeout_at(deadline, show_tables(&mut conn))
            .await
            .unwrap_or(Err(ProbeError::Timeout(self.timeout)));

        // Close on both outcomes; a failed close only loses the goodbye packet
        if let Err(e) = conn.close().await {
            debug!("Database connection close failed: {}", e);
        }

        result
    }
}

async fn show_tables(conn: &mut MySqlConnection) -> Result<DbTableList, ProbeError> {
    let rows = sqlx::query("SHOW TABLES").fetch_all(&mut *conn).await?;
    rows.iter()
        .map(|row| table_name(row).map_err(ProbeError::from))
        .collect()
}

/// Table names are text on most servers but VARBINARY on some.
fn table_name(row: &MySqlRow) -> Result<String, sqlx::Error> {
    row.try_get::<String, _>(0).or_else(|_| {
        row.try_get::<Vec<u8>, _>(0)
            .map(|raw| String::from_utf8_lossy(&raw).into_owned())
    })
}
