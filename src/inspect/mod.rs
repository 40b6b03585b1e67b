//! Read-only inspection sources aggregated by the index page.
//!
//! Each source produces a request-scoped snapshot:
//!
//! - [`AppInfo`] - application metadata from settings
//! - [`SystemInfo`] - host identity and runtime facts
//! - [`DbConfig`] / [`DbTableList`] - one best-effort database probe
//! - [`EnvVarMap`] - the environment with sensitive values masked
//! - [`RequestInfo`] - caller-visible facts about the inbound request

pub mod app;
pub mod database;
pub mod environment;
pub mod request;
pub mod system;

pub use app::AppInfo;
pub use database::{DatabaseProber, DbConfig, DbStatus, DbTableList, MySqlProber};
pub use environment::{is_sensitive, EnvVarMap, MASKED_VALUE, SENSITIVE_MARKERS};
pub use request::{RequestInfo, USER_AGENT_PLACEHOLDER};
pub use system::{HostInspector, SystemInfo, SystemInspector};
