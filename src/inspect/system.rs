//! Host identity and runtime facts.

use std::net::IpAddr;

use async_trait::async_trait;
use serde::Serialize;

use crate::core::{Error, Result};

/// Rust compiler that built this binary.
pub const RUNTIME_VERSION: &str = env!("RUSTC_VERSION");

/// HTTP library serving the page.
pub const FRAMEWORK_VERSION: &str = concat!("hyper ", env!("HYPER_VERSION"));

/// Snapshot of the running host, taken fresh per request.
#[derive(Debug, Clone, Serialize)]
pub struct SystemInfo {
    pub hostname: String,
    pub ip_address: String,
    pub runtime_version: String,
    pub platform: String,
    pub working_directory: String,
    pub framework_version: String,
}

impl SystemInfo {
    /// Collect host facts.
    ///
    /// Hostname lookup and resolution failures are returned as errors; the
    /// page is not rendered without them.
    pub async fn collect() -> Result<Self> {
        let hostname = hostname()?;
        let ip_address = resolve_ip(&hostname).await?;
        let working_directory = std::env::current_dir()?.display().to_string();

        Ok(Self {
            hostname,
            ip_address: ip_address.to_string(),
            runtime_version: RUNTIME_VERSION.to_string(),
            platform: platform(),
            working_directory,
            framework_version: FRAMEWORK_VERSION.to_string(),
        })
    }
}

/// Source of [`SystemInfo`] snapshots.
#[async_trait]
pub trait SystemInspector: Send + Sync + 'static {
    async fn collect(&self) -> Result<SystemInfo>;
}

/// Inspects the host this process runs on.
#[derive(Clone, Copy, Debug, Default)]
pub struct HostInspector;

#[async_trait]
impl SystemInspector for HostInspector {
    async fn collect(&self) -> Result<SystemInfo> {
        SystemInfo::collect().await
    }
}

/// Local host name.
pub fn hostname() -> Result<String> {
    let name = hostname::get()?;
    Ok(name.to_string_lossy().into_owned())
}

/// Resolve `host` to an address, preferring IPv4.
pub async fn resolve_ip(host: &str) -> Result<IpAddr> {
    let resolve_err = |source: std::io::Error| Error::Resolve {
        host: host.to_string(),
        source,
    };

    let addrs: Vec<IpAddr> = tokio::net::lookup_host((host, 0))
        .await
        .map_err(resolve_err)?
        .map(|sa| sa.ip())
        .collect();

    addrs
        .iter()
        .find(|ip| ip.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
        .ok_or_else(|| {
            resolve_err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no addresses returned",
            ))
        })
}

/// OS descriptor such as `Linux-6.1.0-18-amd64-x86_64`.
pub fn platform() -> String {
    let arch = std::env::consts::ARCH;
    match (sysinfo::System::name(), sysinfo::System::kernel_version()) {
        (Some(name), Some(kernel)) => format!("{}-{}-{}", name, kernel, arch),
        (Some(name), None) => format!("{}-{}", name, arch),
        _ => format!("{}-{}", std::env::consts::OS, arch),
    }
}
