//! Test helpers and utilities

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tokio_diag::config::ServerConfig;
use tokio_diag::core::Result;
use tokio_diag::env::MapEnv;
use tokio_diag::inspect::{MySqlProber, SystemInfo, SystemInspector};
use tokio_diag::{PageComposer, Server};

/// Host details with fixed values so pages are predictable.
pub struct FixedInspector;

#[async_trait]
impl SystemInspector for FixedInspector {
    async fn collect(&self) -> Result<SystemInfo> {
        Ok(SystemInfo {
            hostname: "diag-test-host".into(),
            ip_address: "10.0.0.7".into(),
            runtime_version: "rustc test".into(),
            platform: "Linux-test-x86_64".into(),
            working_directory: "/srv/diag".into(),
            framework_version: "hyper test".into(),
        })
    }
}

/// In-process server on an ephemeral port
pub struct TestServer {
    pub base_url: String,
    pub addr: SocketAddr,
    pub client: Client,
    server: Arc<Server>,
}

#[allow(dead_code)]
impl TestServer {
    /// Start a server whose pages read `env` instead of the process environment.
    pub async fn start(env: MapEnv) -> Self {
        let composer = PageComposer::new(
            Arc::new(env),
            Arc::new(FixedInspector),
            Arc::new(MySqlProber::new().with_timeout(Duration::from_secs(2))),
        );
        Self::start_with(composer).await
    }

    pub async fn start_with(composer: PageComposer) -> Self {
        let config = ServerConfig {
            listen_addr: "127.0.0.1:0".parse().unwrap(),
            ..ServerConfig::default()
        };

        let server = Arc::new(Server::bind(config, composer).expect("Failed to bind test server"));
        let addr = server.local_addr();

        let runner = Arc::clone(&server);
        tokio::spawn(async move {
            let _ = runner.run().await;
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: format!("http://{}", addr),
            addr,
            client,
            server,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Make a GET request to the server
    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed")
    }

    /// Make a GET request with custom headers
    pub async fn get_with_headers(&self, path: &str, headers: &[(&str, &str)]) -> Response {
        let mut req = self.client.get(self.url(path));
        for (name, value) in headers {
            req = req.header(*name, *value);
        }
        req.send().await.expect("GET request failed")
    }

    /// Stop accepting connections and wait for open ones to finish.
    pub async fn shutdown(&self) -> bool {
        self.server.trigger_shutdown();
        self.server.wait_for_drain(Duration::from_secs(5)).await
    }
}

/// Assert that response has expected status
pub fn assert_status(response: &Response, expected: StatusCode) {
    assert_eq!(
        response.status(),
        expected,
        "Expected status {}, got {}",
        expected,
        response.status()
    );
}

/// Assert that response contains header with prefix
pub fn assert_header_starts_with(response: &Response, name: &str, prefix: &str) {
    let value = response
        .headers()
        .get(name)
        .unwrap_or_else(|| panic!("Header '{}' not found", name))
        .to_str()
        .unwrap();
    assert!(
        value.starts_with(prefix),
        "Header '{}' expected to start with '{}', got '{}'",
        name,
        prefix,
        value
    );
}

/// Assert that response has header present
pub fn assert_has_header(response: &Response, name: &str) {
    assert!(
        response.headers().contains_key(name),
        "Header '{}' not found",
        name
    );
}

/// Assert that response body contains substring
pub async fn assert_body_contains(response: Response, substring: &str) {
    let body = response.text().await.expect("Failed to read body");
    assert!(
        body.contains(substring),
        "Body does not contain '{}'. Body: {}",
        substring,
        &body[..body.len().min(500)]
    );
}
