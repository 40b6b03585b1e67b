//! Page composition for each route.

use std::net::SocketAddr;
use std::sync::Arc;

use http::{Method, Request, StatusCode};
use tracing::{debug, warn};

use super::error_pages::ErrorDescriptor;
use super::response::{self, HttpResponse};
use super::routing::{self, Route};
use crate::core::Result;
use crate::env::{EnvSource, ProcessEnv, Settings};
use crate::health::HealthStatus;
use crate::inspect::{
    database, environment, AppInfo, DatabaseProber, HostInspector, MySqlProber, RequestInfo,
    SystemInspector,
};
use crate::view::{self, IndexPage};

/// Composes responses from the inspection sources.
///
/// Stateless between requests: every call reads settings and inspects the
/// host again.
#[derive(Clone)]
pub struct PageComposer {
    settings: Settings<Arc<dyn EnvSource>>,
    inspector: Arc<dyn SystemInspector>,
    prober: Arc<dyn DatabaseProber>,
    /// Host shown in request URLs when the client sent no Host header.
    fallback_host: Arc<str>,
}

impl PageComposer {
    pub fn new(
        env: Arc<dyn EnvSource>,
        inspector: Arc<dyn SystemInspector>,
        prober: Arc<dyn DatabaseProber>,
    ) -> Self {
        Self {
            settings: Settings::new(env),
            inspector,
            prober,
            fallback_host: Arc::from("localhost"),
        }
    }

    /// Composer over the real process environment, host and MySQL.
    pub fn from_process() -> Self {
        Self::new(
            Arc::new(ProcessEnv),
            Arc::new(HostInspector),
            Arc::new(MySqlProber::new()),
        )
    }

    /// Set the host used in request URLs when none was sent.
    pub fn with_fallback_host(mut self, host: impl Into<String>) -> Self {
        self.fallback_host = Arc::from(host.into());
        self
    }

    /// Route and answer one request.
    ///
    /// Only host inspection failures are returned as errors.
    pub async fn handle<B>(&self, req: &Request<B>, remote_addr: SocketAddr) -> Result<HttpResponse> {
        if req.method() != Method::GET && req.method() != Method::HEAD {
            return Ok(response::method_not_allowed());
        }

        match routing::resolve(req.uri().path()) {
            Route::Health => Ok(self.health()),
            Route::Error(code) => Ok(self.error_page(code)),
            Route::Index => self.index(req, remote_addr).await,
            Route::CatchAll(path) => {
                debug!("No route for {}, serving index", path);
                self.index(req, remote_addr).await
            }
        }
    }

    /// Gather every inspection source for the index page.
    pub async fn index_page<B>(&self, req: &Request<B>, remote_addr: SocketAddr) -> Result<IndexPage> {
        let app = AppInfo::collect(&self.settings);
        let system = self.inspector.collect().await?;
        let (db_config, db_tables) = database::probe(&self.settings, self.prober.as_ref()).await;
        let env_vars = environment::snapshot(self.settings.source());
        let request = RequestInfo::describe(req, remote_addr, &self.fallback_host);

        Ok(IndexPage {
            app,
            system,
            db_config,
            db_tables,
            env_vars,
            request,
        })
    }

    async fn index<B>(&self, req: &Request<B>, remote_addr: SocketAddr) -> Result<HttpResponse> {
        let page = self.index_page(req, remote_addr).await?;
        Ok(response::html(StatusCode::OK, view::render_index(&page)))
    }

    /// Liveness response; never touches the database.
    pub fn health(&self) -> HttpResponse {
        response::json(StatusCode::OK, &HealthStatus::healthy())
    }

    /// Error page answered with `code` as its status.
    pub fn error_page(&self, code: u64) -> HttpResponse {
        let descriptor = ErrorDescriptor::for_code(code);
        let status = descriptor.status().unwrap_or_else(|| {
            warn!(
                code = code,
                "Error code cannot be sent as an HTTP status, answering 500"
            );
            StatusCode::INTERNAL_SERVER_ERROR
        });
        response::html(status, view::render_error(&descriptor))
    }
}
