use maud::{html, Markup};
use serde::Serialize;

use super::{document, kv_table};
use crate::inspect::{AppInfo, DbConfig, DbTableList, EnvVarMap, RequestInfo, SystemInfo};

/// Everything the index page shows, in display order.
#[derive(Debug, Clone, Serialize)]
pub struct IndexPage {
    pub app: AppInfo,
    pub system: SystemInfo,
    pub db_config: DbConfig,
    pub db_tables: DbTableList,
    pub env_vars: EnvVarMap,
    pub request: RequestInfo,
}

/// Render the diagnostic page.
pub fn render_index(page: &IndexPage) -> String {
    let app = &page.app;
    let sys = &page.system;
    let db = &page.db_config;
    let req = &page.request;
    let db_status = db.status.to_string();

    let body = html! {
        h1 { (app.title) }
        p.muted { (app.microservice) " · " (app.environment) " · v" (app.version) }

        (section("Application", kv_table([
            ("Title", app.title.as_str()),
            ("Microservice", app.microservice.as_str()),
            ("Environment", app.environment.as_str()),
            ("Version", app.version.as_str()),
            ("Current time", app.current_time.as_str()),
        ])))

        (section("System", kv_table([
            ("Hostname", sys.hostname.as_str()),
            ("IP address", sys.ip_address.as_str()),
            ("Runtime", sys.runtime_version.as_str()),
            ("Platform", sys.platform.as_str()),
            ("Working directory", sys.working_directory.as_str()),
            ("HTTP library", sys.framework_version.as_str()),
        ])))

        (section("Database", html! {
            (kv_table([
                ("Host", db.host.as_str()),
                ("Port", db.port.as_str()),
                ("User", db.user.as_str()),
                ("Database", db.name.as_str()),
                ("Status", db_status.as_str()),
            ]))
            @if page.db_tables.is_empty() {
                p.muted { "No tables to show." }
            } @else {
                h3 { "Tables (" (page.db_tables.len()) ")" }
                ul {
                    @for table in &page.db_tables {
                        li { (table) }
                    }
                }
            }
        }))

        (section("Environment variables", kv_table(
            page.env_vars.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        )))

        (section("Request", kv_table([
            ("Remote address", req.remote_addr.as_str()),
            ("User agent", req.user_agent.as_str()),
            ("Method", req.method.as_str()),
            ("URL", req.url.as_str()),
        ])))
    };

    document(&app.title, body).into_string()
}

fn section(title: &str, content: Markup) -> Markup {
    html! {
        section {
            h2 { (title) }
            (content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::{DbStatus, MASKED_VALUE};

    fn page() -> IndexPage {
        IndexPage {
            app: AppInfo {
                title: "Orders <beta>".into(),
                microservice: "orders-api".into(),
                environment: "staging".into(),
                version: "1.2.3".into(),
                current_time: "2026-01-02 03:04:05".into(),
            },
            system: SystemInfo {
                hostname: "web-1".into(),
                ip_address: "10.0.0.7".into(),
                runtime_version: "rustc 1.80.0".into(),
                platform: "Linux-6.1.0-x86_64".into(),
                working_directory: "/srv/app".into(),
                framework_version: "hyper 1.5.0".into(),
            },
            db_config: DbConfig {
                host: "db".into(),
                port: "3306".into(),
                user: "app".into(),
                name: "orders".into(),
                status: DbStatus::Connected,
            },
            db_tables: vec!["orders".into(), "customers".into()],
            env_vars: [
                ("DB_PASSWORD".to_string(), MASKED_VALUE.to_string()),
                ("HOME".to_string(), "/root".to_string()),
            ]
            .into_iter()
            .collect(),
            request: RequestInfo {
                remote_addr: "192.0.2.1".into(),
                user_agent: "curl/8.5.0".into(),
                method: "GET".into(),
                url: "http://diag/".into(),
            },
        }
    }

    #[test]
    fn test_render_contains_every_section() {
        let html = render_index(&page());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Orders &lt;beta&gt;"));
        assert!(!html.contains("Orders <beta>"));
        assert!(html.contains("web-1"));
        assert!(html.contains("hyper 1.5.0"));
        assert!(html.contains("<td>connected</td>"));
        assert!(html.contains("<li>customers</li>"));
        assert!(html.contains("Tables (2)"));
        assert!(html.contains("*** HIDDEN FOR SECURITY ***"));
        assert!(html.contains("curl/8.5.0"));
    }

    #[test]
    fn test_render_without_tables() {
        let mut page = page();
        page.db_tables.clear();
        page.db_config.status = DbStatus::NotConfigured;

        let html = render_index(&page);

        assert!(html.contains("No tables to show."));
        assert!(html.contains("<td>not configured</td>"));
    }
}
