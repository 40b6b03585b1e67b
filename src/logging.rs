//! Logging setup and the JSON line format.
//!
//! JSON format:
//! ```json
//! {"ts":"2024-12-28T15:04:05.123Z","level":"info","type":"app","msg":"Server started","ctx":{"service":"tokio_diag"},"data":{}}
//! ```
//!
//! Events with target `access` are rendered as `"METHOD /path STATUS"` and keep
//! all of their fields under `data`.

use std::collections::HashMap;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{self, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Install the global subscriber.
///
/// Calling this twice is harmless; the second call is ignored.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|e| {
        eprintln!("Warning: invalid log filter '{}': {}", config.filter, e);
        EnvFilter::new("tokio_diag=info")
    });

    let registry = tracing_subscriber::registry().with(filter);
    let _ = match config.format {
        LogFormat::Text => registry.with(fmt::layer()).try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().event_format(JsonFormatter::new(&config.service_name)))
            .try_init(),
    };
}

/// One log line.
#[derive(Serialize)]
struct LogEntry<'a> {
    /// RFC 3339 timestamp with milliseconds, UTC
    ts: String,
    level: &'static str,
    #[serde(rename = "type")]
    log_type: &'static str,
    msg: String,
    ctx: LogContext<'a>,
    data: HashMap<String, serde_json::Value>,
}

#[derive(Serialize)]
struct LogContext<'a> {
    service: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    request_id: Option<String>,
}

/// Custom JSON formatter for tracing.
pub struct JsonFormatter {
    service_name: String,
}

impl JsonFormatter {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
        }
    }

    fn entry(&self, meta_level: Level, target: &str, visitor: FieldVisitor) -> LogEntry<'_> {
        let level = match meta_level {
            Level::TRACE | Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
        };

        let log_type = if target == "access" {
            "access"
        } else if meta_level == Level::ERROR {
            "error"
        } else {
            "app"
        };

        let FieldVisitor {
            message,
            mut fields,
        } = visitor;

        let msg = if log_type == "access" {
            let method = fields.get("method").and_then(|v| v.as_str()).unwrap_or("?");
            let path = fields.get("path").and_then(|v| v.as_str()).unwrap_or("?");
            let status = fields.get("status").and_then(|v| v.as_u64()).unwrap_or(0);
            format!("{} {} {}", method, path, status)
        } else {
            message.unwrap_or_default()
        };

        // request_id moves to ctx for correlation
        let request_id = match fields.remove("request_id") {
            Some(serde_json::Value::String(id)) => Some(id),
            Some(other) => Some(other.to_string()),
            None => None,
        };

        LogEntry {
            ts: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            level,
            log_type,
            msg,
            ctx: LogContext {
                service: &self.service_name,
                request_id,
            },
            data: fields,
        }
    }
}

impl<S, N> FormatEvent<S, N> for JsonFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        let mut visitor = FieldVisitor::new();
        event.record(&mut visitor);

        let entry = self.entry(*meta.level(), meta.target(), visitor);
        writeln!(
            writer,
            "{}",
            serde_json::to_string(&entry).unwrap_or_default()
        )
    }
}

/// Field visitor for collecting tracing fields.
struct FieldVisitor {
    message: Option<String>,
    fields: HashMap<String, serde_json::Value>,
}

impl FieldVisitor {
    fn new() -> Self {
        Self {
            message: None,
            fields: HashMap::new(),
        }
    }
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value).trim_matches('"').to_string());
        } else {
            self.fields.insert(
                field.name().to_string(),
                serde_json::Value::String(format!("{:?}", value)),
            );
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.insert(
                field.name().to_string(),
                serde_json::Value::String(value.to_string()),
            );
        }
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_f64(&mut self, field: &tracing::field::Field, value: f64) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }
}
