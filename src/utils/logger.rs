use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};
use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::LoggingConfig;

/// Collects event fields into a JSON object.
#[derive(Default)]
struct FieldCollector(Map<String, Value>);

impl Visit for FieldCollector {
    fn record_i64(&mut self, field: &Field, value: i64) {
        self.0.insert(field.name().to_string(), Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.0.insert(field.name().to_string(), Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.0.insert(field.name().to_string(), Value::from(value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), Value::from(value));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0
            .insert(field.name().to_string(), Value::from(format!("{:?}", value)));
    }
}

/// One JSON object per line, tagged with the service identity.
#[derive(Clone)]
struct JsonEventFormatter {
    service_name: String,
    service_version: String,
}

impl JsonEventFormatter {
    fn to_json(&self, event: &Event<'_>) -> Value {
        let metadata = event.metadata();
        let mut fields = FieldCollector::default();
        event.record(&mut fields);
        let mut attributes = fields.0;

        let body = match attributes.remove("message") {
            Some(Value::String(s)) => s,
            Some(other) => other.to_string(),
            None => metadata.name().to_string(),
        };
        attributes.insert("code.target".to_string(), Value::from(metadata.target()));
        if let Some(line) = metadata.line() {
            attributes.insert("code.lineno".to_string(), Value::from(line));
        }

        serde_json::json!({
            "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            "severity_text": metadata.level().as_str(),
            "body": body,
            "resource": {
                "service.name": self.service_name,
                "service.version": self.service_version,
            },
            "attributes": attributes,
        })
    }
}

impl<S, N> FormatEvent<S, N> for JsonEventFormatter
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let line = serde_json::to_string(&self.to_json(event)).map_err(|_| std::fmt::Error)?;
        writeln!(writer, "{}", line)
    }
}

/// Parses a `logging.level` value.
pub fn parse_level(level: &str) -> Result<LevelFilter, String> {
    match level.trim().to_lowercase().as_str() {
        "trace" => Ok(LevelFilter::TRACE),
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" => Ok(LevelFilter::WARN),
        "error" => Ok(LevelFilter::ERROR),
        _ => Err(format!(
            "Invalid logging.level '{}'. Valid values: trace, debug, info, warn, error",
            level
        )),
    }
}

/// Installs the global subscriber. Fails on an invalid level or when a
/// subscriber is already installed.
pub fn init_logging(logging_config: &LoggingConfig) -> Result<(), String> {
    let level_filter = parse_level(&logging_config.level)?;
    let filter_layer = EnvFilter::default().add_directive(level_filter.into());

    let result = match logging_config.format.to_lowercase().as_str() {
        "json" => tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt::layer().event_format(JsonEventFormatter {
                service_name: logging_config.service_name.clone(),
                service_version: logging_config.service_version.clone(),
            }))
            .try_init(),
        // "console", and anything unknown
        _ => tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt::layer().pretty())
            .try_init(),
    };
    result.map_err(|e| format!("Failed to initialise logging: {}", e))
}
