//! `tracing` layer writing events to a JSONL session file, and the builder
//! that installs it next to the console formatter.

use std::fmt::Write as FmtWrite;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use super::entry::LogEntry;
use super::writer::SessionLogWriter;

pub struct JsonlLayer {
    writer: Arc<SessionLogWriter>,
}

impl JsonlLayer {
    pub fn new(logs_dir: impl AsRef<std::path::Path>, session: impl Into<String>) -> std::io::Result<Self> {
        Ok(Self {
            writer: Arc::new(SessionLogWriter::new(logs_dir, session)?),
        })
    }

    pub fn log_path(&self) -> &std::path::Path {
        self.writer.path()
    }
}

impl<S> Layer<S> for JsonlLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = JsonVisitor::default();
        event.record(&mut visitor);

        let mut entry = LogEntry::new(
            metadata.level().as_str().to_lowercase(),
            self.writer.session(),
            metadata.target(),
            visitor.message.unwrap_or_default(),
        );
        if !visitor.fields.is_empty() {
            entry = entry.with_fields(serde_json::Value::Object(visitor.fields));
        }

        // logging must never take the app down
        let _ = self.writer.write(&entry);
    }
}

#[derive(Default)]
struct JsonVisitor {
    message: Option<String>,
    fields: serde_json::Map<String, serde_json::Value>,
}

impl JsonVisitor {
    fn insert(&mut self, field: &Field, value: serde_json::Value) {
        self.fields.insert(field.name().to_string(), value);
    }
}

impl Visit for JsonVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut buf = String::new();
        let _ = write!(&mut buf, "{:?}", value);
        if field.name() == "message" {
            self.message = Some(buf);
        } else {
            self.insert(field, serde_json::Value::String(buf));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.insert(field, serde_json::Value::String(value.to_string()));
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, value.into());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, value.into());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, value.into());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if let Some(n) = serde_json::Number::from_f64(value) {
            self.insert(field, serde_json::Value::Number(n));
        }
    }
}

/// Default filter for the JSONL session file, independent of the console.
pub const DEFAULT_SESSION_FILTER: &str = "warn,gearhire_core=debug,gearhire_ui=debug";

/// Installs the global subscriber: stderr output filtered by `RUST_LOG`
/// (or the given default), plus an optional JSONL session file with its
/// own filter so interactions are recorded even when the console is quiet.
pub struct LoggingBuilder {
    default_filter: String,
    session_filter: String,
    logs_dir: Option<PathBuf>,
    session: String,
}

impl LoggingBuilder {
    pub fn new(session: impl Into<String>) -> Self {
        Self {
            default_filter: "warn".to_string(),
            session_filter: DEFAULT_SESSION_FILTER.to_string(),
            logs_dir: None,
            session: session.into(),
        }
    }

    /// Filter used when `RUST_LOG` is unset (e.g. "gearhire_core=debug").
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.default_filter = filter.into();
        self
    }

    /// `-v` count to filter: 0 warn, 1 info, 2 debug, 3+ trace.
    pub fn with_verbosity(self, verbosity: u8) -> Self {
        let filter = match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        self.with_filter(filter)
    }

    pub fn with_session_filter(mut self, filter: impl Into<String>) -> Self {
        self.session_filter = filter.into();
        self
    }

    pub fn with_logs_dir(mut self, logs_dir: Option<PathBuf>) -> Self {
        self.logs_dir = logs_dir;
        self
    }

    /// Install globally. Returns the JSONL file path when one is written.
    pub fn init(self) -> std::io::Result<Option<PathBuf>> {
        let console_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.default_filter));

        let jsonl = self
            .logs_dir
            .as_ref()
            .map(|dir| JsonlLayer::new(dir, self.session.clone()))
            .transpose()?;
        let path = jsonl.as_ref().map(|layer| layer.log_path().to_path_buf());
        let jsonl = jsonl.map(|layer| layer.with_filter(EnvFilter::new(&self.session_filter)));

        let installed = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_filter(console_filter),
            )
            .with(jsonl)
            .try_init();
        if let Err(e) = installed {
            return Err(std::io::Error::new(std::io::ErrorKind::AlreadyExists, e.to_string()));
        }

        Ok(path)
    }
}
