use crate::caller::Caller;
use crate::field::{Field, Value};
use crate::level::Level;
use crate::logger::ServiceLogger;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::field::{Field as TracingField, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

/// `tracing_subscriber` layer that forwards events to a [`ServiceLogger`].
///
/// Event levels are mapped onto the logger's levels (`TRACE` and `DEBUG`
/// both become `debug`), the event's `message` becomes `msg`, and the
/// event's own file and line become `caller`.
pub struct ServiceLoggerLayer {
    logger: ServiceLogger,
    min_level: tracing::Level,
    include_target: bool,
    /// Events that could not be written to the logger's sink.
    pub failed_events: Arc<AtomicU64>,
}

impl ServiceLoggerLayer {
    /// Forward every event to `logger`.
    pub fn new(logger: ServiceLogger) -> Self {
        ServiceLoggerLayer {
            logger,
            min_level: tracing::Level::TRACE,
            include_target: false,
            failed_events: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Drop events less severe than `level`.
    pub fn with_min_level(mut self, level: tracing::Level) -> Self {
        self.min_level = level;
        self
    }

    /// Add the event's `target` as a field.
    pub fn with_target(mut self, include: bool) -> Self {
        self.include_target = include;
        self
    }
}

/// Logger level for a `tracing` level.
pub fn map_level(level: &tracing::Level) -> Level {
    match *level {
        tracing::Level::ERROR => Level::Error,
        tracing::Level::WARN => Level::Warn,
        tracing::Level::INFO => Level::Info,
        _ => Level::Debug,
    }
}

impl<S> Layer<S> for ServiceLoggerLayer
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        if *meta.level() > self.min_level {
            return;
        }

        let mut fields = Vec::new();
        if self.include_target {
            fields.push(Field::new("target", meta.target()));
        }
        event.record(&mut FieldVisitor { fields: &mut fields });

        let caller = Caller::new(meta.file(), meta.line());
        if let Err(e) = self.logger.log_at(map_level(meta.level()), caller, fields) {
            self.failed_events.fetch_add(1, Ordering::Relaxed);
            eprintln!("service logger failed to write tracing event: {}", e);
        }
    }
}

/// Collects event fields in recording order, renaming `message` to `msg`.
pub struct FieldVisitor<'a> {
    pub fields: &'a mut Vec<Field>,
}

impl FieldVisitor<'_> {
    fn push(&mut self, field: &TracingField, value: Value) {
        let key = match field.name() {
            "message" => "msg",
            name => name,
        };
        self.fields.push(Field::new(key, value));
    }
}

impl Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &TracingField, value: &str) {
        self.push(field, Value::from(value));
    }

    fn record_i64(&mut self, field: &TracingField, value: i64) {
        self.push(field, Value::from(value));
    }

    fn record_u64(&mut self, field: &TracingField, value: u64) {
        self.push(field, Value::from(value));
    }

    fn record_f64(&mut self, field: &TracingField, value: f64) {
        self.push(field, Value::from(value));
    }

    fn record_bool(&mut self, field: &TracingField, value: bool) {
        self.push(field, Value::from(value));
    }

    fn record_debug(&mut self, field: &TracingField, value: &dyn std::fmt::Debug) {
        self.push(field, Value::Str(format!("{:?}", value)));
    }
}
