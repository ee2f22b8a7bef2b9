use crate::caller::{Caller, CallerStyle};
use crate::config::LoggerConfig;
use crate::error::EmitError;
use crate::field::Field;
use crate::level::Level;
use crate::record::LogRecord;
use crate::sink::LogSink;
use crate::timestamp::timestamp_valuer_with;
use crate::writer_sink::WriterSink;
use std::fmt;
use std::sync::Arc;

/// Leveled, key-value logger for a service.
///
/// Every record carries the fields the logger was derived with, then
/// `level` and `caller`, then the fields passed to the call:
///
/// ```text
/// ts="18/10/2026 13:04:05" service=auth component=db level=info caller=main.rs:12 msg=hello
/// ```
///
/// Loggers are immutable and cheap to clone. [`with`](Self::with) and
/// [`with_prefix`](Self::with_prefix) return new loggers that share the same
/// sink.
#[derive(Clone)]
pub struct ServiceLogger {
    sink: Arc<dyn LogSink>,
    context: Arc<[Field]>,
    caller_style: CallerStyle,
}

impl ServiceLogger {
    /// Logger writing logfmt to stdout, colored when stdout is a terminal,
    /// with `ts` and `service=<service_name>` on every record.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self::with_config(service_name, LoggerConfig::default())
    }

    /// Like [`new`](Self::new) with explicit [`LoggerConfig`].
    pub fn with_config(service_name: impl Into<String>, config: LoggerConfig) -> Self {
        let sink = WriterSink::stdout(config.color).with_format(config.format);
        Self::from_sink(Arc::new(sink))
            .caller_style(config.caller)
            .with(service_fields(service_name.into(), &config.time_format))
    }

    /// Logger for `service_name` writing to a custom sink.
    pub fn with_sink(service_name: impl Into<String>, sink: Arc<dyn LogSink>) -> Self {
        Self::with_sink_config(service_name, sink, &LoggerConfig::default())
    }

    /// Logger for `service_name` writing to a custom sink, taking the caller
    /// style and time format from `config`. The sink owns color and format.
    pub fn with_sink_config(
        service_name: impl Into<String>,
        sink: Arc<dyn LogSink>,
        config: &LoggerConfig,
    ) -> Self {
        Self::from_sink(sink)
            .caller_style(config.caller)
            .with(service_fields(service_name.into(), &config.time_format))
    }

    /// Logger with no fixed fields at all, not even `ts` or `service`.
    pub fn from_sink(sink: Arc<dyn LogSink>) -> Self {
        ServiceLogger {
            sink,
            context: Arc::from(Vec::new()),
            caller_style: CallerStyle::default(),
        }
    }

    /// Set how the `caller` field renders the call site.
    pub fn caller_style(mut self, style: CallerStyle) -> Self {
        self.caller_style = style;
        self
    }

    /// Fixed fields attached to every record, in order.
    pub fn context(&self) -> &[Field] {
        &self.context
    }

    /// The sink shared by this logger and everything derived from it.
    pub fn sink(&self) -> &Arc<dyn LogSink> {
        &self.sink
    }

    /// New logger with `fields` appended after the existing context.
    ///
    /// Fields named `level` or `caller` are renamed to `fields.level` and
    /// `fields.caller`; those keys belong to the logger.
    pub fn with<I>(&self, fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Field>,
    {
        let context: Vec<Field> = self
            .context
            .iter()
            .cloned()
            .chain(fields.into_iter().map(|f| unreserved(f.into())))
            .collect();
        self.derive(context)
    }

    /// New logger with `fields` placed before the existing context.
    pub fn with_prefix<I>(&self, fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Field>,
    {
        let context: Vec<Field> = fields
            .into_iter()
            .map(|f| unreserved(f.into()))
            .chain(self.context.iter().cloned())
            .collect();
        self.derive(context)
    }

    fn derive(&self, context: Vec<Field>) -> Self {
        ServiceLogger {
            sink: Arc::clone(&self.sink),
            context: Arc::from(context),
            caller_style: self.caller_style,
        }
    }

    /// Emit one record at `level`, attributed to the calling line.
    #[track_caller]
    pub fn log<I>(&self, level: Level, fields: I) -> Result<(), EmitError>
    where
        I: IntoIterator,
        I::Item: Into<Field>,
    {
        self.log_at(level, Caller::here(), fields)
    }

    /// Emit one record at `level` with an explicit call site.
    ///
    /// Call fields named `level` or `caller` are renamed as in
    /// [`with`](Self::with), so each record has exactly one of each.
    ///
    /// Critical records are followed by a blank line on the same sink. The
    /// blank line is written even if the record itself failed; the first
    /// error is returned.
    pub fn log_at<I>(&self, level: Level, caller: Caller, fields: I) -> Result<(), EmitError>
    where
        I: IntoIterator,
        I::Item: Into<Field>,
    {
        let fields = fields.into_iter();
        let mut record = LogRecord::with_capacity(self.context.len() + 2 + fields.size_hint().0);
        record.extend(self.context.iter().cloned());
        record.push(Field::new("level", level.as_str()));
        record.push(Field::new("caller", caller.render(self.caller_style)));
        record.extend(fields.map(|f| unreserved(f.into())));

        let sent = self.sink.send(&record);
        if level.appends_blank_line() {
            let blank = self.sink.blank_line();
            return sent.and(blank);
        }
        sent
    }

    #[track_caller]
    pub fn debug<I>(&self, fields: I) -> Result<(), EmitError>
    where
        I: IntoIterator,
        I::Item: Into<Field>,
    {
        self.log(Level::Debug, fields)
    }

    #[track_caller]
    pub fn info<I>(&self, fields: I) -> Result<(), EmitError>
    where
        I: IntoIterator,
        I::Item: Into<Field>,
    {
        self.log(Level::Info, fields)
    }

    #[track_caller]
    pub fn stage<I>(&self, fields: I) -> Result<(), EmitError>
    where
        I: IntoIterator,
        I::Item: Into<Field>,
    {
        self.log(Level::Stage, fields)
    }

    #[track_caller]
    pub fn warn<I>(&self, fields: I) -> Result<(), EmitError>
    where
        I: IntoIterator,
        I::Item: Into<Field>,
    {
        self.log(Level::Warn, fields)
    }

    /// Logs with `level=error`.
    #[track_caller]
    pub fn err<I>(&self, fields: I) -> Result<(), EmitError>
    where
        I: IntoIterator,
        I::Item: Into<Field>,
    {
        self.log(Level::Error, fields)
    }

    /// Logs with `level=crit`, followed by an empty line.
    #[track_caller]
    pub fn crit<I>(&self, fields: I) -> Result<(), EmitError>
    where
        I: IntoIterator,
        I::Item: Into<Field>,
    {
        self.log(Level::Crit, fields)
    }

    // Message-only variants: the single string goes into `msg`.

    #[track_caller]
    pub fn debug_msg(&self, msg: impl Into<String>) -> Result<(), EmitError> {
        self.log(Level::Debug, [msg_field(msg)])
    }

    #[track_caller]
    pub fn info_msg(&self, msg: impl Into<String>) -> Result<(), EmitError> {
        self.log(Level::Info, [msg_field(msg)])
    }

    #[track_caller]
    pub fn stage_msg(&self, msg: impl Into<String>) -> Result<(), EmitError> {
        self.log(Level::Stage, [msg_field(msg)])
    }

    #[track_caller]
    pub fn warn_msg(&self, msg: impl Into<String>) -> Result<(), EmitError> {
        self.log(Level::Warn, [msg_field(msg)])
    }

    #[track_caller]
    pub fn err_msg(&self, msg: impl Into<String>) -> Result<(), EmitError> {
        self.log(Level::Error, [msg_field(msg)])
    }

    #[track_caller]
    pub fn crit_msg(&self, msg: impl Into<String>) -> Result<(), EmitError> {
        self.log(Level::Crit, [msg_field(msg)])
    }
}

impl fmt::Debug for ServiceLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceLogger")
            .field("context", &self.context)
            .field("caller_style", &self.caller_style)
            .finish_non_exhaustive()
    }
}

fn service_fields(service_name: String, time_format: &str) -> [Field; 2] {
    [
        Field::new("ts", timestamp_valuer_with(time_format)),
        Field::new("service", service_name),
    ]
}

const RESERVED_KEYS: [&str; 2] = ["level", "caller"];

fn unreserved(field: Field) -> Field {
    if RESERVED_KEYS.contains(&field.key()) {
        let key = format!("fields.{}", field.key());
        return Field {
            key: key.into(),
            value: field.value,
        };
    }
    field
}

fn msg_field(msg: impl Into<String>) -> Field {
    Field::new("msg", msg.into())
}
