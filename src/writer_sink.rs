use crate::color::{default_color_fn, ColorFn};
use crate::config::ColorMode;
use crate::error::EmitError;
use crate::format::OutputFormat;
use crate::record::LogRecord;
use crate::sink::LogSink;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// [`LogSink`] rendering each record as one text line on an [`io::Write`].
///
/// The writer sits behind a mutex, so concurrent loggers sharing this sink
/// never interleave partial lines. Every line is flushed as soon as it has
/// been written.
pub struct WriterSink<W> {
    writer: Mutex<W>,
    format: OutputFormat,
    color: Option<ColorFn>,
}

impl WriterSink<io::Stdout> {
    /// Sink on the process's standard output.
    ///
    /// With [`ColorMode::Auto`] lines are colored only when stdout is a
    /// terminal.
    pub fn stdout(color: ColorMode) -> Self {
        let sink = WriterSink::new(io::stdout());
        if color.enabled_for_stdout() {
            sink.with_colors()
        } else {
            sink
        }
    }
}

impl<W: Write + Send> WriterSink<W> {
    /// Uncolored logfmt sink on `writer`.
    pub fn new(writer: W) -> Self {
        WriterSink {
            writer: Mutex::new(writer),
            format: OutputFormat::default(),
            color: None,
        }
    }

    /// Switch the line encoding.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Color lines by their `level` field using
    /// [`color_for`](crate::color::color_for).
    pub fn with_colors(self) -> Self {
        self.with_color_fn(default_color_fn())
    }

    /// Color lines with a custom selector.
    pub fn with_color_fn(mut self, color: ColorFn) -> Self {
        self.color = Some(color);
        self
    }

    /// Write plain lines, dropping any color selector.
    pub fn without_colors(mut self) -> Self {
        self.color = None;
        self
    }

    /// Line encoding in use.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Whether lines are wrapped in color escapes.
    pub fn is_colored(&self) -> bool {
        self.color.is_some()
    }

    /// The exact bytes [`send`](LogSink::send) would write for `record`,
    /// trailing newline included.
    pub fn render(&self, record: &LogRecord) -> Result<String, EmitError> {
        let mut line = self.format.encode(record)?;
        if let Some(color) = &self.color {
            line = color(record.fields()).paint(&line);
        }
        line.push('\n');
        Ok(line)
    }

    /// Consume the sink and return its writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self, bytes: &[u8]) -> Result<(), EmitError> {
        let mut writer = self.writer.lock().map_err(|_| EmitError::Poisoned)?;
        writer.write_all(bytes)?;
        writer.flush()?;
        Ok(())
    }
}

impl<W: Write + Send> LogSink for WriterSink<W> {
    fn send(&self, record: &LogRecord) -> Result<(), EmitError> {
        let line = self.render(record)?;
        self.write(line.as_bytes())
    }

    fn blank_line(&self) -> Result<(), EmitError> {
        self.write(b"\n")
    }

    fn flush(&self) -> Result<(), EmitError> {
        let mut writer = self.writer.lock().map_err(|_| EmitError::Poisoned)?;
        writer.flush()?;
        Ok(())
    }
}
