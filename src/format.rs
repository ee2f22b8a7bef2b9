use crate::error::{EmitError, ParseError};
use crate::field::Value;
use crate::record::LogRecord;
use std::fmt::Write;
use std::str::FromStr;

/// Line encoding used by [`WriterSink`](crate::writer_sink::WriterSink).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `key=value` pairs separated by spaces.
    #[default]
    Logfmt,
    /// One JSON object per line, keys in record order.
    #[cfg(feature = "json")]
    Json,
}

impl OutputFormat {
    /// Render `record` as a single line without the trailing newline.
    pub fn encode(self, record: &LogRecord) -> Result<String, EmitError> {
        match self {
            OutputFormat::Logfmt => Ok(encode_logfmt(record)),
            #[cfg(feature = "json")]
            OutputFormat::Json => Ok(serde_json::to_string(record)?),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "logfmt" | "text" => Ok(OutputFormat::Logfmt),
            #[cfg(feature = "json")]
            "json" => Ok(OutputFormat::Json),
            _ => Err(ParseError::UnknownFormat(s.to_string())),
        }
    }
}

/// Encode a record as logfmt.
///
/// Key characters that logfmt cannot represent (whitespace, control
/// characters, `=` and `"`) are dropped, and a field whose key ends up empty
/// is skipped. Values are quoted when they contain such characters. An
/// empty string renders as `key=`, a null as `key=null` and the string
/// `"null"` as `key="null"` so the two stay distinguishable.
pub fn encode_logfmt(record: &LogRecord) -> String {
    let mut out = String::with_capacity(record.len() * 16);
    for field in record.fields() {
        let mark = out.len();
        if !out.is_empty() {
            out.push(' ');
        }
        if !write_key(&mut out, field.key()) {
            out.truncate(mark);
            continue;
        }
        out.push('=');
        write_value(&mut out, &field.value);
    }
    out
}

fn invalid_key_char(c: char) -> bool {
    c <= ' ' || c == '=' || c == '"' || c == char::REPLACEMENT_CHARACTER
}

fn write_key(out: &mut String, key: &str) -> bool {
    let before = out.len();
    out.extend(key.chars().filter(|&c| !invalid_key_char(c)));
    out.len() > before
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Str(s) if s == "null" => out.push_str("\"null\""),
        Value::Str(s) => write_str_value(out, s),
        Value::Dynamic(_) => write_value(out, &value.resolve()),
        other => {
            let _ = write!(out, "{}", other);
        }
    }
}

fn write_str_value(out: &mut String, s: &str) {
    if !s.chars().any(invalid_key_char) {
        out.push_str(s);
        return;
    }

    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
