use crate::field::{Valuer, Value};
use chrono::format::{Item, StrftimeItems};
use chrono::Local;
use std::fmt::Write;

/// `DD/MM/YYYY HH:MM:SS`, local time.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Current local time in [`TIMESTAMP_FORMAT`].
pub fn timestamp() -> String {
    format_now(TIMESTAMP_FORMAT)
}

/// Current local time in a chrono `strftime` format.
///
/// Invalid format strings fall back to [`TIMESTAMP_FORMAT`].
pub fn format_now(format: &str) -> String {
    let now = Local::now();
    let mut out = String::new();
    if is_valid_format(format) && write!(out, "{}", now.format(format)).is_ok() {
        return out;
    }

    out.clear();
    let _ = write!(out, "{}", now.format(TIMESTAMP_FORMAT));
    out
}

/// Whether chrono can render `format` without errors.
pub fn is_valid_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Dynamic value producing a fresh [`timestamp`] at every emission.
pub fn timestamp_valuer() -> Value {
    Value::Dynamic(Valuer::new(|| Value::Str(timestamp())))
}

/// Like [`timestamp_valuer`] with a custom chrono format.
pub fn timestamp_valuer_with(format: impl Into<String>) -> Value {
    let format = format.into();
    if format == TIMESTAMP_FORMAT || !is_valid_format(&format) {
        return timestamp_valuer();
    }
    Value::Dynamic(Valuer::new(move || Value::Str(format_now(&format))))
}
