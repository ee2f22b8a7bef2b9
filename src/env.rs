//! Environment variable names read by
//! [`LoggerConfig::from_env`](crate::config::LoggerConfig::from_env).
//!
//! These are purely helpers; `ServiceLogger::new` never reads the
//! environment.

/// Color mode: `auto`, `always` or `never`.
pub const SERVICE_LOGGER_COLOR_ENV: &str = "SERVICE_LOGGER_COLOR";

/// Output format: `logfmt` or `json`.
pub const SERVICE_LOGGER_FORMAT_ENV: &str = "SERVICE_LOGGER_FORMAT";

/// Caller rendering: `short` or `full`.
pub const SERVICE_LOGGER_CALLER_ENV: &str = "SERVICE_LOGGER_CALLER";

/// chrono `strftime` format for the `ts` field.
pub const SERVICE_LOGGER_TIME_FORMAT_ENV: &str = "SERVICE_LOGGER_TIME_FORMAT";

/// <https://no-color.org>
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Read an environment variable or fall back to a provided default.
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
