use crate::caller::CallerStyle;
use crate::env::{
    env_or, NO_COLOR_ENV, SERVICE_LOGGER_CALLER_ENV, SERVICE_LOGGER_COLOR_ENV,
    SERVICE_LOGGER_FORMAT_ENV, SERVICE_LOGGER_TIME_FORMAT_ENV,
};
use crate::error::ParseError;
use crate::format::OutputFormat;
use crate::timestamp::{is_valid_format, TIMESTAMP_FORMAT};
use std::io::{self, IsTerminal};
use std::str::FromStr;

/// When lines written to stdout are colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Color only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled_for_stdout(self) -> bool {
        match self {
            ColorMode::Auto => io::stdout().is_terminal(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl FromStr for ColorMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" | "on" | "true" => Ok(ColorMode::Always),
            "never" | "off" | "false" => Ok(ColorMode::Never),
            _ => Err(ParseError::UnknownColorMode(s.to_string())),
        }
    }
}

/// Settings for [`ServiceLogger::with_config`](crate::logger::ServiceLogger::with_config).
///
/// **Fields**
/// - `color`: when stdout output is colored by level.
/// - `format`: line encoding, logfmt by default.
/// - `caller`: how the `caller` field renders the call site.
/// - `time_format`: chrono `strftime` format of the `ts` field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggerConfig {
    pub color: ColorMode,
    pub format: OutputFormat,
    pub caller: CallerStyle,
    pub time_format: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            format: OutputFormat::Logfmt,
            caller: CallerStyle::Short,
            time_format: TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl LoggerConfig {
    /// Defaults overridden by the `SERVICE_LOGGER_*` environment variables.
    ///
    /// Unparseable values are ignored. A non-empty `NO_COLOR` disables
    /// colors unless `SERVICE_LOGGER_COLOR` asks for them explicitly.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if !env_or(NO_COLOR_ENV, "").is_empty() {
            config.color = ColorMode::Never;
        }
        if let Ok(color) = env_or(SERVICE_LOGGER_COLOR_ENV, "").parse() {
            config.color = color;
        }
        if let Ok(format) = env_or(SERVICE_LOGGER_FORMAT_ENV, "").parse() {
            config.format = format;
        }
        if let Ok(caller) = env_or(SERVICE_LOGGER_CALLER_ENV, "").parse() {
            config.caller = caller;
        }

        let time_format = env_or(SERVICE_LOGGER_TIME_FORMAT_ENV, "");
        if !time_format.is_empty() && is_valid_format(&time_format) {
            config.time_format = time_format;
        }

        config
    }
}
