/// Error returned when a record could not be written to its sink.
///
/// This is the only failure a leveled logging call can report. The logger
/// hands it straight back to the caller and never retries.
#[derive(thiserror::Error, Debug)]
pub enum EmitError {
    #[error("failed to write log record: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("failed to encode log record as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("log writer lock poisoned by a panicking writer")]
    Poisoned,
}

/// Error type returned when parsing configuration strings.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown log level: {0:?}")]
    UnknownLevel(String),

    #[error("unknown color mode: {0:?} (expected auto, always or never)")]
    UnknownColorMode(String),

    #[error("unknown output format: {0:?}")]
    UnknownFormat(String),

    #[error("unknown caller style: {0:?} (expected short or full)")]
    UnknownCallerStyle(String),
}
