use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// Severity attached to every record as the `level` field.
///
/// Ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Stage,
    Warn,
    Error,
    Crit,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::Debug,
        Level::Info,
        Level::Stage,
        Level::Warn,
        Level::Error,
        Level::Crit,
    ];

    /// The value written into the `level` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Stage => "stage",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Crit => "crit",
        }
    }

    /// Critical records are followed by an empty line.
    pub fn appends_blank_line(self) -> bool {
        self == Level::Crit
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "stage" => Ok(Level::Stage),
            "warn" | "warning" => Ok(Level::Warn),
            "error" | "err" => Ok(Level::Error),
            "crit" | "critical" => Ok(Level::Crit),
            _ => Err(ParseError::UnknownLevel(s.to_string())),
        }
    }
}
