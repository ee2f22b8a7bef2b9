use crate::error::ParseError;
use std::fmt;
use std::panic::Location;
use std::str::FromStr;

/// Source location reported in the `caller` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Caller {
    file: Option<&'static str>,
    line: Option<u32>,
}

impl Caller {
    pub fn new(file: Option<&'static str>, line: Option<u32>) -> Self {
        Caller { file, line }
    }

    /// Location of whoever called the enclosing `#[track_caller]` function.
    #[track_caller]
    pub fn here() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn from_location(location: &'static Location<'static>) -> Self {
        Caller {
            file: Some(location.file()),
            line: Some(location.line()),
        }
    }

    pub fn file(&self) -> Option<&'static str> {
        self.file
    }

    pub fn line(&self) -> Option<u32> {
        self.line
    }

    pub fn render(&self, style: CallerStyle) -> String {
        let Some(file) = self.file else {
            return "unknown".to_string();
        };
        let file = match style {
            CallerStyle::Short => file.rsplit(['/', '\\']).next().unwrap_or(file),
            CallerStyle::Full => file,
        };
        match self.line {
            Some(line) => format!("{}:{}", file, line),
            None => file.to_string(),
        }
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(CallerStyle::Short))
    }
}

/// How much of the source path the `caller` field shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallerStyle {
    /// File name and line, e.g. `main.rs:42`.
    #[default]
    Short,
    /// Path as the compiler saw it, e.g. `src/bin/main.rs:42`.
    Full,
}

impl FromStr for CallerStyle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(CallerStyle::Short),
            "full" | "long" => Ok(CallerStyle::Full),
            _ => Err(ParseError::UnknownCallerStyle(s.to_string())),
        }
    }
}
