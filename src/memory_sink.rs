use crate::error::EmitError;
use crate::record::LogRecord;
use crate::sink::LogSink;
use std::sync::{Mutex, PoisonError};

/// Something written to a [`MemorySink`].
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Record(LogRecord),
    BlankLine,
}

/// Sink that keeps every record in memory, in emission order.
///
/// Intended for tests that want to assert on structured fields rather than
/// on rendered text.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<Entry>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, blank lines included.
    pub fn entries(&self) -> Vec<Entry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Only the records, without blank lines.
    pub fn records(&self) -> Vec<LogRecord> {
        self.entries()
            .into_iter()
            .filter_map(|entry| match entry {
                Entry::Record(record) => Some(record),
                Entry::BlankLine => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn push(&self, entry: Entry) -> Result<(), EmitError> {
        self.entries
            .lock()
            .map_err(|_| EmitError::Poisoned)?
            .push(entry);
        Ok(())
    }
}

impl LogSink for MemorySink {
    fn send(&self, record: &LogRecord) -> Result<(), EmitError> {
        self.push(Entry::Record(record.clone()))
    }

    fn blank_line(&self) -> Result<(), EmitError> {
        self.push(Entry::BlankLine)
    }
}
