use crate::error::EmitError;
use crate::record::LogRecord;
use crate::sink::LogSink;

/// A sink that simply drops all records.
///
/// Useful for measuring the overhead of building records without any I/O,
/// and for code paths that require a logger but whose output is irrelevant.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    fn send(&self, _record: &LogRecord) -> Result<(), EmitError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::ServiceLogger;
    use std::sync::Arc;

    #[test]
    fn every_call_succeeds() {
        let logger = ServiceLogger::with_sink("quiet", Arc::new(NoopSink));
        assert!(logger.info_msg("dropped").is_ok());
        assert!(logger.crit_msg("dropped too").is_ok());
        assert!(NoopSink.flush().is_ok());
    }
}
