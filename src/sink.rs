use crate::error::EmitError;
use crate::record::LogRecord;

/// Destination for [`LogRecord`]s produced by a
/// [`ServiceLogger`](crate::logger::ServiceLogger).
///
/// Implementations render and write one record per call. Writes are
/// synchronous; a sink shared between threads is responsible for
/// serializing access to its output so that lines never interleave.
pub trait LogSink: Send + Sync {
    /// Write a single record.
    ///
    /// **Returns**
    /// - `Ok(())` once the record has been handed to the output.
    /// - `Err(..)` if encoding or the underlying write failed. The logger
    ///   returns this to its caller unchanged.
    fn send(&self, record: &LogRecord) -> Result<(), EmitError>;

    /// Write an empty separator line. Used after critical records.
    ///
    /// Default implementation is a no-op.
    fn blank_line(&self) -> Result<(), EmitError> {
        Ok(())
    }

    /// Flush any buffered output.
    ///
    /// Default implementation is a no-op.
    fn flush(&self) -> Result<(), EmitError> {
        Ok(())
    }
}
