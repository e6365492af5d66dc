//! Output sink
//!
//! Print never touches the console directly: the caller injects a writer
//! capability and the evaluator hands it one rendered line per Print
//! evaluation. Failures are the sink's concern and only become evaluation
//! errors when the sink explicitly reports one.

use std::io::{self, Write};
use thiserror::Error;

/// A write failure explicitly reported by a sink.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct SinkError {
    pub message: String,
}

impl From<io::Error> for SinkError {
    fn from(err: io::Error) -> Self {
        SinkError {
            message: err.to_string(),
        }
    }
}

/// Injected output capability consumed by Print.
///
/// One call per Print evaluation, carrying the full rendered line (possibly
/// empty). Returning from `write` is the completion signal.
pub trait OutputSink {
    fn write(&mut self, line: &str) -> Result<(), SinkError>;
}

/// Sink that writes one line per call to standard output.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write(&mut self, line: &str) -> Result<(), SinkError> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        Ok(())
    }
}

/// Sink that records every written line; counting entries counts write calls.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every line written so far, in write order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of write calls received.
    pub fn write_count(&self) -> usize {
        self.lines.len()
    }
}

impl OutputSink for MemorySink {
    fn write(&mut self, line: &str) -> Result<(), SinkError> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_in_order() {
        let mut sink = MemorySink::new();
        sink.write("first").unwrap();
        sink.write("").unwrap();
        sink.write("third").unwrap();
        assert_eq!(sink.lines(), &["first", "", "third"]);
        assert_eq!(sink.write_count(), 3);
    }

    #[test]
    fn test_sink_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err = SinkError::from(io_err);
        assert_eq!(err.message, "pipe closed");
    }
}
