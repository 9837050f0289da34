use crate::domain::ports::LogSink;
use std::io::{self, Write};

/// Writes each record to stderr as `[console] <text>`.
///
/// Stdout is reserved for the status CSV the binary prints.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for ConsoleSink {
    fn record(&self, text: &str) {
        let stderr = io::stderr();
        let mut out = stderr.lock();
        if let Err(e) = writeln!(out, "[console] {text}") {
            tracing::warn!(error = %e, "console sink failed to write record");
        }
    }
}
