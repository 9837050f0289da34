use super::console::ConsoleSink;
use super::file::{DEFAULT_LOG_FILE, FileSink};
use super::in_memory::InMemorySink;
use crate::domain::ports::{SharedSink, SinkFactory};
use crate::error::{OpsError, Result};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

/// Which log sink the application records to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SinkKind {
    #[default]
    Console,
    File,
    /// External log store stub, kept in memory for the life of the process.
    ///
    /// Nothing reads the store back; stored records are only visible as
    /// `info` events (`RUST_LOG=info`).
    Store,
}

impl SinkKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::File => "file",
            Self::Store => "store",
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SinkKind {
    type Err = OpsError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "console" => Ok(Self::Console),
            "file" => Ok(Self::File),
            "store" | "database" => Ok(Self::Store),
            _ => Err(OpsError::UnknownSinkKind(s.to_string())),
        }
    }
}

/// Startup choice of log sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    pub kind: SinkKind,
    /// Only read when `kind` is [`SinkKind::File`].
    pub file_path: PathBuf,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            kind: SinkKind::default(),
            file_path: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl SinkConfig {
    /// Builds a config from a sink name, failing on names that are not known.
    pub fn parse(kind: &str, file_path: Option<PathBuf>) -> Result<Self> {
        Ok(Self {
            kind: kind.parse()?,
            file_path: file_path.unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        })
    }
}

/// Creates the sink described by `config`.
pub fn build_sink(config: &SinkConfig) -> SharedSink {
    tracing::debug!(kind = %config.kind, "building log sink");
    match config.kind {
        SinkKind::Console => Arc::new(ConsoleSink::new()),
        SinkKind::File => Arc::new(FileSink::new(&config.file_path)),
        SinkKind::Store => Arc::new(InMemorySink::new()),
    }
}

/// Defers sink construction until the factory is called.
pub fn sink_factory(config: SinkConfig) -> SinkFactory {
    Box::new(move || build_sink(&config))
}
