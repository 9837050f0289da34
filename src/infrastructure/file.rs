use crate::domain::ports::LogSink;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const DEFAULT_LOG_FILE: &str = "log.txt";

/// Appends each record to a file as `[file] <text>`.
///
/// The file is opened per record in append mode and created if missing. A
/// failed write is reported through `tracing` and otherwise ignored.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, text: &str) -> io::Result<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(|p| p.into_inner());
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "[file] {text}")
    }
}

impl Default for FileSink {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }
}

impl LogSink for FileSink {
    fn record(&self, text: &str) {
        if let Err(e) = self.append(text) {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "file sink failed to append record"
            );
        }
    }
}
