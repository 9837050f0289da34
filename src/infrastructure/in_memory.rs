use crate::domain::ports::LogSink;
use std::sync::{Arc, RwLock};

/// A thread-safe in-memory log sink.
///
/// Stands in for an external log store. Uses `Arc<RwLock<Vec<String>>>` so
/// clones share the same record list; ideal for tests that assert on what the
/// core recorded. Each stored record is also echoed at `info` level, since the
/// binary has no other way to read the store back.
#[derive(Default, Clone, Debug)]
pub struct InMemorySink {
    records: Arc<RwLock<Vec<String>>>,
}

impl InMemorySink {
    /// Creates a new, empty in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every record, oldest first.
    pub fn records(&self) -> Vec<String> {
        match self.records.read() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LogSink for InMemorySink {
    fn record(&self, text: &str) {
        let mut records = match self.records.write() {
            Ok(records) => records,
            Err(poisoned) => poisoned.into_inner(),
        };
        records.push(text.to_string());
        tracing::info!(text, "record stored");
    }
}
