use super::ports::LogSink;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Occupancy status of a dining table.
///
/// Every status has exactly one successor, so the lifecycle has no terminal
/// state and no invalid transition:
///
/// ```text
/// Free -> Ordered -> Done -> Free
/// Fixing -> Done
/// ```
///
/// `Fixing` is never produced by [`TableStatus::next`]; an operator sets it
/// explicitly through [`Table::set_status`].
#[derive(Debug, Serialize, PartialEq, Eq, Hash, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    #[default]
    Free,
    Ordered,
    Done,
    Fixing,
}

impl TableStatus {
    pub const ALL: [TableStatus; 4] = [Self::Free, Self::Ordered, Self::Done, Self::Fixing];

    /// The status a table moves to after handling one request.
    pub fn next(self) -> Self {
        match self {
            Self::Free => Self::Ordered,
            Self::Ordered => Self::Done,
            Self::Done => Self::Free,
            Self::Fixing => Self::Done,
        }
    }

    /// Line announced when a table in this status handles a request.
    pub fn announcement(self) -> &'static str {
        match self {
            Self::Free => "table free",
            Self::Ordered => "order placed",
            Self::Done => "payment settled",
            Self::Fixing => "under maintenance",
        }
    }

    /// Colour shown for this status on the floor display.
    pub fn colour(self) -> &'static str {
        match self {
            Self::Free => "green",
            Self::Ordered => "orange",
            Self::Done => "yellow",
            Self::Fixing => "red",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Ordered => "ordered",
            Self::Done => "done",
            Self::Fixing => "fixing",
        }
    }
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dining table and its current status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    status: TableStatus,
}

impl Table {
    /// Creates a table in the idle `Free` status.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> TableStatus {
        self.status
    }

    /// Operator override. This is the only way a table enters `Fixing`.
    pub fn set_status(&mut self, status: TableStatus) {
        self.status = status;
    }

    /// Announces the current status on `sink` and advances exactly one step.
    ///
    /// Returns the status the table holds afterwards.
    pub fn handle_request(&mut self, sink: &dyn LogSink) -> TableStatus {
        let current = self.status;
        sink.record(&format!(
            "{} ({})",
            current.announcement(),
            current.colour()
        ));
        self.status = current.next();
        tracing::debug!(from = %current, to = %self.status, "table transition");
        self.status
    }
}

/// A [`Table`] behind a single lock, for callers that share one table.
///
/// The read-modify-write in [`SharedTable::handle_request`] happens under the
/// lock, so two concurrent requests always advance the table by two steps.
#[derive(Debug, Clone, Default)]
pub struct SharedTable {
    inner: Arc<Mutex<Table>>,
}

impl SharedTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn status(&self) -> TableStatus {
        self.inner.lock().await.status()
    }

    pub async fn set_status(&self, status: TableStatus) {
        self.inner.lock().await.set_status(status);
    }

    pub async fn handle_request(&self, sink: &dyn LogSink) -> TableStatus {
        let mut table = self.inner.lock().await;
        table.handle_request(sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::in_memory::InMemorySink;

    #[test]
    fn test_transition_table_is_total() {
        let expected = [
            (TableStatus::Free, TableStatus::Ordered),
            (TableStatus::Ordered, TableStatus::Done),
            (TableStatus::Done, TableStatus::Free),
            (TableStatus::Fixing, TableStatus::Done),
        ];
        for (from, to) in expected {
            let sink = InMemorySink::new();
            let mut table = Table::new();
            table.set_status(from);

            assert_eq!(table.handle_request(&sink), to);
            assert_eq!(table.status(), to);
            assert_eq!(sink.records().len(), 1, "one announcement per request");
        }
    }

    #[test]
    fn test_cycle_closure_from_free() {
        let sink = InMemorySink::new();
        let mut table = Table::new();
        assert_eq!(table.status(), TableStatus::Free);

        table.handle_request(&sink);
        table.handle_request(&sink);
        assert_eq!(table.handle_request(&sink), TableStatus::Free);
        assert_eq!(table.handle_request(&sink), TableStatus::Ordered);

        assert_eq!(
            sink.records(),
            vec![
                "table free (green)",
                "order placed (orange)",
                "payment settled (yellow)",
                "table free (green)",
            ]
        );
    }

    #[test]
    fn test_two_requests_from_free_is_not_a_noop() {
        let sink = InMemorySink::new();
        let mut table = Table::new();
        table.handle_request(&sink);
        table.handle_request(&sink);
        assert_eq!(table.status(), TableStatus::Done);
    }

    #[test]
    fn test_fixing_recovers_through_done() {
        let sink = InMemorySink::new();
        let mut table = Table::new();
        table.set_status(TableStatus::Fixing);

        assert_eq!(table.handle_request(&sink), TableStatus::Done);
        assert_eq!(table.handle_request(&sink), TableStatus::Free);
        assert_eq!(sink.records()[0], "under maintenance (red)");
    }

    #[test]
    fn test_next_never_enters_fixing() {
        for status in TableStatus::ALL {
            assert_ne!(status.next(), TableStatus::Fixing);
        }
    }

    #[test]
    fn test_status_display_is_lowercase() {
        let names: Vec<String> = TableStatus::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(names, vec!["free", "ordered", "done", "fixing"]);
    }

    #[tokio::test]
    async fn test_shared_table_handle_request() {
        let sink = InMemorySink::new();
        let table = SharedTable::new();
        assert_eq!(table.handle_request(&sink).await, TableStatus::Ordered);

        table.set_status(TableStatus::Fixing).await;
        assert_eq!(table.handle_request(&sink).await, TableStatus::Done);
        assert_eq!(table.status().await, TableStatus::Done);
    }
}
