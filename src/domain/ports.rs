use std::sync::Arc;

/// Write-only destination for textual event records.
///
/// Implementations must never fail observably: an I/O error on the
/// underlying medium is swallowed or reported out of band.
pub trait LogSink: Send + Sync {
    fn record(&self, text: &str);
}

pub type SharedSink = Arc<dyn LogSink>;
pub type SinkFactory = Box<dyn Fn() -> SharedSink + Send + Sync>;

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn record(&self, text: &str) {
        (**self).record(text)
    }
}
