//! Process-wide log sink handle.
//!
//! The core never reads this handle; every domain operation takes its sink as
//! an argument. The binary installs the configured sink here once so that code
//! without access to the engine can still record events.

use crate::domain::ports::SharedSink;
use std::sync::{Arc, OnceLock};

static SINK: OnceLock<SharedSink> = OnceLock::new();

/// Installs the process-wide sink.
///
/// Only the first call has an effect. Returns `false` when a sink was already
/// installed, in which case `sink` is dropped.
pub fn install(sink: SharedSink) -> bool {
    let installed = SINK.set(sink).is_ok();
    if !installed {
        tracing::debug!("log sink already installed, keeping the existing one");
    }
    installed
}

/// Returns the installed sink, if any.
pub fn get() -> Option<SharedSink> {
    SINK.get().map(Arc::clone)
}

/// Records `text` on the installed sink.
pub fn record(text: &str) {
    match SINK.get() {
        Some(sink) => sink.record(text),
        None => tracing::error!(text, "no log sink installed, record dropped"),
    }
}
