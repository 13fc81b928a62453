//! Sync Event Port
//!
//! The complete observable surface of the engine. The presentation layer
//! turns these into console lines or NDJSON; there is no global logger.

use serde::Serialize;

use crate::domain::services::TransferOp;
use crate::domain::value_objects::{ChangeKind, PendingPath};

/// Event emitted while watching and syncing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SyncEvent {
    /// Watching started
    WatchStarted { root: String, destination: String },
    /// A change passed the ignore filter and entered the coalescer
    FileChanged { kind: ChangeKind, path: String },
    /// A transfer run is starting for these paths
    SyncStarted { paths: Vec<String> },
    /// The transfer process reported one item
    TransferItem { op: TransferOp, path: String },
    /// A sync finished successfully
    SyncEnded {
        paths: Vec<String>,
        items_synced: usize,
    },
    /// The debounce timer keeps getting pushed back
    DebouncePressure { pending_count: usize },
    /// Advisory message (transfer diagnostics, recoverable failures)
    Warning { message: String },
    /// Fatal error for the current sync
    Error { message: String },
    /// Watching stopped
    Shutdown,
}

impl SyncEvent {
    /// Convert to a JSON line with a `"command"` field included
    pub fn to_json(&self, command: &str) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!(command));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }

    pub(crate) fn sync_started(paths: &[PendingPath]) -> Self {
        Self::SyncStarted {
            paths: paths.iter().map(PendingPath::to_string).collect(),
        }
    }

    pub(crate) fn sync_ended(paths: &[PendingPath], items_synced: usize) -> Self {
        Self::SyncEnded {
            paths: paths.iter().map(PendingPath::to_string).collect(),
            items_synced,
        }
    }
}

/// Trait for receiving sync events
///
/// Implementations:
/// - console rendering in the CLI
/// - `JsonEventSink`: NDJSON stream for CI
/// - `NoopEventSink`: silent operation
/// - any `Fn(SyncEvent)` closure
pub trait SyncEventSink: Send + Sync {
    /// Handle an event
    fn on_event(&self, event: SyncEvent);

    /// Whether per-file events (`FileChanged`, `TransferItem`) are wanted
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

impl<F> SyncEventSink for F
where
    F: Fn(SyncEvent) + Send + Sync,
{
    fn on_event(&self, event: SyncEvent) {
        self(event)
    }
}

/// No-op event sink for silent operation
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventSink;

impl SyncEventSink for NoopEventSink {
    fn on_event(&self, _event: SyncEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
