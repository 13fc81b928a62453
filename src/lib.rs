//! syncwatch - directory mirroring driven by filesystem events
//!
//! syncwatch watches a directory tree, coalesces bursts of changes into a
//! minimal set of paths, waits for the burst to settle, and mirrors the
//! affected paths to a destination with rsync. Transfers never overlap, and
//! recoverable rsync failures fall back to a full sync of the root.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{SyncOptions, SyncOrchestrator, SyncStats, WatchOptions, WatchUseCase};
pub use config::Config;
pub use domain::ports::{SyncEvent, SyncEventSink};
pub use domain::value_objects::{ChangeKind, PendingPath};
pub use error::{SyncwatchError, SyncwatchResult};
