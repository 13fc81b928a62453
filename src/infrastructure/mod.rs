//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system probe
//! - `transfer/` - rsync process backend
//! - `events/` - NDJSON event sink

pub mod events;
pub mod fs;
pub mod transfer;

// Re-export for convenience
pub use events::JsonEventSink;
pub use fs::{expand_home, LocalFs};
pub use transfer::RsyncBackend;
