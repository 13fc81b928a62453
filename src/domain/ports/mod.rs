//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod ignore_predicate;
pub mod sync_events;
pub mod transfer;

pub use file_system::FileSystem;
pub use ignore_predicate::{IgnoreNothing, IgnorePredicate};
pub use sync_events::{NoopEventSink, SyncEvent, SyncEventSink};
pub use transfer::{OutputLine, TransferBackend, TransferError, TransferProcess, TransferRequest};
