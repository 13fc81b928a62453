//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `SyncOrchestrator` - Runs transfers one at a time and classifies their exit codes
//! - `WatchUseCase` - Feeds filesystem changes through the coalescer and debounce timer

pub mod sync;
pub mod watch;

pub use sync::{build_transfer_args, ExitClass, SyncOptions, SyncOrchestrator, SyncStats};
pub use watch::{WatchInput, WatchOptions, WatchUseCase};
