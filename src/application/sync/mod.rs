//! Sync orchestration
//!
//! Owns the "is a transfer running" state. Calls to `sync()` are served
//! strictly in arrival order, so at most one transfer process is alive at a
//! time and run N+1 never starts before run N (including its retries) ends.

mod args;
mod exit_code;
mod options;
mod orchestrator;


pub use args::{build_transfer_args, source_arg, stdin_payload};
pub use exit_code::{describe_exit_code, ExitClass, RECOVERABLE_EXIT_CODES};
pub use options::{SyncOptions, DEFAULT_MAX_RETRIES};
pub use orchestrator::{SyncOrchestrator, SyncStats};
