//! Watch Use Case
//!
//! Continuous mirroring of one watch root. It orchestrates:
//! - File system monitoring (via `notify` crate)
//! - Ignore filtering and change coalescing
//! - Adaptive debouncing (50ms growing to 2s under sustained churn)
//! - Handing debounced batches to the `SyncOrchestrator`
//!
//! ## Usage
//!
//! ```ignore
//! let options = WatchOptions::new("/data/src");
//! let use_case = WatchUseCase::new(options, orchestrator, ignore, events);
//! use_case.start(running)?;
//! ```

mod event;
mod use_case;


pub use event::{
    classify_event_kind, inputs_from_event, WatchInput, WatchOptions, POLL_INTERVAL,
};
pub use use_case::WatchUseCase;
