//! Domain Services
//!
//! The change-aggregation and scheduling logic. Everything here is
//! deterministic: filesystem probes go through the `FileSystem` port and
//! timers take the current `Instant` as an argument.

mod coalescer;
mod debounce;
mod output_parser;
mod path_normalizer;

pub use coalescer::{ChangeCoalescer, DEFAULT_MAX_PATHS};
pub use debounce::{
    Debounce, DebounceScheduler, BACKOFF_FACTOR, DEFAULT_MAX_DELAY, DEFAULT_MIN_DELAY,
    PRESSURE_THRESHOLD,
};
pub use output_parser::{parse_line, TransferLine, TransferOp};
pub use path_normalizer::{nearest_existing_ancestor, normalize_paths_to_sync, parent_paths_of};
