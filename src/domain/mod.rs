//! Domain Layer
//!
//! The change-aggregation and sync-scheduling core, without I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (PendingPath, ChangeKind, IgnorePatterns)
//! - `services/` - Path normalization, coalescing, debouncing, output parsing
//! - `ports/` - Interface definitions for infrastructure (filesystem probe,
//!   transfer backend, event sink, ignore predicate)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Existence checks and process spawning go through ports
//! 2. **Explicit time** - Timers take `Instant` arguments instead of sleeping
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod ports;
pub mod services;
pub mod value_objects;
