//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod change_kind;
mod ignore_patterns;
mod pending_path;

pub use change_kind::ChangeKind;
pub use ignore_patterns::{IgnoreError, IgnorePatterns};
pub use pending_path::PendingPath;
