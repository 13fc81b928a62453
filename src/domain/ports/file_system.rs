//! FileSystem port - existence probing for path normalization
//!
//! The normalizer only needs to know whether an entry still exists, so the
//! port stays that small. Tests substitute an in-memory set of paths.

use std::path::Path;

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard metadata lookups
/// - in-memory fakes in tests
pub trait FileSystem: Send + Sync {
    /// Check if an entry exists (without following a dangling symlink to "missing")
    fn exists(&self, path: &Path) -> bool;
}
