//! Ignore predicate port
//!
//! Watcher-side filter. The transfer process re-applies the same rules
//! through its own exclude list.

use std::path::Path;

/// Decides whether a root-relative path is excluded from syncing
pub trait IgnorePredicate: Send + Sync {
    /// `is_dir` should be true if the path is a directory.
    fn is_ignored(&self, rel_path: &Path, is_dir: bool) -> bool;
}

/// Predicate that ignores nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreNothing;

impl IgnorePredicate for IgnoreNothing {
    fn is_ignored(&self, _rel_path: &Path, _is_dir: bool) -> bool {
        false
    }
}
