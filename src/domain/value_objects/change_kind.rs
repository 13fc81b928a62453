//! Kinds of filesystem change the engine understands

use serde::Serialize;

/// A normalized filesystem change reported by the watcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// Entry was created
    Added,
    /// Entry contents or metadata changed
    Modified,
    /// Entry no longer exists
    Removed,
}

impl ChangeKind {
    /// Short label for console output
    pub fn label(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Modified => "modified",
            Self::Removed => "removed",
        }
    }
}
