//! Change coalescing
//!
//! Keeps the set of paths waiting for the next sync as small as possible.
//! Invariants after every call:
//! - no member is an ancestor of another member;
//! - if `Root` is present it is the only member.

use std::collections::BTreeSet;

use crate::domain::services::path_normalizer::parent_paths_of;
use crate::domain::value_objects::{ChangeKind, PendingPath};

/// Pending paths above this count collapse into a full sync
pub const DEFAULT_MAX_PATHS: usize = 100;

/// Pending-set of paths awaiting sync
#[derive(Debug, Clone)]
pub struct ChangeCoalescer {
    pending: BTreeSet<PendingPath>,
    max_paths: usize,
}

impl Default for ChangeCoalescer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PATHS)
    }
}

impl ChangeCoalescer {
    /// Create an empty coalescer that collapses to a full sync past `max_paths`
    pub fn new(max_paths: usize) -> Self {
        Self {
            pending: BTreeSet::new(),
            max_paths: max_paths.max(1),
        }
    }

    /// Record one change.
    ///
    /// Removals can't be synced directly (the entry is gone), so the parent
    /// directory is queued in their place.
    pub fn record_change(&mut self, kind: ChangeKind, path: PendingPath) {
        if self.is_full_sync() {
            return;
        }

        let target = match kind {
            ChangeKind::Added | ChangeKind::Modified => path,
            ChangeKind::Removed => {
                self.pending.remove(&path);
                path.parent()
            }
        };

        self.insert(target);
    }

    fn insert(&mut self, path: PendingPath) {
        if path.is_root() {
            self.collapse_to_root();
            return;
        }

        if self.pending.contains(&path)
            || parent_paths_of(&path)
                .iter()
                .any(|ancestor| self.pending.contains(ancestor))
        {
            return;
        }

        self.pending.retain(|pending| !path.is_ancestor_of(pending));
        self.pending.insert(path);

        if self.pending.len() > self.max_paths {
            self.collapse_to_root();
        }
    }

    fn collapse_to_root(&mut self) {
        self.pending.clear();
        self.pending.insert(PendingPath::Root);
    }

    /// Take all pending paths in sorted order, leaving the set empty
    pub fn drain(&mut self) -> Vec<PendingPath> {
        std::mem::take(&mut self.pending).into_iter().collect()
    }

    /// Whether the whole root is pending
    pub fn is_full_sync(&self) -> bool {
        self.pending.contains(&PendingPath::Root)
    }

    /// Check membership
    pub fn contains(&self, path: &PendingPath) -> bool {
        self.pending.contains(path)
    }

    /// Number of pending paths
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if nothing is pending
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Iterate pending paths in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &PendingPath> {
        self.pending.iter()
    }
}
