//! Watch inputs and options

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::event::{EventKind, ModifyKind};

use crate::domain::services::{DEFAULT_MAX_DELAY, DEFAULT_MAX_PATHS, DEFAULT_MIN_DELAY};
use crate::domain::value_objects::ChangeKind;

/// Upper bound on one idle wait of the watch loop
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Watch root (absolute)
    pub root: PathBuf,
    /// Initial debounce delay
    pub min_delay: Duration,
    /// Debounce delay cap
    pub max_delay: Duration,
    /// Pending paths before collapsing to a full sync
    pub max_paths: usize,
    /// Sync the whole root before watching
    pub initial_sync: bool,
    /// Keep watching after a failed sync
    pub keep_going: bool,
}

impl WatchOptions {
    /// Create new watch options with defaults for everything but the root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            min_delay: DEFAULT_MIN_DELAY,
            max_delay: DEFAULT_MAX_DELAY,
            max_paths: DEFAULT_MAX_PATHS,
            initial_sync: true,
            keep_going: false,
        }
    }

    pub fn with_delays(mut self, min_delay: Duration, max_delay: Duration) -> Self {
        self.min_delay = min_delay;
        self.max_delay = max_delay;
        self
    }

    pub fn with_max_paths(mut self, max_paths: usize) -> Self {
        self.max_paths = max_paths;
        self
    }

    pub fn with_initial_sync(mut self, initial_sync: bool) -> Self {
        self.initial_sync = initial_sync;
        self
    }

    pub fn with_keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }
}

/// One item delivered to the watch loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchInput {
    /// A filesystem entry changed (absolute path)
    Change { kind: ChangeKind, path: PathBuf },
    /// The watcher reported a problem
    Error(String),
}

impl WatchInput {
    pub fn change(kind: ChangeKind, path: impl Into<PathBuf>) -> Self {
        Self::Change {
            kind,
            path: path.into(),
        }
    }
}

/// Map a raw notify event kind onto a change kind.
///
/// Renames report each side separately; whether a side was the source or the
/// target is decided by looking at the path. Access events carry no change.
pub fn classify_event_kind(kind: &EventKind, path: &Path) -> Option<ChangeKind> {
    match kind {
        EventKind::Access(_) => None,
        EventKind::Create(_) => Some(ChangeKind::Added),
        EventKind::Modify(ModifyKind::Name(_)) => {
            if path.symlink_metadata().is_ok() {
                Some(ChangeKind::Added)
            } else {
                Some(ChangeKind::Removed)
            }
        }
        EventKind::Modify(_) => Some(ChangeKind::Modified),
        EventKind::Remove(_) => Some(ChangeKind::Removed),
        EventKind::Any | EventKind::Other => Some(ChangeKind::Modified),
    }
}

/// Turn a notify event into watch inputs, one per reported path
pub fn inputs_from_event(event: notify::Event) -> Vec<WatchInput> {
    let notify::Event { kind, paths, .. } = event;
    paths
        .into_iter()
        .filter_map(|path| {
            classify_event_kind(&kind, &path).map(|kind| WatchInput::Change { kind, path })
        })
        .collect()
}
