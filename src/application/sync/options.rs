//! Sync Options
//!
//! Values the orchestrator needs to build a transfer invocation.

use std::path::PathBuf;

/// Consecutive recoverable failures tolerated before giving up
pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// Options for the sync orchestrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    /// Watch root (absolute)
    pub root: PathBuf,
    /// Destination, local path or `host:path`
    pub destination: String,
    /// Transfer executable
    pub rsync_path: PathBuf,
    /// Pass `--dry-run`
    pub dry_run: bool,
    /// Exclude file handed to the transfer tool
    pub exclude_from: Option<PathBuf>,
    /// Also delete destination items matching the exclude rules
    pub delete_excluded: bool,
    /// Extra arguments inserted before source and destination
    pub extra_args: Vec<String>,
    /// Full-sync retries after recoverable failures
    pub max_retries: u32,
}

impl SyncOptions {
    pub fn new(root: impl Into<PathBuf>, destination: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            destination: destination.into(),
            rsync_path: PathBuf::from("rsync"),
            dry_run: false,
            exclude_from: None,
            delete_excluded: false,
            extra_args: Vec::new(),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    pub fn with_rsync_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.rsync_path = path.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_exclude_from(mut self, path: Option<PathBuf>) -> Self {
        self.exclude_from = path;
        self
    }

    pub fn with_delete_excluded(mut self, delete_excluded: bool) -> Self {
        self.delete_excluded = delete_excluded;
        self
    }

    pub fn with_extra_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}
