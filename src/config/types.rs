//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::sync::DEFAULT_MAX_RETRIES;
use crate::domain::services::DEFAULT_MAX_PATHS;
use crate::error::SyncwatchResult;

use super::loader::{self, ConfigWarning};

/// Transfer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferConfig {
    /// rsync executable
    #[serde(default = "default_rsync")]
    pub rsync: PathBuf,

    #[serde(default)]
    pub dry_run: bool,

    /// Exclude file, relative to the watch root unless absolute
    #[serde(default)]
    pub exclude_from: Option<PathBuf>,

    #[serde(default)]
    pub delete_excluded: bool,

    #[serde(default)]
    pub extra_args: Vec<String>,

    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            rsync: default_rsync(),
            dry_run: false,
            exclude_from: None,
            delete_excluded: false,
            extra_args: Vec::new(),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

fn default_rsync() -> PathBuf {
    PathBuf::from("rsync")
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

/// Debounce configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebounceConfig {
    #[serde(default = "default_min_ms")]
    pub min_ms: u64,

    #[serde(default = "default_max_ms")]
    pub max_ms: u64,

    /// Pending paths before collapsing to a full sync
    #[serde(default = "default_max_paths")]
    pub max_paths: usize,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            min_ms: default_min_ms(),
            max_ms: default_max_ms(),
            max_paths: default_max_paths(),
        }
    }
}

impl DebounceConfig {
    pub fn min_delay(&self) -> Duration {
        Duration::from_millis(self.min_ms)
    }

    pub fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_ms)
    }
}

fn default_min_ms() -> u64 {
    50
}

fn default_max_ms() -> u64 {
    2000
}

fn default_max_paths() -> usize {
    DEFAULT_MAX_PATHS
}

/// Watch loop configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Mirror the whole root once before watching
    #[serde(default = "default_true")]
    pub initial_sync: bool,

    /// Keep watching after a failed sync
    #[serde(default)]
    pub keep_going: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            initial_sync: true,
            keep_going: false,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    /// Per-file change and transfer lines
    Verbose,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub transfer: TransferConfig,

    #[serde(default)]
    pub debounce: DebounceConfig,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> SyncwatchResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> SyncwatchResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the project or user config (or defaults) and apply environment
    /// overrides from the process environment.
    pub fn discover(root: &Path) -> SyncwatchResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(root, |key| std::env::var(key).ok())
    }
}
