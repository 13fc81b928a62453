//! Configuration module for syncwatch
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SYNCWATCH_*)
//! 3. Project config (`<root>/.syncwatch.toml`)
//! 4. User config (`~/.config/syncwatch/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod env;
mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use env::{apply_env_overrides, levenshtein, EnvVarValidator};
pub use loader::{
    discover, load_with_warnings, parse_with_warnings, user_config_path, ConfigWarning,
    ENV_CONFIG_DIR, PROJECT_CONFIG_FILE,
};
pub use types::{
    ColorMode, Config, DebounceConfig, OutputConfig, TransferConfig, Verbosity, WatchConfig,
};
