//! Configuration discovery and loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SyncwatchError, SyncwatchResult};

use super::env::{apply_env_overrides, levenshtein};
use super::types::Config;

/// Project config file, looked up in the watch root
pub const PROJECT_CONFIG_FILE: &str = ".syncwatch.toml";

/// Overrides the directory holding the user config (mainly for tests)
pub const ENV_CONFIG_DIR: &str = "SYNCWATCH_CONFIG_DIR";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// Key not recognized in a config file
    UnknownKey {
        key: String,
        file: PathBuf,
        line: Option<usize>,
        suggestion: Option<String>,
    },
    /// Environment variable with an unusable value
    InvalidEnv { message: String },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKey {
                key,
                file,
                line,
                suggestion,
            } => {
                write!(f, "Unknown config key '{}' in {}", key, file.display())?;
                if let Some(line) = line {
                    write!(f, ":{}", line)?;
                }
                if let Some(suggestion) = suggestion {
                    write!(f, ". Did you mean '{}'?", suggestion)?;
                }
                Ok(())
            }
            Self::InvalidEnv { message } => f.write_str(message),
        }
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SyncwatchResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse TOML content; `path` is only used for messages.
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> SyncwatchResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SyncwatchError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning::UnknownKey {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Find and load configuration for `root`.
///
/// Order: `<root>/.syncwatch.toml`, then the user config, then defaults.
/// The first file found wins; environment overrides apply on top.
pub fn discover<F>(root: &Path, get_env: F) -> SyncwatchResult<(Config, Vec<ConfigWarning>)>
where
    F: Fn(&str) -> Option<String>,
{
    let project_config = root.join(PROJECT_CONFIG_FILE);
    let user_config = user_config_path(&get_env).filter(|p| p.is_file());

    let (mut config, mut warnings) = if project_config.is_file() {
        load_with_warnings(&project_config)?
    } else if let Some(user_config) = user_config {
        load_with_warnings(&user_config)?
    } else {
        (Config::default(), Vec::new())
    };

    warnings.extend(
        apply_env_overrides(&mut config, &get_env)
            .into_iter()
            .map(|message| ConfigWarning::InvalidEnv { message }),
    );

    Ok((config, warnings))
}

/// Location of the user config file
pub fn user_config_path<F>(get_env: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = get_env(ENV_CONFIG_DIR).filter(|d| !d.is_empty()) {
        return Some(PathBuf::from(dir).join("config.toml"));
    }
    dirs::config_dir().map(|dir| dir.join("syncwatch").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "transfer",
        "rsync",
        "dry_run",
        "exclude_from",
        "delete_excluded",
        "extra_args",
        "max_retries",
        "debounce",
        "min_ms",
        "max_ms",
        "max_paths",
        "watch",
        "initial_sync",
        "keep_going",
        "output",
        "verbosity",
        "color",
        "unicode",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|&(_, dist)| dist)
        .filter(|&(_, dist)| dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}
