//! Tests for the config module

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tempfile::tempdir;

use super::*;
use crate::error::SyncwatchError;

fn no_env(_key: &str) -> Option<String> {
    None
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.transfer.rsync, PathBuf::from("rsync"));
    assert!(!config.transfer.dry_run);
    assert_eq!(config.transfer.max_retries, 5);
    assert_eq!(config.debounce.min_delay(), Duration::from_millis(50));
    assert_eq!(config.debounce.max_delay(), Duration::from_millis(2000));
    assert_eq!(config.debounce.max_paths, 100);
    assert!(config.watch.initial_sync);
    assert!(!config.watch.keep_going);
    assert_eq!(config.output.verbosity, Verbosity::Normal);
    assert_eq!(config.output.color, ColorMode::Auto);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[transfer]
rsync = "/usr/local/bin/rsync"
exclude_from = ".syncignore"
delete_excluded = true
extra_args = ["--bwlimit=1000"]

[debounce]
min_ms = 100
max_paths = 20

[watch]
keep_going = true

[output]
verbosity = "verbose"
color = "never"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.transfer.rsync, PathBuf::from("/usr/local/bin/rsync"));
    assert_eq!(config.transfer.exclude_from, Some(PathBuf::from(".syncignore")));
    assert!(config.transfer.delete_excluded);
    assert_eq!(config.transfer.extra_args, vec!["--bwlimit=1000"]);
    assert_eq!(config.debounce.min_ms, 100);
    assert_eq!(config.debounce.max_ms, 2000);
    assert_eq!(config.debounce.max_paths, 20);
    assert!(config.watch.keep_going);
    assert!(config.watch.initial_sync);
    assert_eq!(config.output.verbosity, Verbosity::Verbose);
    assert_eq!(config.output.color, ColorMode::Never);
}

#[test]
fn test_unknown_keys_become_warnings_with_suggestions() {
    let toml = "[transfer]\ndry_rn = true\n\n[debounce]\nmin_ms = 10\n";
    let (config, warnings) = parse_with_warnings(toml, Path::new(".syncwatch.toml")).unwrap();

    assert_eq!(config.debounce.min_ms, 10);
    assert!(!config.transfer.dry_run);
    assert_eq!(
        warnings,
        vec![ConfigWarning::UnknownKey {
            key: "dry_rn".to_string(),
            file: PathBuf::from(".syncwatch.toml"),
            line: Some(2),
            suggestion: Some("dry_run".to_string()),
        }]
    );
    assert_eq!(
        warnings[0].to_string(),
        "Unknown config key 'dry_rn' in .syncwatch.toml:2. Did you mean 'dry_run'?"
    );
}

#[test]
fn test_invalid_value_is_an_error() {
    let err = parse_with_warnings("[debounce]\nmin_ms = \"fast\"\n", Path::new("cfg.toml"))
        .unwrap_err();
    assert!(matches!(err, SyncwatchError::InvalidConfig { .. }));
    assert!(err.to_string().contains("cfg.toml"));
}

#[test]
fn test_config_serializes_back_to_toml() {
    let config = Config::default();
    let text = toml::to_string(&config).unwrap();
    let back: Config = toml::from_str(&text).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_discover_prefers_project_config() {
    let root = tempdir().unwrap();
    let user_dir = tempdir().unwrap();
    fs::write(
        root.path().join(PROJECT_CONFIG_FILE),
        "[transfer]\ndry_run = true\n",
    )
    .unwrap();
    fs::write(
        user_dir.path().join("config.toml"),
        "[debounce]\nmin_ms = 5\n",
    )
    .unwrap();

    let user = user_dir.path().to_string_lossy().to_string();
    let (config, warnings) = discover(root.path(), |key| {
        (key == ENV_CONFIG_DIR).then(|| user.clone())
    })
    .unwrap();

    assert!(warnings.is_empty());
    assert!(config.transfer.dry_run);
    assert_eq!(config.debounce.min_ms, 50, "user config is not merged");
}

#[test]
fn test_discover_falls_back_to_user_config() {
    let root = tempdir().unwrap();
    let user_dir = tempdir().unwrap();
    fs::write(
        user_dir.path().join("config.toml"),
        "[debounce]\nmin_ms = 5\n",
    )
    .unwrap();

    let user = user_dir.path().to_string_lossy().to_string();
    let (config, _) = discover(root.path(), |key| {
        (key == ENV_CONFIG_DIR).then(|| user.clone())
    })
    .unwrap();

    assert_eq!(config.debounce.min_ms, 5);
}

#[test]
fn test_discover_defaults_without_files() {
    let root = tempdir().unwrap();
    let empty_dir = tempdir().unwrap();
    let dir = empty_dir.path().to_string_lossy().to_string();

    let (config, warnings) = discover(root.path(), |key| {
        (key == ENV_CONFIG_DIR).then(|| dir.clone())
    })
    .unwrap();

    assert_eq!(config, Config::default());
    assert!(warnings.is_empty());
}

#[test]
fn test_discover_applies_env_on_top_of_file() {
    let root = tempdir().unwrap();
    fs::write(
        root.path().join(PROJECT_CONFIG_FILE),
        "[output]\nverbosity = \"quiet\"\n",
    )
    .unwrap();

    let (config, warnings) = discover(root.path(), |key| match key {
        "SYNCWATCH_VERBOSITY" => Some("verbose".to_string()),
        "SYNCWATCH_COLOR" => Some("sometimes".to_string()),
        _ => None,
    })
    .unwrap();

    assert_eq!(config.output.verbosity, Verbosity::Verbose);
    assert_eq!(warnings.len(), 1);
    assert!(matches!(warnings[0], ConfigWarning::InvalidEnv { .. }));
}

#[test]
fn test_user_config_path_override() {
    let path = user_config_path(|key| (key == ENV_CONFIG_DIR).then(|| "/tmp/sw".to_string()));
    assert_eq!(path, Some(PathBuf::from("/tmp/sw/config.toml")));

    if let Some(path) = user_config_path(no_env) {
        assert!(path.ends_with("syncwatch/config.toml"));
    }
}
