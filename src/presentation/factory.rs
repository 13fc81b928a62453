//! Use Case Factory
//!
//! Resolves configuration and wires infrastructure into the orchestrator
//! and the watch use case.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::{SyncOptions, SyncOrchestrator, WatchOptions, WatchUseCase};
use crate::config::{self, apply_env_overrides, Config, ConfigWarning};
use crate::domain::ports::{IgnoreNothing, IgnorePredicate, SyncEventSink};
use crate::domain::value_objects::{IgnorePatterns, PendingPath};
use crate::error::{SyncwatchError, SyncwatchResult};
use crate::infrastructure::{expand_home, LocalFs, RsyncBackend};

/// Canonical form of the watch root.
///
/// Fails with `SourceNotFound` unless `source` is an existing directory.
pub fn resolve_root(source: &Path) -> SyncwatchResult<PathBuf> {
    let expanded = expand_home(source);
    match expanded.canonicalize() {
        Ok(root) if root.is_dir() => Ok(root),
        _ => Err(SyncwatchError::SourceNotFound { path: expanded }),
    }
}

/// Load configuration for `root`.
///
/// An explicit file replaces discovery; environment overrides apply either way.
pub fn load_config(
    root: &Path,
    explicit: Option<&Path>,
) -> SyncwatchResult<(Config, Vec<ConfigWarning>)> {
    let get_env = |key: &str| std::env::var(key).ok();
    let Some(path) = explicit else {
        return config::discover(root, get_env);
    };

    let (mut config, mut warnings) = config::load_with_warnings(&expand_home(path))?;
    warnings.extend(
        apply_env_overrides(&mut config, get_env)
            .into_iter()
            .map(|message| ConfigWarning::InvalidEnv { message }),
    );
    Ok((config, warnings))
}

/// Orchestrator options from the resolved config
pub fn sync_options(config: &Config, root: &Path, destination: &str) -> SyncOptions {
    let transfer = &config.transfer;
    SyncOptions::new(root, destination)
        .with_rsync_path(expand_home(&transfer.rsync))
        .with_dry_run(transfer.dry_run)
        .with_exclude_from(transfer.exclude_from.as_deref().map(expand_home))
        .with_delete_excluded(transfer.delete_excluded)
        .with_extra_args(transfer.extra_args.clone())
        .with_max_retries(transfer.max_retries)
}

/// Watch options from the resolved config
pub fn watch_options(config: &Config, root: &Path) -> WatchOptions {
    WatchOptions::new(root)
        .with_delays(config.debounce.min_delay(), config.debounce.max_delay())
        .with_max_paths(config.debounce.max_paths)
        .with_initial_sync(config.watch.initial_sync)
        .with_keep_going(config.watch.keep_going)
}

/// Watcher-side ignore rules: the exclude file if one is configured.
pub fn load_ignore(root: &Path, config: &Config) -> SyncwatchResult<Arc<dyn IgnorePredicate>> {
    match &config.transfer.exclude_from {
        Some(file) => Ok(Arc::new(IgnorePatterns::load(root, &expand_home(file))?)),
        None => Ok(Arc::new(IgnoreNothing)),
    }
}

/// Parse `--path` arguments into pending paths.
///
/// Absolute paths must lie inside `root`. No paths means the whole root.
pub fn requested_paths(root: &Path, paths: &[PathBuf]) -> SyncwatchResult<Vec<PendingPath>> {
    if paths.is_empty() {
        return Ok(vec![PendingPath::Root]);
    }
    paths
        .iter()
        .map(|path| {
            let pending = if path.is_absolute() {
                PendingPath::from_absolute(root, path)
            } else {
                PendingPath::new(path)
            };
            pending.ok_or_else(|| SyncwatchError::InvalidConfig {
                file: path.clone(),
                message: format!("path is not inside {}", root.display()),
            })
        })
        .collect()
}

/// Create an orchestrator backed by rsync and the local filesystem
pub fn create_orchestrator(
    options: SyncOptions,
    events: Arc<dyn SyncEventSink>,
) -> SyncOrchestrator {
    SyncOrchestrator::new(
        options,
        Arc::new(RsyncBackend::new()),
        Arc::new(LocalFs::new()),
        events,
    )
}

/// Create a watch use case with all dependencies wired up
pub fn create_watch_use_case(
    config: &Config,
    root: &Path,
    destination: &str,
    events: Arc<dyn SyncEventSink>,
) -> SyncwatchResult<WatchUseCase> {
    let ignore = load_ignore(root, config)?;
    let orchestrator = create_orchestrator(
        sync_options(config, root, destination),
        Arc::clone(&events),
    );
    Ok(WatchUseCase::new(
        watch_options(config, root),
        Arc::new(orchestrator),
        ignore,
        events,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::NoopEventSink;
    use std::fs;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_root_canonicalizes_directory() {
        let dir = tempdir().unwrap();
        let root = resolve_root(dir.path()).unwrap();
        assert_eq!(root, dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_resolve_root_rejects_missing_and_files() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("file.txt");
        fs::write(&file, "x").unwrap();

        assert!(matches!(
            resolve_root(&dir.path().join("missing")),
            Err(SyncwatchError::SourceNotFound { .. })
        ));
        assert!(matches!(
            resolve_root(&file),
            Err(SyncwatchError::SourceNotFound { .. })
        ));
    }

    #[test]
    fn test_load_config_explicit_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("custom.toml");
        fs::write(&file, "[debounce]\nmin_ms = 5\n").unwrap();

        let (config, _) = load_config(dir.path(), Some(&file)).unwrap();
        assert_eq!(config.debounce.min_ms, 5);
    }

    #[test]
    fn test_options_follow_config() {
        let mut config = Config::default();
        config.transfer.dry_run = true;
        config.transfer.exclude_from = Some(PathBuf::from(".syncignore"));
        config.transfer.max_retries = 2;
        config.debounce.min_ms = 10;
        config.debounce.max_ms = 90;
        config.debounce.max_paths = 3;
        config.watch.keep_going = true;

        let sync = sync_options(&config, Path::new("/src"), "host:/dst");
        assert_eq!(sync.destination, "host:/dst");
        assert!(sync.dry_run);
        assert_eq!(sync.exclude_from, Some(PathBuf::from(".syncignore")));
        assert_eq!(sync.max_retries, 2);

        let watch = watch_options(&config, Path::new("/src"));
        assert_eq!(watch.min_delay, Duration::from_millis(10));
        assert_eq!(watch.max_delay, Duration::from_millis(90));
        assert_eq!(watch.max_paths, 3);
        assert!(watch.initial_sync);
        assert!(watch.keep_going);
    }

    #[test]
    fn test_load_ignore_uses_exclude_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".syncignore"), "*.log\n").unwrap();
        let mut config = Config::default();

        let nothing = load_ignore(dir.path(), &config).unwrap();
        assert!(!nothing.is_ignored(Path::new("debug.log"), false));

        config.transfer.exclude_from = Some(PathBuf::from(".syncignore"));
        let patterns = load_ignore(dir.path(), &config).unwrap();
        assert!(patterns.is_ignored(Path::new("debug.log"), false));
        assert!(!patterns.is_ignored(Path::new("main.rs"), false));
    }

    #[test]
    fn test_requested_paths() {
        let root = Path::new("/data/src");
        assert_eq!(requested_paths(root, &[]).unwrap(), vec![PendingPath::Root]);
        assert_eq!(
            requested_paths(root, &[PathBuf::from("docs"), PathBuf::from("/data/src/a/b")])
                .unwrap(),
            vec![
                PendingPath::new("docs").unwrap(),
                PendingPath::new("a/b").unwrap()
            ]
        );
        assert!(requested_paths(root, &[PathBuf::from("../escape")]).is_err());
        assert!(requested_paths(root, &[PathBuf::from("/elsewhere")]).is_err());
    }

    #[test]
    fn test_create_watch_use_case_wires_options() {
        let dir = tempdir().unwrap();
        let use_case = create_watch_use_case(
            &Config::default(),
            dir.path(),
            "/tmp/mirror",
            Arc::new(NoopEventSink),
        )
        .unwrap();
        assert_eq!(use_case.options().root, dir.path());
        assert_eq!(use_case.options().max_paths, 100);
    }
}
