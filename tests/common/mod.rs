//! Common helpers for syncwatch CLI tests.
//!
//! Every command runs with an isolated config directory and plain output, so
//! a developer's own `~/.config/syncwatch/config.toml` never leaks in.

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

/// `syncwatch` command isolated from user config and terminal settings
pub fn syncwatch(config_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_syncwatch"));
    cmd.env("SYNCWATCH_CONFIG_DIR", config_dir)
        .env("NO_COLOR", "1")
        .env("TERM", "dumb")
        .env_remove("SYNCWATCH_RSYNC")
        .env_remove("SYNCWATCH_DRY_RUN")
        .env_remove("SYNCWATCH_EXCLUDE_FROM")
        .env_remove("SYNCWATCH_VERBOSITY");
    cmd
}

/// Whether a working rsync is on PATH
pub fn rsync_available() -> bool {
    Command::new("rsync")
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

/// Parse NDJSON output into values, skipping blank lines
pub fn json_lines(stdout: &[u8]) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).unwrap_or_else(|e| panic!("{e}: {line}")))
        .collect()
}
