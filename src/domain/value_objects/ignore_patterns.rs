//! Ignore patterns value object
//!
//! Loads the exclude file (the same one handed to rsync via `--exclude-from`)
//! and matches paths with gitignore semantics.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::ports::IgnorePredicate;

/// Maximum exclude file size (256KB)
const MAX_FILE_SIZE: u64 = 262_144;

/// Maximum number of patterns allowed
const MAX_PATTERNS: usize = 5000;

/// Patterns loaded from an exclude file.
///
/// Uses the `ignore` crate for gitignore-compatible pattern matching.
#[derive(Debug)]
pub struct IgnorePatterns {
    matcher: Gitignore,
    pattern_count: usize,
}

impl Default for IgnorePatterns {
    fn default() -> Self {
        Self::empty()
    }
}

impl IgnorePatterns {
    /// Create an empty pattern set (matches nothing).
    pub fn empty() -> Self {
        Self {
            matcher: Gitignore::empty(),
            pattern_count: 0,
        }
    }

    /// Load patterns for the watch root `root` from `exclude_file`.
    ///
    /// Relative `exclude_file` paths are resolved against `root`.
    /// Returns `Ok(empty)` if the file doesn't exist.
    pub fn load(root: &Path, exclude_file: &Path) -> Result<Self, IgnoreError> {
        let ignore_path = if exclude_file.is_absolute() {
            exclude_file.to_path_buf()
        } else {
            root.join(exclude_file)
        };

        if !ignore_path.exists() {
            return Ok(Self::empty());
        }

        let metadata = fs::metadata(&ignore_path).map_err(IgnoreError::Io)?;
        if metadata.len() > MAX_FILE_SIZE {
            return Err(IgnoreError::FileTooLarge {
                path: ignore_path,
                size: metadata.len(),
                limit: MAX_FILE_SIZE,
            });
        }

        let content = fs::read_to_string(&ignore_path).map_err(IgnoreError::Io)?;
        Self::from_content(root, &ignore_path, &content)
    }

    /// Parse patterns from string content.
    ///
    /// Lines use rsync's exclude-file syntax: `#` and `;` start comments, and
    /// a leading `- ` or `+ ` marks an exclude or include rule. Anything else
    /// is a plain exclude pattern. The first matching rule decides, as it does
    /// for rsync.
    pub fn from_content(
        root: &Path,
        source_path: &Path,
        content: &str,
    ) -> Result<Self, IgnoreError> {
        let rules: Vec<(usize, &str, String)> = content
            .lines()
            .enumerate()
            .filter_map(|(index, raw)| exclude_rule(raw).map(|rule| (index + 1, raw, rule)))
            .collect();

        if rules.len() > MAX_PATTERNS {
            return Err(IgnoreError::TooManyPatterns {
                path: source_path.to_path_buf(),
                count: rules.len(),
                limit: MAX_PATTERNS,
            });
        }

        // gitignore lets the last match win, so feed the rules back to front.
        let mut builder = GitignoreBuilder::new(root);
        for (line, raw, rule) in rules.iter().rev() {
            builder
                .add_line(Some(source_path.to_path_buf()), rule)
                .map_err(|e| IgnoreError::InvalidPattern {
                    path: source_path.to_path_buf(),
                    line: *line,
                    pattern: raw.to_string(),
                    message: e.to_string(),
                })?;
        }

        let matcher = builder
            .build()
            .map_err(|e| IgnoreError::BuildFailed(e.to_string()))?;

        Ok(Self {
            matcher,
            pattern_count: rules.len(),
        })
    }

    /// Number of patterns loaded.
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// Check if this is an empty pattern set.
    pub fn is_empty(&self) -> bool {
        self.pattern_count == 0
    }
}

impl IgnorePredicate for IgnorePatterns {
    fn is_ignored(&self, rel_path: &Path, is_dir: bool) -> bool {
        if rel_path.as_os_str().is_empty() {
            return false;
        }
        self.matcher
            .matched_path_or_any_parents(rel_path, is_dir)
            .is_ignore()
    }
}

/// Translate one exclude-file line into a gitignore rule.
///
/// Returns `None` for blank lines and comments.
fn exclude_rule(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
        return None;
    }
    if let Some(include) = line.strip_prefix("+ ") {
        return Some(format!("!{}", include.trim_start()));
    }
    if let Some(exclude) = line.strip_prefix("- ") {
        return Some(exclude.trim_start().to_string());
    }
    Some(line.to_string())
}

/// Errors that can occur when loading the exclude file.
#[derive(Debug, Error)]
pub enum IgnoreError {
    #[error("exclude file exceeds {}KB limit ({size} bytes): {}", limit / 1024, path.display())]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("exclude file has {count} patterns, exceeds {limit} limit: {}", path.display())]
    TooManyPatterns {
        path: PathBuf,
        count: usize,
        limit: usize,
    },

    #[error("invalid exclude pattern at {}:{line}: '{pattern}' - {message}", path.display())]
    InvalidPattern {
        path: PathBuf,
        line: usize,
        pattern: String,
        message: String,
    },

    #[error("failed to build ignore matcher: {0}")]
    BuildFailed(String),

    #[error("IO error reading exclude file: {0}")]
    Io(#[source] std::io::Error),
}
