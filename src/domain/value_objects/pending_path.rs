//! Pending path value object
//!
//! A path waiting to be synced, relative to the watch root, or the sentinel
//! meaning "the entire root".

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A path relative to the watch root, or the whole root.
///
/// `Root` sorts before every relative path, and relative paths sort by
/// component, so an ancestor always sorts before its descendants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PendingPath {
    /// Sync the entire watch root
    Root,
    /// Sync one entry below the watch root
    Relative(PathBuf),
}

impl PendingPath {
    /// Build from a root-relative path.
    ///
    /// `.` components are dropped; an empty result is `Root`. Absolute paths
    /// and paths containing `..` are rejected.
    pub fn new(rel: impl AsRef<Path>) -> Option<Self> {
        let mut clean = PathBuf::new();
        for component in rel.as_ref().components() {
            match component {
                Component::Normal(part) => clean.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
            }
        }

        if clean.as_os_str().is_empty() {
            Some(Self::Root)
        } else {
            Some(Self::Relative(clean))
        }
    }

    /// Build from an absolute path reported by the watcher.
    ///
    /// Returns `None` for paths outside `root`.
    pub fn from_absolute(root: &Path, path: &Path) -> Option<Self> {
        let rel = path.strip_prefix(root).ok()?;
        Self::new(rel)
    }

    /// Whether this is the whole-root sentinel
    pub fn is_root(&self) -> bool {
        matches!(self, Self::Root)
    }

    /// Relative path; empty for `Root`
    pub fn as_path(&self) -> &Path {
        match self {
            Self::Root => Path::new(""),
            Self::Relative(path) => path,
        }
    }

    /// Absolute location of this entry under `root`
    pub fn resolve(&self, root: &Path) -> PathBuf {
        match self {
            Self::Root => root.to_path_buf(),
            Self::Relative(path) => root.join(path),
        }
    }

    /// Immediate parent. Top-level entries and `Root` itself have `Root` as parent.
    pub fn parent(&self) -> Self {
        match self {
            Self::Root => Self::Root,
            Self::Relative(path) => match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => {
                    Self::Relative(parent.to_path_buf())
                }
                _ => Self::Root,
            },
        }
    }

    /// True when `other` lies strictly below `self`
    pub fn is_ancestor_of(&self, other: &PendingPath) -> bool {
        match (self, other) {
            (Self::Root, Self::Relative(_)) => true,
            (Self::Relative(mine), Self::Relative(theirs)) => {
                mine != theirs && theirs.starts_with(mine)
            }
            (_, Self::Root) => false,
        }
    }

    /// Deepest entry at or above `self` whose path is valid UTF-8.
    ///
    /// The transfer list is text, so an entry with an unrepresentable name is
    /// reached through its parent directory instead.
    pub fn nearest_utf8(&self) -> PendingPath {
        match self {
            Self::Root => Self::Root,
            Self::Relative(path) if path.to_str().is_some() => self.clone(),
            Self::Relative(_) => self.parent().nearest_utf8(),
        }
    }

    /// Line handed to the transfer process on stdin (`.` for the root)
    pub fn to_transfer_line(&self) -> String {
        match self {
            Self::Root => ".".to_string(),
            Self::Relative(path) => path
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/"),
        }
    }
}

impl fmt::Display for PendingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_transfer_line())
    }
}
