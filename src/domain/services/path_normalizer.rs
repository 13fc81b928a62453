//! Path normalization
//!
//! Rewrites changed paths into something the transfer tool can still
//! reference: a deleted file becomes its nearest surviving directory, and
//! anything that can't be resolved below the root becomes the root itself.

use std::collections::BTreeSet;
use std::path::Path;

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::PendingPath;

/// Ancestors of `path`, root-most first, ending with the immediate parent.
///
/// The `Root` sentinel is never included; `Root` and top-level entries have
/// no ancestors.
pub fn parent_paths_of(path: &PendingPath) -> Vec<PendingPath> {
    let PendingPath::Relative(rel) = path else {
        return Vec::new();
    };

    let mut parents: Vec<PendingPath> = rel
        .ancestors()
        .skip(1)
        .filter(|ancestor| !ancestor.as_os_str().is_empty())
        .map(|ancestor| PendingPath::Relative(ancestor.to_path_buf()))
        .collect();
    parents.reverse();
    parents
}

/// Deepest existing entry at or above `path`.
///
/// Probes `path` itself, then each ancestor from the immediate parent upward.
/// Returns `Root` when not even the top-level entry exists.
pub fn nearest_existing_ancestor<F>(fs: &F, base: &Path, path: &PendingPath) -> PendingPath
where
    F: FileSystem + ?Sized,
{
    if path.is_root() {
        return PendingPath::Root;
    }

    if fs.exists(&path.resolve(base)) {
        return path.clone();
    }

    parent_paths_of(path)
        .into_iter()
        .rev()
        .find(|candidate| fs.exists(&candidate.resolve(base)))
        .unwrap_or(PendingPath::Root)
}

/// Resolve a batch of pending paths into the list handed to the transfer tool.
///
/// - Any `Root` in the input, or any path that resolves to `Root`, makes the
///   result exactly `[Root]`.
/// - Entries whose path is not valid UTF-8 are replaced by their nearest
///   UTF-8 ancestor.
/// - Resolved paths are deduplicated and entries covered by another entry's
///   directory are dropped, so the result never holds an ancestor together
///   with one of its descendants.
///
/// The result is sorted, and applying the function to its own output returns
/// the same list.
pub fn normalize_paths_to_sync<F>(fs: &F, base: &Path, paths: &[PendingPath]) -> Vec<PendingPath>
where
    F: FileSystem + ?Sized,
{
    if paths.iter().any(PendingPath::is_root) {
        return vec![PendingPath::Root];
    }

    let mut resolved = BTreeSet::new();
    for path in paths {
        let nearest = nearest_existing_ancestor(fs, base, path).nearest_utf8();
        if nearest.is_root() {
            return vec![PendingPath::Root];
        }
        resolved.insert(nearest);
    }

    // Sorted order visits ancestors before their descendants.
    let mut kept: Vec<PendingPath> = Vec::with_capacity(resolved.len());
    for path in resolved {
        if !kept.iter().any(|k| k.is_ancestor_of(&path)) {
            kept.push(path);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::PathBuf;

    /// Filesystem fake that knows a fixed set of absolute paths
    struct FakeFs {
        existing: HashSet<PathBuf>,
    }

    impl FakeFs {
        fn with(paths: &[&str]) -> Self {
            Self {
                existing: paths.iter().map(PathBuf::from).collect(),
            }
        }
    }

    impl FileSystem for FakeFs {
        fn exists(&self, path: &Path) -> bool {
            self.existing.contains(path)
        }
    }

    fn rel(p: &str) -> PendingPath {
        PendingPath::new(p).unwrap()
    }

    #[test]
    fn parent_paths_are_root_most_first() {
        assert_eq!(
            parent_paths_of(&rel("a/b/c/d.txt")),
            vec![rel("a"), rel("a/b"), rel("a/b/c")]
        );
        assert!(parent_paths_of(&rel("top.txt")).is_empty());
        assert!(parent_paths_of(&PendingPath::Root).is_empty());
    }

    #[test]
    fn existing_path_resolves_to_itself() {
        let fs = FakeFs::with(&["/src/a", "/src/a/b.txt"]);
        assert_eq!(
            nearest_existing_ancestor(&fs, Path::new("/src"), &rel("a/b.txt")),
            rel("a/b.txt")
        );
    }

    #[test]
    fn deleted_file_resolves_to_deepest_existing_parent() {
        let fs = FakeFs::with(&["/src/a", "/src/a/b"]);
        assert_eq!(
            nearest_existing_ancestor(&fs, Path::new("/src"), &rel("a/b/c/gone.txt")),
            rel("a/b")
        );
    }

    #[test]
    fn probes_each_candidate_not_the_original_path() {
        // Only the middle ancestor exists; probing the original path at every
        // step would never find it.
        let fs = FakeFs::with(&["/src/a"]);
        assert_eq!(
            nearest_existing_ancestor(&fs, Path::new("/src"), &rel("a/b/c.txt")),
            rel("a")
        );
    }

    #[test]
    fn vanished_top_level_entry_resolves_to_root() {
        let fs = FakeFs::with(&[]);
        assert_eq!(
            nearest_existing_ancestor(&fs, Path::new("/src"), &rel("gone/file.txt")),
            PendingPath::Root
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_name_is_synced_through_its_directory() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let bad = PendingPath::new(Path::new("docs").join(OsStr::from_bytes(b"r\xe9sum\xe9.pdf")))
            .unwrap();
        let fs = FakeFs {
            existing: [
                PathBuf::from("/src/docs"),
                PathBuf::from("/src/docs/notes.txt"),
                bad.resolve(Path::new("/src")),
            ]
            .into_iter()
            .collect(),
        };

        assert_eq!(
            normalize_paths_to_sync(&fs, Path::new("/src"), &[bad, rel("docs/notes.txt")]),
            vec![rel("docs")]
        );
    }

    #[test]
    fn sentinel_in_input_short_circuits() {
        let fs = FakeFs::with(&["/src/a"]);
        assert_eq!(
            normalize_paths_to_sync(&fs, Path::new("/src"), &[rel("a"), PendingPath::Root]),
            vec![PendingPath::Root]
        );
    }

    #[test]
    fn any_root_resolution_collapses_everything() {
        let fs = FakeFs::with(&["/src/a"]);
        assert_eq!(
            normalize_paths_to_sync(&fs, Path::new("/src"), &[rel("a"), rel("missing")]),
            vec![PendingPath::Root]
        );
    }

    #[test]
    fn deduplicates_and_drops_covered_entries() {
        let fs = FakeFs::with(&["/src/a", "/src/a/x.txt", "/src/b", "/src/b/y.txt"]);
        let result = normalize_paths_to_sync(
            &fs,
            Path::new("/src"),
            &[rel("a/gone.txt"), rel("a/x.txt"), rel("b/y.txt"), rel("b/y.txt")],
        );
        assert_eq!(result, vec![rel("a"), rel("b/y.txt")]);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let fs = FakeFs::with(&[]);
        assert!(normalize_paths_to_sync(&fs, Path::new("/src"), &[]).is_empty());
    }

    #[test]
    fn normalization_is_idempotent() {
        let fs = FakeFs::with(&["/src/a", "/src/a/b", "/src/c"]);
        let once = normalize_paths_to_sync(
            &fs,
            Path::new("/src"),
            &[rel("a/b/gone"), rel("c/gone"), rel("a/b")],
        );
        let twice = normalize_paths_to_sync(&fs, Path::new("/src"), &once);
        assert_eq!(once, twice);
    }
}
