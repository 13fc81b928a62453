//! Property tests for path normalization.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use proptest::prelude::*;

use syncwatch::domain::ports::FileSystem;
use syncwatch::domain::services::normalize_paths_to_sync;
use syncwatch::PendingPath;

const BASE: &str = "/watch";

/// In-memory tree: every listed entry exists together with its ancestors.
struct TreeFs(HashSet<PathBuf>);

impl TreeFs {
    fn new(entries: &[PendingPath]) -> Self {
        let mut existing = HashSet::new();
        existing.insert(PathBuf::from(BASE));
        for entry in entries {
            let mut current = entry.clone();
            while !current.is_root() {
                existing.insert(current.resolve(Path::new(BASE)));
                current = current.parent();
            }
        }
        Self(existing)
    }
}

impl FileSystem for TreeFs {
    fn exists(&self, path: &Path) -> bool {
        self.0.contains(path)
    }
}

fn pending_path() -> impl Strategy<Value = PendingPath> {
    proptest::collection::vec(prop_oneof![Just("x"), Just("y"), Just("z")], 1..=4)
        .prop_map(|segments| PendingPath::new(segments.join("/")).unwrap())
}

fn paths() -> impl Strategy<Value = Vec<PendingPath>> {
    proptest::collection::vec(pending_path(), 0..24)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Normalizing twice gives the same list as normalizing once.
    #[test]
    fn property_normalize_is_idempotent(existing in paths(), input in paths()) {
        let fs = TreeFs::new(&existing);
        let once = normalize_paths_to_sync(&fs, Path::new(BASE), &input);
        let twice = normalize_paths_to_sync(&fs, Path::new(BASE), &once);
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: Output is either `[Root]` or existing, non-nested paths.
    #[test]
    fn property_output_shape(existing in paths(), input in paths()) {
        let fs = TreeFs::new(&existing);
        let output = normalize_paths_to_sync(&fs, Path::new(BASE), &input);

        if output.iter().any(PendingPath::is_root) {
            prop_assert_eq!(output, vec![PendingPath::Root]);
        } else {
            for path in &output {
                prop_assert!(fs.exists(&path.resolve(Path::new(BASE))));
                prop_assert!(!output.iter().any(|other| other.is_ancestor_of(path)));
            }
        }
    }

    /// PROPERTY: Every input path is covered by some output path.
    #[test]
    fn property_inputs_stay_covered(existing in paths(), input in paths()) {
        let fs = TreeFs::new(&existing);
        let output = normalize_paths_to_sync(&fs, Path::new(BASE), &input);

        for path in &input {
            let covered = output.contains(path) || output.iter().any(|o| o.is_ancestor_of(path));
            prop_assert!(covered, "{} is not covered by {:?}", path, output);
        }
    }
}
