//! Property tests for change coalescing.

use proptest::prelude::*;

use syncwatch::domain::services::ChangeCoalescer;
use syncwatch::{ChangeKind, PendingPath};

fn change_kind() -> impl Strategy<Value = ChangeKind> {
    prop_oneof![
        Just(ChangeKind::Added),
        Just(ChangeKind::Modified),
        Just(ChangeKind::Removed),
    ]
}

/// Short paths over a tiny alphabet so that ancestors collide often.
fn pending_path() -> impl Strategy<Value = PendingPath> {
    proptest::collection::vec(prop_oneof![Just("a"), Just("b"), Just("c")], 1..=4)
        .prop_map(|segments| PendingPath::new(segments.join("/")).unwrap())
}

fn changes() -> impl Strategy<Value = Vec<(ChangeKind, PendingPath)>> {
    proptest::collection::vec((change_kind(), pending_path()), 0..64)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: No pending path is an ancestor of another pending path.
    #[test]
    fn property_no_nested_pending_paths(input in changes(), max_paths in 1usize..16) {
        let mut coalescer = ChangeCoalescer::new(max_paths);
        for (kind, path) in input {
            coalescer.record_change(kind, path);
        }

        let pending: Vec<_> = coalescer.iter().cloned().collect();
        for a in &pending {
            for b in &pending {
                prop_assert!(!a.is_ancestor_of(b), "{} covers {}", a, b);
            }
        }
    }

    /// PROPERTY: Once the whole root is pending, nothing else ever is.
    #[test]
    fn property_root_absorbs_everything(input in changes(), max_paths in 1usize..16) {
        let mut coalescer = ChangeCoalescer::new(max_paths);
        for (kind, path) in input {
            coalescer.record_change(kind, path);
            if coalescer.is_full_sync() {
                prop_assert_eq!(coalescer.len(), 1);
            }
            prop_assert!(coalescer.len() <= max_paths.max(1));
        }
    }

    /// PROPERTY: Every recorded change stays covered until the next drain.
    #[test]
    fn property_changes_stay_covered(input in changes()) {
        let mut coalescer = ChangeCoalescer::new(1000);
        let mut expected = Vec::new();
        for (kind, path) in input {
            expected.push(match kind {
                ChangeKind::Removed => path.parent(),
                _ => path.clone(),
            });
            coalescer.record_change(kind, path);
        }

        for target in expected {
            let covered = coalescer.contains(&target)
                || coalescer.iter().any(|p| p.is_ancestor_of(&target));
            prop_assert!(covered, "{} is not covered", target);
        }
    }

    /// PROPERTY: Draining returns sorted paths and leaves nothing behind.
    #[test]
    fn property_drain_empties(input in changes()) {
        let mut coalescer = ChangeCoalescer::new(100);
        for (kind, path) in input {
            coalescer.record_change(kind, path);
        }

        let drained = coalescer.drain();
        let mut sorted = drained.clone();
        sorted.sort();
        prop_assert_eq!(drained, sorted);
        prop_assert!(coalescer.is_empty());
    }
}
