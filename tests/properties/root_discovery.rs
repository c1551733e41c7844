//! Property tests for upward project root discovery.

use std::path::PathBuf;

use proptest::prelude::*;

use crules::domain::ports::FileSystem;
use crules::infrastructure::MemoryFs;
use crules::ProjectRootLocator;

fn segments() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z]{1,6}", 1..=6)
}

fn join(parts: &[String]) -> PathBuf {
    let mut path = PathBuf::from("/");
    path.extend(parts);
    path
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the nearest ancestor carrying the marker wins.
    #[test]
    fn property_nearest_marked_ancestor_wins(
        parts in segments(),
        marks in proptest::collection::vec(any::<bool>(), 7),
    ) {
        let fs = MemoryFs::new();
        let start = join(&parts);
        fs.add_dir(&start);

        let mut expected = None;
        for depth in 0..=parts.len() {
            if marks[depth] {
                let dir = join(&parts[..depth]);
                fs.add_dir(dir.join(".crules"));
                expected = Some(dir);
            }
        }

        let found = ProjectRootLocator::new(&fs).locate(&start).unwrap();
        prop_assert_eq!(found.map(|root| root.path().to_path_buf()), expected);
    }

    /// PROPERTY: discovery never writes and gives the same answer twice.
    #[test]
    fn property_discovery_is_read_only_and_stable(
        parts in segments(),
        marker_depth in 0usize..6,
    ) {
        let fs = MemoryFs::new();
        let start = join(&parts);
        fs.add_dir(&start);
        let depth = marker_depth.min(parts.len());
        fs.add_dir(join(&parts[..depth]).join(".crules"));

        let locator = ProjectRootLocator::new(&fs);
        let first = locator.locate(&start).unwrap();
        let second = locator.locate(&start).unwrap();

        prop_assert_eq!(first, second);
        prop_assert_eq!(fs.mutation_count(), 0);
    }

    /// PROPERTY: a marker that is a plain file does not mark a root.
    #[test]
    fn property_marker_file_is_ignored(parts in segments()) {
        let fs = MemoryFs::new();
        let start = join(&parts);
        fs.add_dir(&start);
        fs.add_file(start.join(".crules"), "");

        prop_assert!(fs.is_file(&start.join(".crules")));
        prop_assert_eq!(ProjectRootLocator::new(&fs).locate(&start).unwrap(), None);
    }
}
