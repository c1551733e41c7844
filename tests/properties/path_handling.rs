//! Property tests for lexical path handling and name validation.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use crules::domain::services::{is_subpath, normalize_path, resolve_path};
use crules::domain::value_objects::validate_name;

fn component() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-z]{1,5}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
    ]
}

fn absolute_path() -> impl Strategy<Value = PathBuf> {
    proptest::collection::vec(component(), 0..8).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        path.extend(parts);
        path
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: normalization is idempotent.
    #[test]
    fn property_normalize_is_idempotent(path in absolute_path()) {
        let once = normalize_path(&path);
        prop_assert_eq!(normalize_path(&once), once.clone());
    }

    /// PROPERTY: normalized absolute paths contain no `.` or `..` components.
    #[test]
    fn property_normalized_has_no_dot_components(path in absolute_path()) {
        let normalized = normalize_path(&path);
        for part in normalized.components() {
            prop_assert!(!matches!(
                part,
                std::path::Component::CurDir | std::path::Component::ParentDir
            ));
        }
    }

    /// PROPERTY: joining a plain name onto a base stays under the base.
    #[test]
    fn property_resolved_child_is_subpath(base in absolute_path(), name in "[a-z]{1,8}") {
        let base = normalize_path(&base);
        let child = resolve_path(Path::new(&name), &base);
        prop_assert!(is_subpath(&child, &base));
    }

    /// PROPERTY: valid names never contain path separators or dots.
    #[test]
    fn property_valid_names_are_single_segments(name in "(?s).{0,16}") {
        if validate_name(&name) {
            prop_assert!(!name.is_empty());
            prop_assert!(!name.contains('/') && !name.contains('\\') && !name.contains('.'));
        }
    }
}
