//! Property tests for the deploy overwrite policy.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use crules::domain::ports::{RenderContext, VerbatimRenderer};
use crules::domain::services::{DeployAction, DeployMode, DeployPair, Deployer};
use crules::infrastructure::MemoryFs;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: an existing destination changes only when forced.
    #[test]
    fn property_existing_destination_changes_only_when_forced(
        source in "[a-z ]{0,20}",
        existing in proptest::option::of("[a-z ]{0,20}"),
        force in any::<bool>(),
    ) {
        let fs = MemoryFs::new();
        fs.add_file("/t/rules/a.md", &source);
        fs.add_dir("/p/.cursor/rules");
        if let Some(existing) = &existing {
            fs.add_file("/p/.cursor/rules/a.mdc", existing);
        }
        let pair = DeployPair {
            source: PathBuf::from("/t/rules/a.md"),
            destination: PathBuf::from("/p/.cursor/rules/a.mdc"),
            mode: DeployMode::Copy,
        };

        let renderer = VerbatimRenderer;
        let action = Deployer::new(&fs, &renderer)
            .deploy_one(&pair, &RenderContext::new(), force)
            .unwrap();

        let content = fs.content(Path::new("/p/.cursor/rules/a.mdc"));
        match existing {
            Some(existing) if !force => {
                prop_assert_eq!(action, DeployAction::Skipped);
                prop_assert_eq!(content, Some(existing));
                prop_assert_eq!(fs.mutation_count(), 0);
            }
            _ => {
                prop_assert_eq!(action, DeployAction::Written);
                prop_assert_eq!(content, Some(source));
            }
        }
    }
}
