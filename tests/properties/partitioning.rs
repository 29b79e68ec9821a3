//! Property tests for core/app partitioning and environment classification.

use proptest::prelude::*;

use stacksort::domain::services::{
    partition, CorePatterns, EnvironmentAliases, EnvironmentClassifier, DEFAULT_DEV_ALIASES,
    DEFAULT_PROD_ALIASES,
};
use stacksort::{Environment, StackPath};

fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("dev".to_string()),
        Just("prod".to_string()),
        Just("networking".to_string()),
        Just("iam".to_string()),
        Just("app-x".to_string()),
        proptest::string::string_regex("[a-z0-9-]{1,10}").unwrap(),
    ]
}

fn stack_path() -> impl Strategy<Value = StackPath> {
    proptest::collection::vec(segment(), 1..=4)
        .prop_map(|segments| StackPath::new(&segments.join("/")).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every stack lands in exactly one group, in input order.
    #[test]
    fn property_partition_is_exhaustive_and_ordered(
        paths in proptest::collection::vec(stack_path(), 0..=12)
    ) {
        let core = CorePatterns::defaults();
        let result = partition(&paths, &core);

        prop_assert_eq!(result.core.len() + result.apps.len(), paths.len());
        let expected_core: Vec<_> = paths
            .iter()
            .filter(|p| core.first_match(p).is_some())
            .cloned()
            .collect();
        prop_assert_eq!(result.core, expected_core);
    }

    /// PROPERTY: Extending the defaults never moves a core stack to apps.
    #[test]
    fn property_extending_core_patterns_is_monotonic(
        paths in proptest::collection::vec(stack_path(), 0..=12),
        extra in segment(),
    ) {
        let defaults = partition(&paths, &CorePatterns::defaults());
        let extended_patterns = CorePatterns::resolve(&[format!("**/{}", extra)], false).unwrap();
        let extended = partition(&paths, &extended_patterns);

        for stack in &defaults.core {
            prop_assert!(extended.core.contains(stack));
        }
    }

    /// PROPERTY: The first alias component decides the environment.
    #[test]
    fn property_first_alias_wins(
        path in stack_path()
    ) {
        let classifier = EnvironmentClassifier::new(EnvironmentAliases::new(
            DEFAULT_DEV_ALIASES,
            DEFAULT_PROD_ALIASES,
        ));
        let expected = path
            .components()
            .find_map(|c| {
                if DEFAULT_DEV_ALIASES.contains(&c) {
                    Some(Environment::Dev)
                } else if DEFAULT_PROD_ALIASES.contains(&c) {
                    Some(Environment::Prod)
                } else {
                    None
                }
            })
            .unwrap_or(Environment::Unknown);

        prop_assert_eq!(classifier.classify(&path), expected);
    }
}
