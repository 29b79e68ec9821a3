//! Output contracts (OUTPUT-001 through OUTPUT-004)
//!
//! Downstream jobs read these keys by name, so their shape never changes.

use crate::common::*;
use crate::assert_stacks;

/// CONTRACT OUTPUT-001: Every key is always emitted, in a fixed order
mod key_set {
    use super::*;

    #[test]
    fn contract_all_keys_emitted_even_when_empty() {
        let env = TestEnv::builder().build();

        let result = env.run(&["classify"]);

        assert!(result.is_success(), "stderr: {}", result.stderr);
        assert_eq!(
            result.stdout,
            "dev-core-stacks=[]\n\
             dev-apps-stacks=[]\n\
             prod-core-stacks=[]\n\
             prod-apps-stacks=[]\n\
             all-dev-stacks=[]\n\
             all-prod-stacks=[]\n\
             all-stacks=[]\n"
        );
    }
}

/// CONTRACT OUTPUT-002: Values are single-line JSON arrays of strings
mod value_shape {
    use super::*;

    #[test]
    fn contract_values_are_compact_json_arrays() {
        let env = TestEnv::builder().with_stacks(STANDARD_STACKS).build();

        let result = env.run(&["classify", "--select", "stacks/*/*"]);

        assert!(result.is_success(), "stderr: {}", result.stderr);
        for line in result.stdout.lines() {
            let (_, value) = line.split_once('=').expect("key=value line");
            assert!(!value.contains(", "), "not compact: {}", line);
            let parsed: Vec<String> = serde_json::from_str(value)
                .unwrap_or_else(|e| panic!("not a JSON string array: {} ({})", line, e));
            let mut sorted = parsed.clone();
            sorted.sort();
            sorted.dedup();
            // Group lists keep discovery order, which is sorted for globs
            assert_eq!(parsed, sorted, "unsorted or duplicated: {}", line);
        }
    }
}

/// CONTRACT OUTPUT-003: Aggregates are unions of the group lists
mod aggregates {
    use super::*;

    #[test]
    fn contract_aggregates_are_unions() {
        let env = TestEnv::builder().with_stacks(STANDARD_STACKS).build();

        let result = env.run(&["classify", "--select", "stacks/**"]);
        assert!(result.is_success(), "stderr: {}", result.stderr);

        let union = |keys: &[&str]| {
            let mut all: Vec<String> = keys.iter().flat_map(|k| result.output_list(k)).collect();
            all.sort();
            all
        };

        assert_eq!(
            result.output_list("all-dev-stacks"),
            union(&["dev-core-stacks", "dev-apps-stacks"])
        );
        assert_eq!(
            result.output_list("all-prod-stacks"),
            union(&["prod-core-stacks", "prod-apps-stacks"])
        );
        assert_eq!(
            result.output_list("all-stacks"),
            union(&["all-dev-stacks", "all-prod-stacks"])
        );
        assert_eq!(result.output_list("all-stacks").len(), STANDARD_STACKS.len());
    }
}

/// CONTRACT OUTPUT-004: Paths are relative to the stacks root with `/` separators
mod path_form {
    use super::*;

    #[test]
    fn contract_paths_are_root_relative() {
        let env = TestEnv::builder().with_stack("infra/stacks/dev/app").build();
        let root = env.path("infra");

        let result = env.run(&[
            "classify",
            "--root",
            root.to_str().unwrap(),
            "--changed-files",
            "./stacks/dev/app/backend.tf",
        ]);

        assert!(result.is_success(), "stderr: {}", result.stderr);
        assert_stacks!(result, "all-stacks", ["stacks/dev/app"]);
    }
}
