//! Scenario: Pull Request in an Infrastructure Monorepo
//!
//! Journey: A pull request touches stacks, shared boilerplate and a module.
//!
//! Steps:
//! 1. The changed-files action hands over a JSON array of paths
//! 2. Boilerplate edits count for the stack that owns them
//! 3. Module edits are not stacks and are left out
//! 4. Results are appended to the step output file
//! 5. A later step reads the deployment groups back
//!
//! Success Criteria:
//! - Core stacks are separated from app stacks per environment
//! - Nothing is written to stdout when an output file is set
//! - Existing output lines are kept

use crate::common::*;
use crate::{assert_output_contains, assert_stacks};

/// SCENARIO: PR changes boilerplate, stacks and a module
#[test]
fn scenario_pull_request_changes() {
    let env = TestEnv::builder()
        .with_stacks(STANDARD_STACKS)
        .with_file(
            "stacks/dev/app-x/.boilerplate/providers.tf",
            BOILERPLATE_PROVIDERS,
        )
        .with_module("modules/vpc")
        .with_file("README.md", "# infra\n")
        .build();
    env.write_file("github_output", "changed=true\n");
    let output_file = env.path("github_output");

    let changed = serde_json::to_string(&[
        "README.md",
        "modules/vpc/main.tf",
        "stacks/dev/app-x/.boilerplate/providers.tf",
        "stacks/prod/networking/backend.tf",
        "stacks/prod/networking/variables.tf",
        "stacks/prod/app-x/main.tf",
    ])
    .unwrap();

    // Step 1: the pipeline step runs without a subcommand
    let result = env.run_with_env(
        &[],
        &[
            ("CHANGED_FILES", changed.as_str()),
            ("GITHUB_OUTPUT", output_file.to_str().unwrap()),
        ],
    );

    assert!(result.is_success(), "stderr: {}", result.stderr);
    assert!(result.stdout.is_empty(), "stdout: {}", result.stdout);

    // Step 2: a later step reads the output file
    let content = env.read_file("github_output");
    assert!(content.starts_with("changed=true\n"));
    assert_eq!(parse_output_list(&content, "dev-core-stacks"), Vec::<String>::new());
    assert_eq!(parse_output_list(&content, "dev-apps-stacks"), vec!["stacks/dev/app-x"]);
    assert_eq!(
        parse_output_list(&content, "prod-core-stacks"),
        vec!["stacks/prod/networking"]
    );
    assert_eq!(parse_output_list(&content, "prod-apps-stacks"), vec!["stacks/prod/app-x"]);
    assert_eq!(
        parse_output_list(&content, "all-stacks"),
        vec!["stacks/dev/app-x", "stacks/prod/app-x", "stacks/prod/networking"]
    );
}

/// SCENARIO: PR with no infrastructure changes still emits every key
#[test]
fn scenario_pull_request_without_stacks() {
    let env = TestEnv::builder()
        .with_stacks(STANDARD_STACKS)
        .with_file("docs/runbook.md", "# runbook\n")
        .build();

    let result = env.run_with_env(&[], &[("CHANGED_FILES", "docs/runbook.md\nREADME.md")]);

    assert!(result.is_success(), "stderr: {}", result.stderr);
    assert_eq!(result.output_keys().len(), 7);
    assert_stacks!(result, "all-stacks", []);
}

/// SCENARIO: A typo in the ignore input fails the step with an annotation
#[test]
fn scenario_broken_ignore_input_fails_step() {
    let env = TestEnv::builder().with_stacks(STANDARD_STACKS).build();

    let result = env.run_with_env(
        &[],
        &[
            ("CHANGED_FILES", "stacks/dev/iam/backend.tf"),
            ("IGNORE_PATTERNS", "stacks/{dev,prod/legacy"),
            ("GITHUB_ACTIONS", "true"),
        ],
    );

    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.is_empty(), "stdout: {}", result.stdout);
    assert_output_contains!(result, "::error title=Invalid pattern::");
    assert_output_contains!(result, "unmatched '{' at position 7");
}
