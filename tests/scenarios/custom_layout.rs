//! Scenario: Repository with Its Own Conventions
//!
//! Journey: A team whose stacks use other names configures stacksort.
//!
//! Steps:
//! 1. Environments are called `staging` and `live`
//! 2. Stacks are detected by any `.tf` file instead of a backend block
//! 3. Core stacks are named `platform-*`, replacing the built-in list
//! 4. A pipeline input still overrides the config file
//!
//! Success Criteria:
//! - Config keys drive classification
//! - Environment variables win over the config file
//! - Unknown config keys warn without failing

use crate::assert_stacks;
use crate::common::*;

const CONFIG: &str = r#"
[patterns]
core = ["**/platform-*"]
override_core = true

[validator]
mode = "has-config"

[environments]
dev = ["staging"]
prod = ["live"]
"#;

fn env() -> TestEnv {
    TestEnv::builder()
        .with_module("envs/staging/platform-network")
        .with_module("envs/staging/checkout")
        .with_module("envs/live/platform-network")
        .with_module("envs/live/checkout")
        .with_module("envs/live/networking")
        .with_dir("envs/live/empty")
        .with_config(CONFIG)
        .build()
}

/// SCENARIO: Config file describes the layout
#[test]
fn scenario_config_driven_layout() {
    let env = env();

    let result = env.run_with_env(&[], &[("STACK_SELECTION", "envs/*/*")]);

    assert!(result.is_success(), "stderr: {}", result.stderr);
    assert_stacks!(result, "dev-core-stacks", ["envs/staging/platform-network"]);
    assert_stacks!(result, "dev-apps-stacks", ["envs/staging/checkout"]);
    assert_stacks!(result, "prod-core-stacks", ["envs/live/platform-network"]);
    assert_stacks!(
        result,
        "prod-apps-stacks",
        ["envs/live/checkout", "envs/live/networking"]
    );
}

/// SCENARIO: Pipeline input restores the built-in core list
#[test]
fn scenario_env_overrides_config() {
    let env = env();

    let result = env.run_with_env(
        &[],
        &[
            ("STACK_SELECTION", "envs/live/*"),
            ("OVERRIDE_CORE_PATTERNS", "false"),
        ],
    );

    assert!(result.is_success(), "stderr: {}", result.stderr);
    assert_stacks!(
        result,
        "prod-core-stacks",
        ["envs/live/networking", "envs/live/platform-network"]
    );
    assert_stacks!(result, "prod-apps-stacks", ["envs/live/checkout"]);
}

/// SCENARIO: A misspelled key is reported but does not fail the run
#[test]
fn scenario_unknown_config_key_warns() {
    let env = TestEnv::builder()
        .with_stack("stacks/dev/app")
        .with_config("[patterns]\nignroe = [\"stacks/dev/*\"]\n")
        .build();

    let result = env.run(&["classify", "--select", "stacks/dev/*"]);

    assert!(result.is_success(), "stderr: {}", result.stderr);
    assert_stacks!(result, "all-stacks", ["stacks/dev/app"]);
    assert!(
        result.stderr.contains("unknown config key 'ignroe'"),
        "stderr: {}",
        result.stderr
    );
    assert!(result.stderr.contains("did you mean 'ignore'?"), "stderr: {}", result.stderr);
}
