//! Command handlers for the stacksort binary

pub mod classify;
pub mod expand;
pub mod inspect;

use std::path::PathBuf;

use anyhow::{Context, Result};

use stacksort::config::{env_input, Config, ENV_STACKS_ROOT};
use stacksort::domain::services::parse_input_list;
use stacksort::presentation::SharedArgs;

/// Resolve the stacks root and the effective configuration.
///
/// Precedence: CLI flags, then environment variables, then
/// `.stacksort.toml` in the root, then built-in defaults.
pub fn load_settings(args: &SharedArgs) -> Result<(PathBuf, Config)> {
    let root = args
        .root
        .clone()
        .or_else(|| env_input(ENV_STACKS_ROOT).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));

    if !root.is_dir() {
        tracing::warn!(root = %root.display(), "stacks root is not a directory");
    }

    let mut config = Config::load_or_default(&root)
        .with_context(|| format!("loading configuration from {}", root.display()))?
        .with_env_overrides();

    if let Some(raw) = &args.ignore {
        config.patterns.ignore = parse_input_list("--ignore", raw);
    }
    if let Some(raw) = &args.core_patterns {
        config.patterns.core = parse_input_list("--core-patterns", raw);
    }
    if let Some(override_core) = args.override_core_patterns {
        config.patterns.override_core = override_core;
    }
    if let Some(mode) = args.validator {
        config.validator.mode = mode;
    }

    tracing::debug!(
        root = %root.display(),
        validator = %config.validator.mode,
        ignore = config.patterns.ignore.len(),
        core = config.patterns.core.len(),
        override_core = config.patterns.override_core,
        "effective settings"
    );

    Ok((root, config))
}
