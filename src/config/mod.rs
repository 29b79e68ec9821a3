//! Configuration module for stacksort
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (pipeline inputs)
//! 3. Root config (`.stacksort.toml` in the stacks root)
//! 4. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{
    env_input, parse_bool, with_env_overrides, ConfigWarning, CONFIG_FILE_NAME,
    ENV_CHANGED_FILES, ENV_CORE_PATTERNS, ENV_GITHUB_OUTPUT, ENV_IGNORE_PATTERNS,
    ENV_OVERRIDE_CORE_PATTERNS, ENV_STACKS_ROOT, ENV_STACK_SELECTION, ENV_STACK_VALIDATOR,
};
pub use types::{Config, EnvironmentsConfig, PatternsConfig, ResolverConfig, ValidatorConfig};
