//! Configuration loading and environment overrides

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::policies::ValidatorMode;
use crate::domain::services::parse_input_list;
use crate::error::{StackError, StackResult};

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::Config;

/// Config file looked up in the stacks root
pub const CONFIG_FILE_NAME: &str = ".stacksort.toml";

pub const ENV_STACKS_ROOT: &str = "STACKS_ROOT";
pub const ENV_CHANGED_FILES: &str = "CHANGED_FILES";
pub const ENV_STACK_SELECTION: &str = "STACK_SELECTION";
pub const ENV_GITHUB_OUTPUT: &str = "GITHUB_OUTPUT";
pub const ENV_IGNORE_PATTERNS: &str = "IGNORE_PATTERNS";
pub const ENV_CORE_PATTERNS: &str = "CORE_PATTERNS";
pub const ENV_OVERRIDE_CORE_PATTERNS: &str = "OVERRIDE_CORE_PATTERNS";
pub const ENV_STACK_VALIDATOR: &str = "STACK_VALIDATOR";

const BOOL_VALUES: &[&str] = &["true", "false", "yes", "no", "1", "0"];

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> StackResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse TOML content; `path` is only used for reporting
pub fn parse_with_warnings(content: &str, path: &Path) -> StackResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| StackError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `.stacksort.toml` from `root`, falling back to defaults.
///
/// A present but malformed file is an error; unknown keys are logged.
pub fn load_or_default(root: &Path) -> StackResult<Config> {
    let path = root.join(CONFIG_FILE_NAME);
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let (config, warnings) = load_with_warnings(&path)?;
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }
    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Apply environment variable overrides.
///
/// `lookup` returns the raw value of a variable. Empty values count as
/// unset, matching how CI runners pass optional inputs.
pub fn with_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(raw) = get(ENV_IGNORE_PATTERNS) {
        config.patterns.ignore = parse_input_list(ENV_IGNORE_PATTERNS, &raw);
    }

    if let Some(raw) = get(ENV_CORE_PATTERNS) {
        config.patterns.core = parse_input_list(ENV_CORE_PATTERNS, &raw);
    }

    if let Some(raw) = get(ENV_OVERRIDE_CORE_PATTERNS) {
        config.patterns.override_core = EnvVarValidator::new(ENV_OVERRIDE_CORE_PATTERNS, BOOL_VALUES)
            .parse(raw.trim(), parse_bool, config.patterns.override_core);
    }

    if let Some(raw) = get(ENV_STACK_VALIDATOR) {
        config.validator.mode = EnvVarValidator::new(ENV_STACK_VALIDATOR, ValidatorMode::VALID_VALUES)
            .parse(raw.trim(), |s| s.parse().ok(), config.validator.mode);
    }

    config
}

/// Value of a pipeline input variable; empty counts as unset
pub fn env_input(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Lenient boolean used by CLI flags and env vars
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Some(true),
        "false" | "no" | "0" | "off" => Some(false),
        _ => None,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "patterns",
        "ignore",
        "core",
        "override_core",
        "validator",
        "mode",
        "marker",
        "extensions",
        "environments",
        "dev",
        "prod",
        "resolver",
        "marker_segment",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}
