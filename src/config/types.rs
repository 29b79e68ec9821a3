//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::resolver::DEFAULT_MARKER_SEGMENT;
use crate::domain::policies::{ValidatorMode, DEFAULT_BACKEND_MARKER, DEFAULT_CONFIG_EXTENSIONS};
use crate::domain::services::{EnvironmentAliases, DEFAULT_DEV_ALIASES, DEFAULT_PROD_ALIASES};
use crate::error::StackResult;

use super::loader::{self, ConfigWarning};

/// Pattern lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PatternsConfig {
    /// Stacks matching any of these are never deployed
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Extra core patterns
    #[serde(default)]
    pub core: Vec<String>,

    /// Replace the built-in core patterns instead of extending them
    #[serde(default)]
    pub override_core: bool,
}

/// Stack detection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    #[serde(default)]
    pub mode: ValidatorMode,

    #[serde(default = "default_marker")]
    pub marker: String,

    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            mode: ValidatorMode::default(),
            marker: default_marker(),
            extensions: default_extensions(),
        }
    }
}

fn default_marker() -> String {
    DEFAULT_BACKEND_MARKER.to_string()
}

fn default_extensions() -> Vec<String> {
    to_strings(DEFAULT_CONFIG_EXTENSIONS)
}

/// Path components naming each environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentsConfig {
    #[serde(default = "default_dev")]
    pub dev: Vec<String>,

    #[serde(default = "default_prod")]
    pub prod: Vec<String>,
}

impl Default for EnvironmentsConfig {
    fn default() -> Self {
        Self {
            dev: default_dev(),
            prod: default_prod(),
        }
    }
}

impl EnvironmentsConfig {
    pub fn aliases(&self) -> EnvironmentAliases {
        EnvironmentAliases::new(&self.dev, &self.prod)
    }
}

fn default_dev() -> Vec<String> {
    to_strings(DEFAULT_DEV_ALIASES)
}

fn default_prod() -> Vec<String> {
    to_strings(DEFAULT_PROD_ALIASES)
}

/// Changed-file resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    #[serde(default = "default_marker_segment")]
    pub marker_segment: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            marker_segment: default_marker_segment(),
        }
    }
}

fn default_marker_segment() -> String {
    DEFAULT_MARKER_SEGMENT.to_string()
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub patterns: PatternsConfig,

    #[serde(default)]
    pub validator: ValidatorConfig,

    #[serde(default)]
    pub environments: EnvironmentsConfig,

    #[serde(default)]
    pub resolver: ResolverConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> StackResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> StackResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `.stacksort.toml` from the root, or defaults when absent
    pub fn load_or_default(root: &Path) -> StackResult<Self> {
        loader::load_or_default(root)
    }

    /// Apply environment variable overrides
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |name| std::env::var(name).ok())
    }
}
