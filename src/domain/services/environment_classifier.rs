//! Environment Classifier
//!
//! Assigns a stack to an environment by scanning its path components left
//! to right. Matching is case-insensitive and exact per component, so
//! `developer-tools` never counts as `dev`.

use crate::domain::value_objects::{Environment, StackPath};

/// Default component aliases for the dev environment
pub const DEFAULT_DEV_ALIASES: &[&str] = &["dev", "qa", "test"];

/// Default component aliases for the prod environment
pub const DEFAULT_PROD_ALIASES: &[&str] = &["prod"];

/// Alias sets per environment (stored lower-cased)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentAliases {
    dev: Vec<String>,
    prod: Vec<String>,
}

impl Default for EnvironmentAliases {
    fn default() -> Self {
        Self::new(DEFAULT_DEV_ALIASES, DEFAULT_PROD_ALIASES)
    }
}

impl EnvironmentAliases {
    pub fn new<S: AsRef<str>>(dev: &[S], prod: &[S]) -> Self {
        Self {
            dev: lower_all(dev),
            prod: lower_all(prod),
        }
    }

    pub fn dev(&self) -> &[String] {
        &self.dev
    }

    pub fn prod(&self) -> &[String] {
        &self.prod
    }

    fn lookup(&self, component: &str) -> Option<Environment> {
        let lowered = component.to_lowercase();
        if self.dev.contains(&lowered) {
            Some(Environment::Dev)
        } else if self.prod.contains(&lowered) {
            Some(Environment::Prod)
        } else {
            None
        }
    }
}

fn lower_all<S: AsRef<str>>(aliases: &[S]) -> Vec<String> {
    aliases
        .iter()
        .map(|alias| alias.as_ref().trim().to_lowercase())
        .filter(|alias| !alias.is_empty())
        .collect()
}

/// Classifies stack paths into environments
#[derive(Debug, Clone, Default)]
pub struct EnvironmentClassifier {
    aliases: EnvironmentAliases,
}

impl EnvironmentClassifier {
    pub fn new(aliases: EnvironmentAliases) -> Self {
        Self { aliases }
    }

    /// First component that is a known alias decides; otherwise `Unknown`.
    pub fn classify(&self, path: &StackPath) -> Environment {
        path.components()
            .find_map(|component| self.aliases.lookup(component))
            .unwrap_or(Environment::Unknown)
    }
}
