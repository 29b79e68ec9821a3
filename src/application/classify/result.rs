//! Classify result types

use serde::Serialize;

use crate::domain::services::Partition;
use crate::domain::value_objects::{ByEnvironment, Environment, StackPath};

/// Reason why a candidate directory was not deployed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// Directory does not look like a deployable stack
    NotAStack,
    /// Matched an ignore pattern
    Ignored,
    /// No path component names a known environment
    UnknownEnvironment,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NotAStack => write!(f, "not a stack"),
            SkipReason::Ignored => write!(f, "ignored"),
            SkipReason::UnknownEnvironment => write!(f, "unknown environment"),
        }
    }
}

/// A candidate directory that was skipped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedStack {
    pub path: StackPath,
    pub reason: SkipReason,
}

impl SkippedStack {
    pub fn new(path: StackPath, reason: SkipReason) -> Self {
        Self { path, reason }
    }
}

/// Result of a classification pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassifyResult {
    /// Core and app stacks per environment; `unknown` is never deployed
    pub stacks: ByEnvironment<Partition>,
    /// Candidates that were dropped, in candidate order
    pub skipped: Vec<SkippedStack>,
}

impl ClassifyResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a skipped directory
    pub fn add_skipped(&mut self, path: StackPath, reason: SkipReason) {
        self.skipped.push(SkippedStack::new(path, reason));
    }

    pub fn partition(&self, env: Environment) -> &Partition {
        self.stacks.get(env)
    }

    /// Every dev stack, sorted
    pub fn all_dev(&self) -> Vec<StackPath> {
        self.stacks.dev.all_sorted()
    }

    /// Every prod stack, sorted
    pub fn all_prod(&self) -> Vec<StackPath> {
        self.stacks.prod.all_sorted()
    }

    /// Every deployable stack, sorted
    pub fn all(&self) -> Vec<StackPath> {
        let mut all: Vec<StackPath> = self.all_dev().into_iter().chain(self.all_prod()).collect();
        all.sort();
        all.dedup();
        all
    }

    /// Number of stacks that will be deployed
    pub fn deploy_count(&self) -> usize {
        Environment::DEPLOYABLE
            .iter()
            .map(|env| {
                let partition = self.stacks.get(*env);
                partition.core.len() + partition.apps.len()
            })
            .sum()
    }

    pub fn has_changes(&self) -> bool {
        self.deploy_count() > 0
    }
}
