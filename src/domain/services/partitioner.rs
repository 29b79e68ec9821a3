//! Core/App Partitioner
//!
//! Splits stacks into "core" stacks (matched by an ordered pattern list,
//! deployed first) and "app" stacks (everything else, deployed in
//! parallel). Input order is preserved in both outputs.

use serde::Serialize;

use crate::domain::value_objects::{GlobPattern, PatternSet, StackPath};
use crate::error::StackResult;

/// Built-in core patterns, in priority order
pub const DEFAULT_CORE_PATTERNS: &[&str] = &[
    "**/remote-state",
    "**/networking-data",
    "**/networking",
    "**/dns",
    "**/certificates",
    "**/load-balancing-*-data",
    "**/load-balancing-*",
    "**/iam",
    "**/app-common",
    "**/datadog-common",
    "**/databases",
    "**/rds-bastion",
    "**/*-data",
];

/// The resolved, ordered core pattern list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorePatterns {
    patterns: PatternSet,
}

impl CorePatterns {
    /// The built-in list
    pub fn defaults() -> Self {
        // The built-in patterns contain no braces and are valid globs.
        let patterns = PatternSet::parse(DEFAULT_CORE_PATTERNS).unwrap_or_default();
        Self { patterns }
    }

    /// Combine the built-in list with caller patterns.
    ///
    /// With `override_defaults` the caller patterns are the whole list;
    /// otherwise the defaults come first and the caller patterns follow.
    pub fn resolve<S: AsRef<str>>(custom: &[S], override_defaults: bool) -> StackResult<Self> {
        let custom = PatternSet::parse(custom)?;
        let patterns = if override_defaults {
            custom
        } else {
            Self::defaults().patterns.chain(custom)
        };
        Ok(Self { patterns })
    }

    pub fn from_set(patterns: PatternSet) -> Self {
        Self { patterns }
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// Index of the first pattern matching `path`
    pub fn first_match(&self, path: &StackPath) -> Option<usize> {
        self.patterns.first_match(path)
    }
}

/// Result of partitioning one environment's stacks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Partition {
    pub core: Vec<StackPath>,
    pub apps: Vec<StackPath>,
}

impl Partition {
    /// Both lists merged and sorted
    pub fn all_sorted(&self) -> Vec<StackPath> {
        let mut all: Vec<StackPath> = self.core.iter().chain(&self.apps).cloned().collect();
        all.sort();
        all.dedup();
        all
    }

    pub fn is_empty(&self) -> bool {
        self.core.is_empty() && self.apps.is_empty()
    }
}

/// Split `paths` into core and app stacks.
pub fn partition(paths: &[StackPath], core: &CorePatterns) -> Partition {
    let mut result = Partition::default();
    for path in paths {
        match core.first_match(path) {
            Some(index) => {
                let pattern = core
                    .patterns()
                    .get(index)
                    .map(GlobPattern::as_str)
                    .unwrap_or_default();
                tracing::debug!(stack = %path, pattern, "core stack");
                result.core.push(path.clone());
            }
            None => {
                tracing::debug!(stack = %path, "app stack");
                result.apps.push(path.clone());
            }
        }
    }
    result
}
