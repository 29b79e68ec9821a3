//! Classify Use Case
//!
//! Runs resolve → validate → ignore → environment → partition.

use crate::application::resolver::{files_to_dirs, resolve_selection};
use crate::domain::ports::{FileSystem, StackValidator};
use crate::domain::services::{partition, CorePatterns, EnvironmentClassifier};
use crate::domain::value_objects::{ByEnvironment, Environment, PatternSet, StackPath};
use crate::error::StackResult;

use super::options::ClassifyOptions;
use super::result::{ClassifyResult, SkipReason};

/// Classify use case - decides which stacks deploy, where and in which phase
pub struct ClassifyUseCase<FS, V>
where
    FS: FileSystem,
    V: StackValidator,
{
    fs: FS,
    validator: V,
}

impl<FS, V> ClassifyUseCase<FS, V>
where
    FS: FileSystem,
    V: StackValidator,
{
    pub fn new(fs: FS, validator: V) -> Self {
        Self { fs, validator }
    }

    /// Execute one classification pass.
    ///
    /// Pattern errors are fatal and reported before any directory is
    /// inspected. Individual directories never fail the pass; they are
    /// recorded as skipped instead.
    pub fn execute(&self, options: &ClassifyOptions) -> StackResult<ClassifyResult> {
        let ignore = PatternSet::parse(&options.ignore_patterns)?;
        let core = CorePatterns::resolve(&options.core_patterns, options.override_core_patterns)?;
        let classifier = EnvironmentClassifier::new(options.aliases.clone());

        let candidates = self.resolve_candidates(options)?;
        tracing::debug!(count = candidates.len(), "resolved candidate directories");

        let mut result = ClassifyResult::new();
        let mut by_env: ByEnvironment<Vec<StackPath>> = ByEnvironment::default();

        for candidate in candidates {
            if !self.validator.is_stack(&options.root, &candidate) {
                tracing::warn!(stack = %candidate, "skipping: not a stack");
                result.add_skipped(candidate, SkipReason::NotAStack);
                continue;
            }

            if ignore.matches_any(&candidate) {
                tracing::warn!(stack = %candidate, "skipping: matches ignore pattern");
                result.add_skipped(candidate, SkipReason::Ignored);
                continue;
            }

            let env = classifier.classify(&candidate);
            if env == Environment::Unknown {
                tracing::warn!(stack = %candidate, "skipping: unknown environment");
                result.add_skipped(candidate.clone(), SkipReason::UnknownEnvironment);
            }
            by_env.get_mut(env).push(candidate);
        }

        result.stacks = by_env.map(|_, stacks| partition(&stacks, &core));

        tracing::info!(
            dev = result.stacks.dev.core.len() + result.stacks.dev.apps.len(),
            prod = result.stacks.prod.core.len() + result.stacks.prod.apps.len(),
            skipped = result.skipped.len(),
            "classification complete"
        );

        Ok(result)
    }

    fn resolve_candidates(&self, options: &ClassifyOptions) -> StackResult<Vec<StackPath>> {
        if options.uses_selection() {
            tracing::debug!(patterns = options.selection.len(), "resolving stack selection");
            resolve_selection(&self.fs, &options.root, &options.selection)
        } else {
            tracing::debug!(files = options.changed_files.len(), "resolving changed files");
            Ok(files_to_dirs(&options.changed_files, &options.marker_segment))
        }
    }
}
