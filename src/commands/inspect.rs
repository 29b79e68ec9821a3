//! Inspect command handler
//!
//! Explains, per directory, each decision the classify pass would make.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use stacksort::domain::services::{CorePatterns, EnvironmentClassifier};
use stacksort::domain::value_objects::{Environment, PatternSet, StackPath};
use stacksort::infrastructure::LocalFs;
use stacksort::presentation::{factory, SharedArgs};
use stacksort::SkipReason;

use super::load_settings;

/// What classify would do with one directory
#[derive(Debug, Serialize)]
struct Inspection {
    path: StackPath,
    is_stack: bool,
    ignored: bool,
    environment: Environment,
    /// `core` or `app`
    group: &'static str,
    /// First core pattern that matched
    core_pattern: Option<String>,
    /// Why classify would skip it
    skip: Option<SkipReason>,
}

impl Inspection {
    fn verdict(&self) -> String {
        match self.skip {
            Some(reason) => format!("skipped ({})", reason),
            None => match &self.core_pattern {
                Some(pattern) => format!("{} {} (matched {})", self.environment, self.group, pattern),
                None => format!("{} {}", self.environment, self.group),
            },
        }
    }
}

pub fn cmd_inspect(dirs: &[String], settings: &SharedArgs, json: bool) -> Result<()> {
    let (root, config) = load_settings(settings)?;

    let validator = factory::create_validator(LocalFs::new(), &config.validator);
    let ignore = PatternSet::parse(&config.patterns.ignore)?;
    let core = CorePatterns::resolve(&config.patterns.core, config.patterns.override_core)?;
    let classifier = EnvironmentClassifier::new(config.environments.aliases());

    let mut inspections = Vec::with_capacity(dirs.len());
    for raw in dirs {
        let path = StackPath::new(raw).with_context(|| format!("invalid stack path '{}'", raw))?;

        let is_stack = validator.is_stack(&root, &path);
        let ignored = ignore.matches_any(&path);
        let environment = classifier.classify(&path);
        let core_pattern = core
            .first_match(&path)
            .and_then(|index| core.patterns().get(index))
            .map(|pattern| pattern.as_str().to_string());

        let skip = if !is_stack {
            Some(SkipReason::NotAStack)
        } else if ignored {
            Some(SkipReason::Ignored)
        } else if !environment.is_known() {
            Some(SkipReason::UnknownEnvironment)
        } else {
            None
        };

        inspections.push(Inspection {
            path,
            is_stack,
            ignored,
            environment,
            group: if core_pattern.is_some() { "core" } else { "app" },
            core_pattern,
            skip,
        });
    }

    let mut stdout = std::io::stdout().lock();
    if json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&inspections)?)?;
    } else {
        for inspection in &inspections {
            writeln!(stdout, "{}: {}", inspection.path, inspection.verdict())?;
        }
    }
    Ok(())
}
