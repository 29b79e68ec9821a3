//! Glob pattern value objects
//!
//! Patterns match a whole `StackPath`: `*` stays within one segment and a
//! `**` component spans any number of directories (including none).
//! Brace groups are expanded before a `GlobPattern` is built.

use std::fmt;

use glob::{MatchOptions, Pattern};

use crate::domain::services::brace::expand_braces;
use crate::error::{StackError, StackResult};

use super::StackPath;

/// Options shared by pattern matching and filesystem selection
pub const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A single compiled, brace-free glob pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobPattern {
    source: String,
    matcher: Pattern,
}

impl GlobPattern {
    /// Compile a pattern that has already been brace-expanded.
    ///
    /// A leading `./` and trailing slashes are stripped so selection
    /// patterns like `stacks/dev/` match the directory itself.
    pub fn new(pattern: &str) -> StackResult<Self> {
        let normalized = normalize(pattern);
        let matcher = Pattern::new(&normalized).map_err(|e| StackError::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.msg.to_string(),
        })?;

        Ok(Self {
            source: normalized,
            matcher,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// True when the pattern matches the entire path
    pub fn matches(&self, path: &StackPath) -> bool {
        self.matcher.matches_with(path.as_str(), MATCH_OPTIONS)
    }
}

impl fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn normalize(pattern: &str) -> String {
    let trimmed = pattern.trim();
    let without_dot = trimmed.strip_prefix("./").unwrap_or(trimmed);
    let without_slash = without_dot.trim_end_matches('/');
    if without_slash.is_empty() {
        without_dot.to_string()
    } else {
        without_slash.to_string()
    }
}

/// An ordered list of patterns built from raw (possibly braced) inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet {
    patterns: Vec<GlobPattern>,
}

impl PatternSet {
    /// Empty set (matches nothing)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Expand braces in every raw pattern and compile the results.
    ///
    /// Order follows the input, then brace alternatives left to right.
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> StackResult<Self> {
        let mut patterns = Vec::new();
        for pattern in raw {
            for expanded in expand_braces(pattern.as_ref())? {
                patterns.push(GlobPattern::new(&expanded)?);
            }
        }
        Ok(Self { patterns })
    }

    /// Index of the first pattern that matches `path`
    pub fn first_match(&self, path: &StackPath) -> Option<usize> {
        self.patterns.iter().position(|p| p.matches(path))
    }

    pub fn matches_any(&self, path: &StackPath) -> bool {
        self.first_match(path).is_some()
    }

    /// Append another set after this one
    pub fn chain(mut self, other: PatternSet) -> Self {
        self.patterns.extend(other.patterns);
        self
    }

    pub fn get(&self, index: usize) -> Option<&GlobPattern> {
        self.patterns.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GlobPattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
