//! Classify options

use std::path::PathBuf;

use crate::application::resolver::DEFAULT_MARKER_SEGMENT;
use crate::domain::services::EnvironmentAliases;

/// Inputs for a classification pass
#[derive(Debug, Clone)]
pub struct ClassifyOptions {
    /// Repository root all stack paths are relative to
    pub root: PathBuf,
    /// Changed files (used when `selection` is empty)
    pub changed_files: Vec<String>,
    /// Glob selection; takes precedence over changed files
    pub selection: Vec<String>,
    /// Stacks matching any of these are skipped
    pub ignore_patterns: Vec<String>,
    /// Extra core patterns
    pub core_patterns: Vec<String>,
    /// Use `core_patterns` instead of the built-in list
    pub override_core_patterns: bool,
    pub marker_segment: String,
    pub aliases: EnvironmentAliases,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            changed_files: Vec::new(),
            selection: Vec::new(),
            ignore_patterns: Vec::new(),
            core_patterns: Vec::new(),
            override_core_patterns: false,
            marker_segment: DEFAULT_MARKER_SEGMENT.to_string(),
            aliases: EnvironmentAliases::default(),
        }
    }
}

impl ClassifyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_changed_files(mut self, files: Vec<String>) -> Self {
        self.changed_files = files;
        self
    }

    pub fn with_selection(mut self, selection: Vec<String>) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    /// Set core patterns and whether they replace the built-in list
    pub fn with_core_patterns(mut self, patterns: Vec<String>, override_defaults: bool) -> Self {
        self.core_patterns = patterns;
        self.override_core_patterns = override_defaults;
        self
    }

    pub fn with_marker_segment(mut self, segment: impl Into<String>) -> Self {
        self.marker_segment = segment.into();
        self
    }

    pub fn with_aliases(mut self, aliases: EnvironmentAliases) -> Self {
        self.aliases = aliases;
        self
    }

    /// True when a glob selection drives the pass
    pub fn uses_selection(&self) -> bool {
        !self.selection.is_empty()
    }
}
