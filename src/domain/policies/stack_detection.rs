//! Stack Detection Policy
//!
//! Heuristics deciding whether a directory holds a deployable stack. Each
//! heuristic implements the `StackValidator` port so it can be swapped
//! without touching callers.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::ports::{FileSystem, StackValidator};
use crate::domain::value_objects::StackPath;

/// Default literal marking a remote-state backend declaration
pub const DEFAULT_BACKEND_MARKER: &str = r#"backend "s3""#;

/// Default configuration file extensions
pub const DEFAULT_CONFIG_EXTENSIONS: &[&str] = &["tf"];

/// Which detection heuristic to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ValidatorMode {
    /// A config file contains the backend marker
    #[default]
    Backend,
    /// Any config file is present
    HasConfig,
    /// Every existing directory is a stack
    None,
}

impl ValidatorMode {
    pub const VALID_VALUES: &'static [&'static str] = &["backend", "has-config", "none"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ValidatorMode::Backend => "backend",
            ValidatorMode::HasConfig => "has-config",
            ValidatorMode::None => "none",
        }
    }
}

impl FromStr for ValidatorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "backend" | "backend-s3" => Ok(ValidatorMode::Backend),
            "has-config" | "has-tf" => Ok(ValidatorMode::HasConfig),
            "none" => Ok(ValidatorMode::None),
            other => Err(format!("unknown validator mode '{}'", other)),
        }
    }
}

impl std::fmt::Display for ValidatorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Config file filter shared by the file-based heuristics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFileFilter {
    extensions: Vec<String>,
}

impl Default for ConfigFileFilter {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_EXTENSIONS)
    }
}

impl ConfigFileFilter {
    /// Extensions are matched case-sensitively, with or without a leading dot.
    pub fn new<S: AsRef<str>>(extensions: &[S]) -> Self {
        Self {
            extensions: extensions
                .iter()
                .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_string())
                .filter(|ext| !ext.is_empty())
                .collect(),
        }
    }

    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.extensions.iter().any(|allowed| allowed == ext))
            .unwrap_or(false)
    }

    /// Direct config files of `dir`; missing directories yield none
    fn config_files<FS: FileSystem>(&self, fs: &FS, dir: &Path) -> Vec<PathBuf> {
        match fs.list_files(dir) {
            Ok(files) => files.into_iter().filter(|f| self.matches(f)).collect(),
            Err(e) => {
                tracing::debug!(dir = %dir.display(), error = %e, "cannot list directory");
                Vec::new()
            }
        }
    }
}

/// A stack has a config file containing the backend marker
#[derive(Debug, Clone)]
pub struct BackendMarkerValidator<FS: FileSystem> {
    fs: FS,
    filter: ConfigFileFilter,
    marker: String,
}

impl<FS: FileSystem> BackendMarkerValidator<FS> {
    pub fn new(fs: FS, filter: ConfigFileFilter, marker: impl Into<String>) -> Self {
        Self {
            fs,
            filter,
            marker: marker.into(),
        }
    }
}

impl<FS: FileSystem> StackValidator for BackendMarkerValidator<FS> {
    fn is_stack(&self, root: &Path, path: &StackPath) -> bool {
        let dir = path.to_path(root);
        self.filter
            .config_files(&self.fs, &dir)
            .iter()
            .any(|file| match self.fs.read(file) {
                Ok(content) => content.contains(&self.marker),
                Err(e) => {
                    tracing::debug!(file = %file.display(), error = %e, "skipping unreadable file");
                    false
                }
            })
    }
}

/// A stack has at least one config file
#[derive(Debug, Clone)]
pub struct ConfigPresenceValidator<FS: FileSystem> {
    fs: FS,
    filter: ConfigFileFilter,
}

impl<FS: FileSystem> ConfigPresenceValidator<FS> {
    pub fn new(fs: FS, filter: ConfigFileFilter) -> Self {
        Self { fs, filter }
    }
}

impl<FS: FileSystem> StackValidator for ConfigPresenceValidator<FS> {
    fn is_stack(&self, root: &Path, path: &StackPath) -> bool {
        !self
            .filter
            .config_files(&self.fs, &path.to_path(root))
            .is_empty()
    }
}

/// Every existing directory is a stack
#[derive(Debug, Clone)]
pub struct AnyDirectoryValidator<FS: FileSystem> {
    fs: FS,
}

impl<FS: FileSystem> AnyDirectoryValidator<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }
}

impl<FS: FileSystem> StackValidator for AnyDirectoryValidator<FS> {
    fn is_stack(&self, root: &Path, path: &StackPath) -> bool {
        self.fs.is_dir(&path.to_path(root))
    }
}
