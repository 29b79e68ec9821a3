//! Stack Path Value Object
//!
//! A normalized stack directory relative to the repository root:
//! - forward slashes only, no trailing slash
//! - no `.` or `..` components
//! - never empty (the root itself is never a stack)

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

/// Error when a path cannot become a `StackPath`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Path contains traversal components (..)
    ContainsTraversal,
    /// Path is absolute when relative is required
    AbsoluteNotAllowed,
    /// Path is empty or resolves to the root
    Empty,
    /// Path is not valid UTF-8
    NotUtf8,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::ContainsTraversal => {
                write!(f, "Path contains traversal components (..)")
            }
            PathError::AbsoluteNotAllowed => {
                write!(f, "Absolute paths are not allowed")
            }
            PathError::Empty => {
                write!(f, "Path is empty")
            }
            PathError::NotUtf8 => {
                write!(f, "Path is not valid UTF-8")
            }
        }
    }
}

impl std::error::Error for PathError {}

/// A validated, normalized stack directory path
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StackPath(String);

impl StackPath {
    /// Normalize a raw slash-separated path.
    ///
    /// Backslashes are treated as separators, empty and `.` segments are
    /// dropped.
    pub fn new(raw: &str) -> Result<Self, PathError> {
        let unified = raw.replace('\\', "/");

        if unified.starts_with('/') || has_drive_prefix(&unified) {
            return Err(PathError::AbsoluteNotAllowed);
        }

        let mut segments = Vec::new();
        for segment in unified.split('/') {
            match segment {
                "" | "." => continue,
                ".." => return Err(PathError::ContainsTraversal),
                other => segments.push(other),
            }
        }

        if segments.is_empty() {
            return Err(PathError::Empty);
        }

        Ok(Self(segments.join("/")))
    }

    /// Build from a relative filesystem path (e.g. a glob match stripped of the root).
    pub fn from_relative(path: &Path) -> Result<Self, PathError> {
        let mut segments = Vec::new();
        for component in path.components() {
            match component {
                Component::Normal(part) => {
                    segments.push(part.to_str().ok_or(PathError::NotUtf8)?);
                }
                Component::CurDir => {}
                Component::ParentDir => return Err(PathError::ContainsTraversal),
                Component::RootDir | Component::Prefix(_) => {
                    return Err(PathError::AbsoluteNotAllowed)
                }
            }
        }

        if segments.is_empty() {
            return Err(PathError::Empty);
        }

        Ok(Self(segments.join("/")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path components from the root-level directory down to the leaf
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// Final path segment
    pub fn name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Parent directory, `None` when the parent would be the root
    pub fn parent(&self) -> Option<StackPath> {
        self.0
            .rsplit_once('/')
            .map(|(parent, _)| StackPath(parent.to_string()))
    }

    /// Absolute location of this stack under `root`
    pub fn to_path(&self, root: &Path) -> PathBuf {
        self.components()
            .fold(root.to_path_buf(), |acc, part| acc.join(part))
    }
}

fn has_drive_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

impl fmt::Display for StackPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StackPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for StackPath {
    type Error = PathError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
