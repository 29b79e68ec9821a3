//! In-memory File System
//!
//! A fixed file tree for exercising the engine without touching disk.
//! Directories are implied by the files placed in them.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
use crate::domain::value_objects::MATCH_OPTIONS;

/// In-memory file system
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    /// `None` content marks an unreadable file
    files: BTreeMap<PathBuf, Option<String>>,
    dirs: BTreeSet<PathBuf>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a readable file (parent directories are created)
    pub fn with_file(mut self, path: impl AsRef<Path>, content: &str) -> Self {
        let path = path.as_ref().to_path_buf();
        self.add_parents(&path);
        self.files.insert(path, Some(content.to_string()));
        self
    }

    /// Add a file whose reads fail with permission denied
    pub fn with_unreadable_file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        self.add_parents(&path);
        self.files.insert(path, None);
        self
    }

    /// Add an empty directory
    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        self.add_parents(&path);
        self.dirs.insert(path);
        self
    }

    fn add_parents(&mut self, path: &Path) {
        let mut current = path.parent();
        while let Some(dir) = current {
            if dir.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(dir.to_path_buf());
            current = dir.parent();
        }
    }
}

impl FileSystem for MemoryFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        match self.files.get(path) {
            Some(Some(content)) => Ok(content.clone()),
            Some(None) => Err(FsError::PermissionDenied(path.to_path_buf())),
            None => Err(FsError::NotFound(path.to_path_buf())),
        }
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn list_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        if !self.is_dir(dir) {
            return Err(FsError::NotFound(dir.to_path_buf()));
        }
        Ok(self
            .files
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .cloned()
            .collect())
    }

    fn glob(&self, root: &Path, pattern: &str) -> FsResult<Vec<PathBuf>> {
        let matcher =
            Pattern::new(pattern).map_err(|e| FsError::Pattern(format!("{}: {}", pattern, e.msg)))?;

        let candidates = self.dirs.iter().chain(self.files.keys());
        let mut matches: Vec<PathBuf> = candidates
            .filter_map(|path| path.strip_prefix(root).ok())
            .filter(|relative| !relative.as_os_str().is_empty())
            .filter(|relative| {
                relative
                    .to_str()
                    .map(|s| matcher.matches_with(&s.replace('\\', "/"), MATCH_OPTIONS))
                    .unwrap_or(false)
            })
            .map(Path::to_path_buf)
            .collect();
        matches.sort();
        matches.dedup();
        Ok(matches)
    }
}
