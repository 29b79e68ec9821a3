//! Directory Resolver
//!
//! Turns the pipeline inputs into candidate stack directories, either from
//! an explicit glob selection or from the list of changed files.

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use crate::domain::ports::FileSystem;
use crate::domain::services::expand_all;
use crate::domain::value_objects::{GlobPattern, PathError, StackPath};
use crate::error::{StackError, StackResult};

/// Directory name whose files belong to the enclosing stack
pub const DEFAULT_MARKER_SEGMENT: &str = ".boilerplate";

/// Resolve a glob selection against the filesystem.
///
/// Matched directories are candidates themselves; matched files contribute
/// their parent directory. The root itself and anything outside it are
/// discarded. The result is deduplicated and sorted.
pub fn resolve_selection<FS, S>(fs: &FS, root: &Path, selection: &[S]) -> StackResult<Vec<StackPath>>
where
    FS: FileSystem,
    S: AsRef<str>,
{
    let mut found = BTreeSet::new();

    for raw in expand_all(selection)? {
        let pattern = GlobPattern::new(&raw)?;
        let matches = fs
            .glob(root, pattern.as_str())
            .map_err(|e| StackError::InvalidGlob {
                pattern: raw.clone(),
                message: e.to_string(),
            })?;

        if matches.is_empty() {
            tracing::debug!(pattern = %pattern, "selection matched nothing");
        }

        for relative in matches {
            let candidate = if fs.is_dir(&root.join(&relative)) {
                relative.as_path()
            } else {
                match relative.parent() {
                    Some(parent) => parent,
                    None => continue,
                }
            };

            match StackPath::from_relative(candidate) {
                Ok(path) => {
                    found.insert(path);
                }
                Err(PathError::Empty) => {
                    tracing::debug!(matched = %relative.display(), "skipping match at root");
                }
                Err(e) => {
                    tracing::debug!(matched = %relative.display(), error = %e, "skipping match outside root");
                }
            }
        }
    }

    Ok(found.into_iter().collect())
}

/// Map changed files to the directories that own them.
///
/// A file directly inside `marker_segment` belongs to the grandparent.
/// Files at the root own no directory and are dropped.
pub fn files_to_dirs<S: AsRef<str>>(files: &[S], marker_segment: &str) -> Vec<StackPath> {
    let mut seen = HashSet::new();
    let mut dirs = Vec::new();

    for raw in files {
        let raw = raw.as_ref();
        let file = match StackPath::new(raw) {
            Ok(file) => file,
            Err(PathError::Empty) => continue,
            Err(e) => {
                tracing::warn!(file = raw, error = %e, "ignoring changed file");
                continue;
            }
        };

        let Some(mut dir) = file.parent() else {
            tracing::debug!(file = %file, "root-level file has no stack directory");
            continue;
        };

        if dir.name() == marker_segment {
            match dir.parent() {
                Some(owner) => dir = owner,
                None => {
                    tracing::debug!(file = %file, "marker directory at root has no owner");
                    continue;
                }
            }
        }

        if seen.insert(dir.clone()) {
            dirs.push(dir);
        }
    }

    dirs.sort();
    dirs
}
