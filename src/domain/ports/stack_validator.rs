//! StackValidator port
//!
//! A single predicate deciding whether a directory is a deployable stack.
//! Callers never see how the decision is made.

use std::path::Path;

use crate::domain::value_objects::StackPath;

/// Decides whether a directory under `root` is a genuine stack
pub trait StackValidator {
    /// Missing directories and unreadable content yield `false`.
    fn is_stack(&self, root: &Path, path: &StackPath) -> bool;
}

impl<V: StackValidator + ?Sized> StackValidator for Box<V> {
    fn is_stack(&self, root: &Path, path: &StackPath) -> bool {
        (**self).is_stack(root, path)
    }
}

impl<V: StackValidator + ?Sized> StackValidator for &V {
    fn is_stack(&self, root: &Path, path: &StackPath) -> bool {
        (**self).is_stack(root, path)
    }
}
