//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod environment;
mod pattern;
mod stack_path;

pub use environment::{ByEnvironment, Environment};
pub use pattern::{GlobPattern, PatternSet, MATCH_OPTIONS};
pub use stack_path::{PathError, StackPath};
