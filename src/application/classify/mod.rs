//! Classify Use Case
//!
//! Orchestrates one classification pass:
//! - Resolving candidate directories (selection or changed files)
//! - Dropping directories that are not stacks
//! - Applying ignore patterns
//! - Assigning environments and splitting core from app stacks

mod options;
mod result;
mod use_case;

pub use options::ClassifyOptions;
pub use result::{ClassifyResult, SkipReason, SkippedStack};
pub use use_case::ClassifyUseCase;
