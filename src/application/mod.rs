//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (value objects, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ClassifyUseCase` - Resolves, validates, classifies and partitions stacks
//!
//! ## Services
//!
//! - `resolver` - Candidate directories from a selection or changed files

pub mod classify;
pub mod resolver;

pub use classify::{ClassifyOptions, ClassifyResult, ClassifyUseCase, SkipReason, SkippedStack};
pub use resolver::{files_to_dirs, resolve_selection, DEFAULT_MARKER_SEGMENT};
