//! Domain Services
//!
//! Pure business logic services that operate on domain values.
//! These services have no I/O dependencies and are easily testable.

pub mod brace;
pub mod environment_classifier;
pub mod list_parser;
pub mod partitioner;

pub use brace::{expand_all, expand_braces, validate_braces, BraceError};
pub use environment_classifier::{
    EnvironmentAliases, EnvironmentClassifier, DEFAULT_DEV_ALIASES, DEFAULT_PROD_ALIASES,
};
pub use list_parser::{parse_input_list, parse_list};
pub use partitioner::{partition, CorePatterns, Partition, DEFAULT_CORE_PATTERNS};
