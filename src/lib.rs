//! stacksort - stack classification for infrastructure CI pipelines
//!
//! Given the files changed in a commit (or an explicit glob selection),
//! stacksort decides which infrastructure stacks are affected, which
//! environment each one deploys to, and whether it belongs to the core
//! group (deployed first) or the app group (deployed in parallel).

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{ClassifyOptions, ClassifyResult, ClassifyUseCase, SkipReason};
pub use config::Config;
pub use domain::policies::ValidatorMode;
pub use domain::services::{expand_braces, parse_input_list, parse_list};
pub use domain::value_objects::{Environment, StackPath};
pub use error::{StackError, StackResult};
