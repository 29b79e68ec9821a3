//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (`key=value` lines, JSON, CI annotations)
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Result rendering
//! - `ci` - GitHub Actions annotations

pub mod ci;
pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{ClassifyArgs, Cli, Commands, SharedArgs};
pub use factory::create_classify_use_case;
