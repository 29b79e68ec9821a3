//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --quiet) are inherited by all subcommands
//! - Running without a subcommand classifies using environment inputs only,
//!   which is how the pipeline step invokes the binary

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::parse_bool;
use crate::domain::policies::ValidatorMode;

/// stacksort - decide which infrastructure stacks to deploy, where, and in which phase
#[derive(Parser, Debug)]
#[command(name = "stacksort")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Without a subcommand, 'classify' runs with inputs taken from the environment.")]
pub struct Cli {
    /// Print the full result as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify changed or selected stacks into deployment groups
    Classify(ClassifyArgs),

    /// Print the brace expansion of each pattern
    Expand {
        /// Patterns such as 'stacks/{dev,prod}/app'
        #[arg(required = true, value_name = "PATTERN")]
        patterns: Vec<String>,
    },

    /// Explain how individual directories would be classified
    Inspect {
        /// Stack directories relative to the root
        #[arg(required = true, value_name = "DIR")]
        dirs: Vec<String>,

        #[command(flatten)]
        settings: SharedArgs,
    },
}

/// Settings shared by every command that looks at stacks
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct SharedArgs {
    /// Stacks root directory [env: STACKS_ROOT] [default: .]
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Ignore patterns, newline or comma separated [env: IGNORE_PATTERNS]
    #[arg(long = "ignore", value_name = "LIST")]
    pub ignore: Option<String>,

    /// Extra core patterns [env: CORE_PATTERNS]
    #[arg(long, value_name = "LIST")]
    pub core_patterns: Option<String>,

    /// Replace the built-in core patterns [env: OVERRIDE_CORE_PATTERNS]
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = parse_bool_arg
    )]
    pub override_core_patterns: Option<bool>,

    /// Stack detection heuristic: backend, has-config, none [env: STACK_VALIDATOR]
    #[arg(long, value_name = "MODE")]
    pub validator: Option<ValidatorMode>,
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct ClassifyArgs {
    /// Changed files as a list or JSON array [env: CHANGED_FILES]
    #[arg(long, value_name = "LIST")]
    pub changed_files: Option<String>,

    /// Glob selection; takes precedence over changed files [env: STACK_SELECTION]
    #[arg(long = "select", value_name = "LIST")]
    pub selection: Option<String>,

    /// Append results to this file [env: GITHUB_OUTPUT]
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub settings: SharedArgs,
}

fn parse_bool_arg(value: &str) -> Result<bool, String> {
    parse_bool(value).ok_or_else(|| format!("expected true or false, got '{}'", value))
}
