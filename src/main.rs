//! stacksort CLI - stack classification for infrastructure pipelines
//!
//! Usage: stacksort [OPTIONS] [COMMAND]
//!
//! Commands:
//!   classify  Classify changed or selected stacks into deployment groups
//!   expand    Print the brace expansion of each pattern
//!   inspect   Explain how individual directories would be classified

mod commands;

use anyhow::Result;
use clap::Parser;

use stacksort::logging::{self, LoggingConfig};
use stacksort::presentation::{ci, ClassifyArgs, Cli, Commands};
use stacksort::StackError;

fn main() {
    let cli = Cli::parse();
    logging::init(LoggingConfig::from_verbosity(cli.verbose, cli.quiet));

    if let Err(err) = run(cli) {
        report(&err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        None => commands::classify::cmd_classify(&ClassifyArgs::default(), cli.json),
        Some(Commands::Classify(args)) => commands::classify::cmd_classify(&args, cli.json),
        Some(Commands::Expand { patterns }) => commands::expand::cmd_expand(&patterns, cli.json),
        Some(Commands::Inspect { dirs, settings }) => {
            commands::inspect::cmd_inspect(&dirs, &settings, cli.json)
        }
    }
}

fn report(err: &anyhow::Error) {
    if ci::is_github_actions() {
        if let Some(stack_err) = err.downcast_ref::<StackError>() {
            eprintln!("{}", ci::error_annotation(stack_err));
        }
    }
    eprintln!("Error: {:#}", err);
}
