//! Classify command handler

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;

use stacksort::application::ClassifyOptions;
use stacksort::config::{env_input, ENV_CHANGED_FILES, ENV_GITHUB_OUTPUT, ENV_STACK_SELECTION};
use stacksort::domain::services::parse_input_list;
use stacksort::presentation::{factory, output, ClassifyArgs};

use super::load_settings;

pub fn cmd_classify(args: &ClassifyArgs, json: bool) -> Result<()> {
    let (root, config) = load_settings(&args.settings)?;

    let changed_files = input_list(args.changed_files.as_deref(), ENV_CHANGED_FILES);
    let selection = input_list(args.selection.as_deref(), ENV_STACK_SELECTION);

    let options = ClassifyOptions::new()
        .with_root(root)
        .with_changed_files(changed_files)
        .with_selection(selection)
        .with_ignore_patterns(config.patterns.ignore.clone())
        .with_core_patterns(config.patterns.core.clone(), config.patterns.override_core)
        .with_marker_segment(config.resolver.marker_segment.clone())
        .with_aliases(config.environments.aliases());

    let use_case = factory::create_classify_use_case(&config.validator);
    let result = use_case.execute(&options)?;

    if json {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", output::render_json(&result)?)?;
        return Ok(());
    }

    let destination = args
        .output
        .clone()
        .or_else(|| env_input(ENV_GITHUB_OUTPUT).map(PathBuf::from));

    match destination {
        Some(path) => {
            output::append_key_values(&path, &result)?;
            tracing::info!(path = %path.display(), "results appended");
        }
        None => output::write_key_values(&mut std::io::stdout().lock(), &result)?,
    }

    Ok(())
}

/// Flag value if given, otherwise the environment input
fn input_list(flag: Option<&str>, env_name: &str) -> Vec<String> {
    match flag {
        Some(raw) => parse_input_list(env_name, raw),
        None => env_input(env_name)
            .map(|raw| parse_input_list(env_name, &raw))
            .unwrap_or_default(),
    }
}
