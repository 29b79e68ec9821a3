//! Output Rendering
//!
//! Results are emitted as `key=<JSON array>` lines, the format CI runners
//! read from step output files. `--json` renders the whole result instead.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::application::{ClassifyResult, SkippedStack};
use crate::domain::value_objects::{Environment, StackPath};
use crate::error::{StackError, StackResult};

/// Output keys, in emission order
pub const OUTPUT_KEYS: [&str; 7] = [
    "dev-core-stacks",
    "dev-apps-stacks",
    "prod-core-stacks",
    "prod-apps-stacks",
    "all-dev-stacks",
    "all-prod-stacks",
    "all-stacks",
];

/// Lists for every output key, in emission order
pub fn output_lists(result: &ClassifyResult) -> Vec<(&'static str, Vec<StackPath>)> {
    let dev = result.partition(Environment::Dev);
    let prod = result.partition(Environment::Prod);
    let lists = [
        dev.core.clone(),
        dev.apps.clone(),
        prod.core.clone(),
        prod.apps.clone(),
        result.all_dev(),
        result.all_prod(),
        result.all(),
    ];
    OUTPUT_KEYS.into_iter().zip(lists).collect()
}

/// Compact JSON array of stack paths
pub fn json_array(paths: &[StackPath]) -> String {
    Value::Array(
        paths
            .iter()
            .map(|p| Value::String(p.as_str().to_string()))
            .collect(),
    )
    .to_string()
}

/// Render all `key=value` lines (newline terminated)
pub fn render_key_values(result: &ClassifyResult) -> String {
    output_lists(result)
        .iter()
        .map(|(key, paths)| format!("{}={}\n", key, json_array(paths)))
        .collect()
}

/// Write `key=value` lines to any writer
pub fn write_key_values<W: Write>(writer: &mut W, result: &ClassifyResult) -> std::io::Result<()> {
    writer.write_all(render_key_values(result).as_bytes())?;
    writer.flush()
}

/// Append `key=value` lines to an output file, creating it if needed
pub fn append_key_values(path: &Path, result: &ClassifyResult) -> StackResult<()> {
    let to_output_error = |source| StackError::Output {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(to_output_error)?;
    write_key_values(&mut file, result).map_err(to_output_error)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(rename = "dev-core-stacks")]
    dev_core: &'a [StackPath],
    #[serde(rename = "dev-apps-stacks")]
    dev_apps: &'a [StackPath],
    #[serde(rename = "prod-core-stacks")]
    prod_core: &'a [StackPath],
    #[serde(rename = "prod-apps-stacks")]
    prod_apps: &'a [StackPath],
    #[serde(rename = "all-dev-stacks")]
    all_dev: Vec<StackPath>,
    #[serde(rename = "all-prod-stacks")]
    all_prod: Vec<StackPath>,
    #[serde(rename = "all-stacks")]
    all: Vec<StackPath>,
    skipped: &'a [SkippedStack],
}

/// Pretty JSON with every output key plus skipped directories
pub fn render_json(result: &ClassifyResult) -> serde_json::Result<String> {
    let dev = result.partition(Environment::Dev);
    let prod = result.partition(Environment::Prod);
    let report = JsonReport {
        dev_core: &dev.core,
        dev_apps: &dev.apps,
        prod_core: &prod.core,
        prod_apps: &prod.apps,
        all_dev: result.all_dev(),
        all_prod: result.all_prod(),
        all: result.all(),
        skipped: &result.skipped,
    };
    serde_json::to_string_pretty(&report)
}
