//! Expand command handler

use std::io::Write;

use anyhow::Result;

use stacksort::domain::services::expand_all;

pub fn cmd_expand(patterns: &[String], json: bool) -> Result<()> {
    let expanded = expand_all(patterns)?;
    let mut stdout = std::io::stdout().lock();

    if json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&expanded)?)?;
    } else {
        for pattern in &expanded {
            writeln!(stdout, "{}", pattern)?;
        }
    }
    Ok(())
}
