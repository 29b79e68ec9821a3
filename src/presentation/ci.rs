//! GitHub Actions workflow annotations

use crate::error::StackError;

/// Environment variable GitHub Actions sets on runners
pub const GITHUB_ACTIONS_ENV: &str = "GITHUB_ACTIONS";

/// True when running inside a GitHub Actions job
pub fn is_github_actions() -> bool {
    std::env::var(GITHUB_ACTIONS_ENV)
        .map(|v| v == "true")
        .unwrap_or(false)
}

/// `::error` workflow command with optional `file` and `title` properties
pub fn github_actions_annotation(
    message: &str,
    file: Option<&str>,
    title: Option<&str>,
) -> String {
    let mut props = Vec::new();
    if let Some(file) = file {
        props.push(format!("file={}", escape_property(file)));
    }
    if let Some(title) = title {
        props.push(format!("title={}", escape_property(title)));
    }

    let prop_str = if props.is_empty() {
        String::new()
    } else {
        format!(" {}", props.join(","))
    };

    format!("::error{}::{}", prop_str, escape_message(message))
}

/// Annotation for a fatal error
pub fn error_annotation(err: &StackError) -> String {
    let file = match err {
        StackError::InvalidConfig { file, .. } => Some(file.display().to_string()),
        _ => None,
    };
    github_actions_annotation(
        &err.to_string(),
        file.as_deref(),
        Some(err.title()),
    )
}

fn escape_message(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_message(s).replace(':', "%3A").replace(',', "%2C")
}
