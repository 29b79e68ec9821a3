//! List Parser
//!
//! Turns raw pipeline inputs into ordered token lists.
//!
//! Two layouts are accepted:
//! - one token per line (commas are kept, so brace patterns survive)
//! - a single comma-separated line (commas inside `{...}` are kept)

/// Parse a raw delimited string into trimmed, non-empty tokens.
///
/// Order is preserved and duplicates are kept.
pub fn parse_list(raw: &str) -> Vec<String> {
    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    match lines.as_slice() {
        [] => Vec::new(),
        [single] => split_top_level_commas(single),
        many => many.iter().map(|line| line.to_string()).collect(),
    }
}

/// Parse a pipeline input that may be a JSON array or a delimited list.
///
/// Input that decodes as a JSON array is taken as a list of strings;
/// non-string elements are skipped. Input that only opens like one (`[`
/// followed by `"` or `]`) but fails to decode degrades to an empty list
/// with a warning naming `name`. Anything else, including globs that start
/// with a character class such as `[sp]tacks/*`, goes through
/// [`parse_list`].
pub fn parse_input_list(name: &str, raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if !trimmed.starts_with('[') {
        return parse_list(trimmed);
    }

    let values: Vec<serde_json::Value> = match serde_json::from_str(trimmed) {
        Ok(values) => values,
        Err(e) if looks_like_json_array(trimmed) => {
            tracing::warn!(input = name, error = %e, "malformed JSON list, treating as empty");
            return Vec::new();
        }
        Err(_) => {
            tracing::debug!(input = name, "not a JSON list, parsing as delimited");
            return parse_list(trimmed);
        }
    };

    values
        .into_iter()
        .filter_map(|value| match value {
            serde_json::Value::String(s) => {
                let s = s.trim();
                (!s.is_empty()).then(|| s.to_string())
            }
            other => {
                tracing::warn!(input = name, value = %other, "skipping non-string list entry");
                None
            }
        })
        .collect()
}

fn looks_like_json_array(trimmed: &str) -> bool {
    matches!(
        trimmed[1..].trim_start().chars().next(),
        Some('"') | Some(']')
    )
}

fn split_top_level_commas(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut in_group = false;
    let mut start = 0;

    for (i, c) in line.char_indices() {
        match c {
            '{' => in_group = true,
            '}' => in_group = false,
            ',' if !in_group => {
                tokens.push(&line[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    tokens.push(&line[start..]);

    tokens
        .into_iter()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
