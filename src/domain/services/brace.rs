//! Brace Expansion
//!
//! Expands shell-style `{a,b}` alternation into plain glob patterns.
//! Groups never nest; `{a,b}/{c,d}` expands outer-first to
//! `a/c, a/d, b/c, b/d`.

use thiserror::Error;

use crate::error::{StackError, StackResult};

/// Brace syntax violation. Positions are byte offsets into the pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BraceError {
    #[error("unmatched '{{' at position {position}")]
    UnmatchedOpen { position: usize },

    #[error("unmatched '}}' at position {position}")]
    UnmatchedClose { position: usize },

    #[error("nested '{{' at position {position}")]
    Nested { position: usize },

    #[error("empty brace group at position {position}")]
    EmptyGroup { position: usize },

    #[error("empty alternative at position {position}")]
    EmptyAlternative { position: usize },
}

/// Check brace syntax for the whole pattern without expanding it.
pub fn validate_braces(pattern: &str) -> Result<(), BraceError> {
    let mut open: Option<usize> = None;
    let mut alt_start = 0;

    for (i, c) in pattern.char_indices() {
        match c {
            '{' => {
                if open.is_some() {
                    return Err(BraceError::Nested { position: i });
                }
                open = Some(i);
                alt_start = i + 1;
            }
            ',' if open.is_some() => {
                if i == alt_start {
                    return Err(BraceError::EmptyAlternative { position: i });
                }
                alt_start = i + 1;
            }
            '}' => match open {
                None => return Err(BraceError::UnmatchedClose { position: i }),
                Some(start) if i == start + 1 => {
                    return Err(BraceError::EmptyGroup { position: start });
                }
                Some(_) if i == alt_start => {
                    return Err(BraceError::EmptyAlternative { position: i });
                }
                Some(_) => open = None,
            },
            _ => {}
        }
    }

    match open {
        Some(position) => Err(BraceError::UnmatchedOpen { position }),
        None => Ok(()),
    }
}

/// Expand every brace group in `pattern`.
///
/// A pattern without braces comes back as a singleton. Any syntax
/// violation fails the whole pattern; no partial expansion is returned.
///
/// # Example
///
/// ```
/// use stacksort::domain::services::expand_braces;
///
/// let expanded = expand_braces("stacks/{dev,prod}/iam").unwrap();
/// assert_eq!(expanded, vec!["stacks/dev/iam", "stacks/prod/iam"]);
/// ```
pub fn expand_braces(pattern: &str) -> StackResult<Vec<String>> {
    validate_braces(pattern).map_err(|reason| StackError::PatternSyntax {
        pattern: pattern.to_string(),
        reason,
    })?;

    let mut expanded = Vec::new();
    expand_validated(pattern, &mut expanded);
    Ok(expanded)
}

/// Expand a list of patterns, preserving input order.
pub fn expand_all<S: AsRef<str>>(patterns: &[S]) -> StackResult<Vec<String>> {
    let mut expanded = Vec::new();
    for pattern in patterns {
        expanded.extend(expand_braces(pattern.as_ref())?);
    }
    Ok(expanded)
}

fn expand_validated(pattern: &str, out: &mut Vec<String>) {
    let group = pattern
        .find('{')
        .and_then(|open| pattern[open..].find('}').map(|len| (open, open + len)));

    let Some((open, close)) = group else {
        out.push(pattern.to_string());
        return;
    };

    let prefix = &pattern[..open];
    let suffix = &pattern[close + 1..];
    for alternative in pattern[open + 1..close].split(',') {
        expand_validated(&format!("{prefix}{alternative}{suffix}"), out);
    }
}
