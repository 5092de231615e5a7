//! Pure helpers for path templates and operation naming.
//!
//! The path template grammar is the one place where the string form of a
//! route and the structured parameter list must stay synchronized: a
//! placeholder is `{`, one or more non-`}` characters, `}`. The
//! synchronization itself is enforced by the endpoint validation gate,
//! not here.

use regex::Regex;
use std::sync::LazyLock;

static PATH_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^}]+)\}").expect("path parameter pattern is valid"));

static OPERATION_ID_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("operation id pattern is valid"));

/// Extracts every `{name}` placeholder from a path template, in order of
/// appearance. Duplicate placeholders are returned once per occurrence.
pub fn extract_path_params(path: &str) -> Vec<String> {
    PATH_PARAM
        .captures_iter(path)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Ensures a path template starts with a single leading `/`.
pub fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// Derives an operation id from the endpoint's display name, falling back
/// to the path. The source is lowercased and every run of characters
/// outside `[a-z0-9]` collapses to a single underscore; an empty result
/// becomes the literal `"operation"`.
pub fn operation_id(name: &str, path: &str) -> String {
    let source = if name.is_empty() { path } else { name };
    let id = OPERATION_ID_SEPARATORS
        .replace_all(&source.to_lowercase(), "_")
        .into_owned();
    if id.is_empty() { "operation".to_string() } else { id }
}
