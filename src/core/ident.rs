//! RG-002: Identifier sanitization.
//!
//! Turns resource paths into names usable as C++ identifiers:
//! - drop every character outside `[0-9a-zA-Z_]`
//! - drop leading characters until a letter or underscore

use regex::Regex;
use std::sync::LazyLock;

static INVALID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^0-9a-zA-Z_]").expect("static pattern"));

static LEADING_NON_ALPHA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[^a-zA-Z_]+").expect("static pattern"));

/// Sanitize an arbitrary string into identifier characters. May return "".
pub fn sanitize(s: &str) -> String {
    let stripped = INVALID_CHARS.replace_all(s, "");
    LEADING_NON_ALPHA.replace(&stripped, "").into_owned()
}

/// True when `s` is a non-empty, already-sanitized identifier.
pub fn is_identifier(s: &str) -> bool {
    !s.is_empty() && sanitize(s) == s
}

/// Identifier for an input path. Errors if nothing usable is left.
pub fn identifier_for_path(path: &str) -> Result<String, String> {
    let id = sanitize(path);
    if id.is_empty() {
        return Err(format!(
            "cannot derive an identifier from '{}': no letters or underscores",
            path
        ));
    }
    Ok(id)
}

/// Identifier for a stored key: skip the 5-character `rsc:/` prefix, then sanitize.
pub fn identifier_for_key(key: &str) -> String {
    let rest: String = key.chars().skip(super::types::RESOURCE_PREFIX.len()).collect();
    sanitize(&rest)
}
