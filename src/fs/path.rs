//! Path Resolver
//!
//! Pure functions mapping user-supplied names onto store keys. No I/O.

use super::types::{ROOT, SEPARATOR};

/// Resolve `raw_name` against the current directory.
///
/// A name starting with the separator is already absolute and is returned
/// as-is. Otherwise it is joined onto `current_directory`. `.` and `..`
/// segments are not interpreted here.
pub fn resolve(current_directory: &str, raw_name: &str) -> String {
    if raw_name.starts_with(SEPARATOR) {
        raw_name.to_string()
    } else {
        format!("{}{}{}", current_directory, SEPARATOR, raw_name)
    }
}

/// Key of the directory containing `path`, or the root when nothing is left.
pub fn parent_of(path: &str) -> String {
    let mut segments: Vec<&str> = path.split(SEPARATOR).filter(|s| !s.is_empty()).collect();
    segments.pop();
    if segments.is_empty() {
        ROOT.to_string()
    } else {
        segments.join("/")
    }
}

/// Store key for a path: surrounding separators dropped, empty means root.
pub fn normalize_key(path: &str) -> String {
    let trimmed = path.trim_matches(SEPARATOR);
    if trimmed.is_empty() {
        ROOT.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Final segment of a key.
pub fn file_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches(SEPARATOR);
    match trimmed.rfind(SEPARATOR) {
        Some(pos) => &trimmed[pos + 1..],
        None => trimmed,
    }
}

pub fn is_root(path: &str) -> bool {
    normalize_key(path) == ROOT
}

/// True for the root key and every key below it.
pub fn is_within_root(key: &str) -> bool {
    key.strip_prefix(ROOT)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(SEPARATOR))
}
