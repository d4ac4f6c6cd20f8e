//! Search-path helpers
//!
//! Appends a directory to a `PATH`-style value using the host's native list
//! separator (`;` on Windows, `:` elsewhere).

use std::env::{self, JoinPathsError};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

pub const PATH_VAR: &str = "PATH";

/// Append `dir` to the end of `current`.
///
/// Returns `current` unchanged if `dir` is already one of its entries.
/// Fails if `dir` itself contains the separator.
pub fn append(current: Option<&OsStr>, dir: &Path) -> Result<OsString, JoinPathsError> {
    let mut entries: Vec<PathBuf> = current
        .map(|value| env::split_paths(value).collect())
        .unwrap_or_default();

    if entries.iter().any(|entry| entry == dir) {
        return Ok(current.map(OsStr::to_os_string).unwrap_or_default());
    }

    // An empty value splits into one empty entry, which would mean "cwd"
    entries.retain(|entry| !entry.as_os_str().is_empty());
    entries.push(dir.to_path_buf());
    env::join_paths(entries)
}

/// Append `dir` to the value of the environment variable `var` in this process.
pub fn append_to_var(var: &str, dir: &Path) -> Result<OsString, JoinPathsError> {
    append(env::var_os(var).as_deref(), dir)
}
