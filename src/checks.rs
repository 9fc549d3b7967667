//! Loading the checks list.
//!
//! A checks file is UTF-8 JSON whose top-level value is an array of CSS
//! selector strings, e.g. `["h1", "#submit", "a[href]"]`. Order is kept and
//! duplicates are allowed.

use crate::error::{Error, Result};
use std::path::Path;

/// Parse a checks list from JSON text.
///
/// `path` is only used to label the error.
pub fn parse_checks(json: &str, path: &Path) -> Result<Vec<String>> {
    serde_json::from_str(json).map_err(|source| Error::InvalidChecks {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a checks file.
pub fn load_checks(path: &Path) -> Result<Vec<String>> {
    let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let checks = parse_checks(&json, path)?;
    tracing::debug!(path = %path.display(), count = checks.len(), "loaded checks");
    Ok(checks)
}
