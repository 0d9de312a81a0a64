//! Settings file reading

use crate::{error::ConfigError, Result};
use serde_yaml::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read and parse the settings file at `path`
///
/// Returns `Ok(None)` when the file does not exist.
pub fn read_document(path: &Path) -> Result<Option<Value>> {
    if !path.exists() {
        debug!(path = %path.display(), "settings file not found, using defaults");
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_document(&content, path).map(Some)
}

/// Parse YAML text; `path` is only used for error messages
pub fn parse_document(content: &str, path: &Path) -> Result<Value> {
    if content.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_yaml::from_str(content).map_err(|e| ConfigError::from_yaml_error(e, content, path))
}
