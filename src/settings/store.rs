//! JSON file store for settings objects.
//!
//! Both settings files are UTF-8 JSON whose top level must be an object.
//! Absent files are reported distinctly from malformed ones; filesystem
//! errors propagate unmodified.

use crate::error::LauncherError;
use serde_json::{Map, Value};
use std::path::Path;

/// A parsed settings document: string keys to arbitrary JSON values.
pub type ConfigObject = Map<String, Value>;

/// Read and parse a settings file.
///
/// Returns `Ok(None)` when the file does not exist. A file that exists but
/// fails to parse, or parses to a non-object top level, is an error.
pub fn read_object(path: &Path) -> Result<Option<ConfigObject>, LauncherError> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(path)?;
    let value: Value =
        serde_json::from_str(&raw).map_err(|e| LauncherError::parse(path, e))?;
    match value {
        Value::Object(map) => Ok(Some(map)),
        _ => Err(LauncherError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}

/// Parse in-memory text as a settings object, attributing failures to `path`.
/// Used to validate editor output before anything is written.
pub fn parse_object(text: &str, path: &Path) -> Result<ConfigObject, LauncherError> {
    let value: Value = serde_json::from_str(text).map_err(|e| LauncherError::parse(path, e))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(LauncherError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}

/// Serialize an object with two-space indentation and persist it.
pub fn write_object(path: &Path, object: &ConfigObject) -> Result<(), LauncherError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut content = serde_json::to_string_pretty(&Value::Object(object.clone()))
        .map_err(|e| LauncherError::parse(path, e))?;
    content.push('\n');
    std::fs::write(path, content)?;
    Ok(())
}

/// Read a settings file as raw text, or a default skeleton when absent.
pub fn read_text(path: &Path) -> Result<String, LauncherError> {
    if !path.exists() {
        return Ok("{\n}\n".to_string());
    }
    Ok(std::fs::read_to_string(path)?)
}
