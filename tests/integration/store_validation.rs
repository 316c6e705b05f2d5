//! Store-level validation: absent vs malformed vs non-object files.

use claude_go::error::LauncherError;
use claude_go::settings::{read_object, write_object, ConfigObject};
use serde_json::{json, Value};
use tempfile::TempDir;

fn obj(value: Value) -> ConfigObject {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {}", other),
    }
}

#[test]
fn test_absent_file_reads_as_none() {
    let dir = TempDir::new().unwrap();
    assert!(read_object(&dir.path().join("settings.json"))
        .unwrap()
        .is_none());
}

#[test]
fn test_top_level_array_rejected_before_any_write() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "[\"not\", \"an\", \"object\"]").unwrap();

    let err = read_object(&path).unwrap_err();
    assert!(matches!(err, LauncherError::NotAnObject { .. }));
    assert!(err.to_string().contains("must be a JSON object"));

    // The offending file is untouched.
    let raw = std::fs::read_to_string(&path).unwrap();
    assert_eq!(raw, "[\"not\", \"an\", \"object\"]");
}

#[test]
fn test_parse_error_carries_path_and_message() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.k2.json");
    std::fs::write(&path, "{\"a\": }").unwrap();

    let err = read_object(&path).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Failed to parse JSON"));
    assert!(message.contains("settings.k2.json"));
}

#[test]
fn test_written_file_is_pretty_printed_utf8() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    write_object(&path, &obj(json!({"greeting": "héllo", "nested": {"n": 1}}))).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("héllo"));
    assert!(raw.lines().count() > 1);
}

#[test]
fn test_write_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("parents").join("settings.json");
    write_object(&path, &ConfigObject::new()).unwrap();
    assert!(path.exists());
}
