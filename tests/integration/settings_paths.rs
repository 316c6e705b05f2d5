//! Path resolution under an isolated home directory.

use claude_go::settings::{ensure_config_dir, get_paths};
use claude_go::target::Target;
use tempfile::TempDir;

#[test]
fn test_paths_nested_under_dot_claude() {
    let home = TempDir::new().unwrap();
    let paths = get_paths(Target::Claude, Some(home.path())).unwrap();

    assert_eq!(paths.base_dir, home.path().join(".claude"));
    assert!(paths.common.ends_with("settings.json"));
    assert!(paths.specialized.ends_with("settings.claude.json"));
    assert!(paths.common.starts_with(&paths.base_dir));
    assert!(paths.specialized.starts_with(&paths.base_dir));
}

#[test]
fn test_get_paths_creates_config_dir() {
    let home = TempDir::new().unwrap();
    assert!(!home.path().join(".claude").exists());

    let paths = get_paths(Target::K2, Some(home.path())).unwrap();
    assert!(paths.base_dir.is_dir());
}

#[test]
fn test_targets_share_common_file() {
    let home = TempDir::new().unwrap();
    let claude = get_paths(Target::Claude, Some(home.path())).unwrap();
    let k2 = get_paths(Target::K2, Some(home.path())).unwrap();

    assert_eq!(claude.common, k2.common);
    assert_ne!(claude.specialized, k2.specialized);
}

#[test]
fn test_ensure_config_dir_with_existing_dir() {
    let home = TempDir::new().unwrap();
    std::fs::create_dir_all(home.path().join(".claude")).unwrap();
    let dir = ensure_config_dir(Some(home.path())).unwrap();
    assert_eq!(dir, home.path().join(".claude"));
}
