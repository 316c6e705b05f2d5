//! Editor Integration
//!
//! Opens content in the user's editor via a scratch file and reads the
//! result back. A non-zero editor exit is reported as cancellation, distinct
//! from saving an empty or unchanged document.

use crate::error::LauncherError;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Result of an interactive edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Editor exited cleanly; contains the final text.
    Edited(String),
    /// Editor exited non-zero; nothing should be saved.
    Cancelled,
}

/// Editor command from the environment, `vi` as the fallback.
fn pick_editor() -> String {
    std::env::var("VISUAL")
        .or_else(|_| std::env::var("EDITOR"))
        .unwrap_or_else(|_| "vi".to_string())
}

/// Open `initial` in the editor, named after `target_path` so the editor
/// shows a meaningful filename, and return the edited text.
pub fn open_in_editor(initial: &str, target_path: &Path) -> Result<EditOutcome, LauncherError> {
    let tmp_dir = tempfile::Builder::new()
        .prefix("claude-edit-")
        .tempdir()
        .map_err(|e| LauncherError::Editor(format!("Failed to create scratch dir: {}", e)))?;

    let file_name = target_path
        .file_name()
        .ok_or_else(|| LauncherError::Editor(format!("Invalid path: {}", target_path.display())))?;
    let tmp_file = tmp_dir.path().join(file_name);
    std::fs::write(&tmp_file, initial)?;

    let editor = pick_editor();
    debug!(editor = %editor, file = %tmp_file.display(), "opening editor");

    let status = Command::new(&editor)
        .arg(&tmp_file)
        .status()
        .map_err(|e| LauncherError::Editor(format!("Failed to start {}: {}", editor, e)))?;

    if !status.success() {
        debug!(editor = %editor, ?status, "editor exited non-zero, treating as cancel");
        return Ok(EditOutcome::Cancelled);
    }

    let edited = std::fs::read_to_string(&tmp_file)?;
    Ok(EditOutcome::Edited(edited))
}
