//! Settings System
//!
//! The configuration reconciler: resolves the per-target settings layout
//! under `~/.claude/`, deep-merges the specialized file into the common one,
//! and hands the merged result to the launcher. Merging is pure and
//! deterministic; all I/O lives in the `store` submodule.

use crate::error::LauncherError;
use crate::target::Target;
use directories::BaseDirs;
use serde::Serialize;
use std::path::{Path, PathBuf};

mod apply;
mod merge;
mod store;

pub use apply::{apply_selection, extract_env, ApplyOutcome};
pub use merge::merge_configs;
pub use store::{parse_object, read_object, read_text, write_object, ConfigObject};

/// Name of the configuration directory under the home root.
const CONFIG_DIR_NAME: &str = ".claude";

/// Name of the shared baseline settings file.
const COMMON_FILE_NAME: &str = "settings.json";

/// Resolved settings locations for one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paths {
    /// Configuration directory, e.g. `~/.claude`
    pub base_dir: PathBuf,

    /// Shared baseline: `settings.json`
    pub common: PathBuf,

    /// Per-target overrides: `settings.<target>.json`
    pub specialized: PathBuf,
}

/// Resolve the configuration directory and create it if absent.
/// `base_dir` substitutes for the user's home directory when given.
pub fn ensure_config_dir(base_dir: Option<&Path>) -> Result<PathBuf, LauncherError> {
    let home = match base_dir {
        Some(dir) => dir.to_path_buf(),
        None => BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .ok_or_else(|| LauncherError::Config("Could not determine home directory".to_string()))?,
    };

    let dir = home.join(CONFIG_DIR_NAME);
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

/// Derive the path set for a target, ensuring the config directory exists.
pub fn get_paths(target: Target, base_dir: Option<&Path>) -> Result<Paths, LauncherError> {
    let dir = ensure_config_dir(base_dir)?;
    Ok(Paths {
        common: dir.join(COMMON_FILE_NAME),
        specialized: dir.join(format!("settings.{}.json", target.id())),
        base_dir: dir,
    })
}
