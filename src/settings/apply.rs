//! Apply flow: read both settings files, merge, write back, build the
//! launch plan. Read-modify-write on the common file is unlocked; concurrent
//! invocations race and the last writer wins.

use crate::editor::{open_in_editor, EditOutcome};
use crate::error::LauncherError;
use crate::launch::LaunchPlan;
use crate::settings::store::{self, ConfigObject};
use crate::settings::{get_paths, merge_configs, Paths};
use crate::target::Target;
use owo_colors::OwoColorize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// Result of applying a target selection.
#[derive(Debug)]
pub struct ApplyOutcome {
    pub paths: Paths,
    pub merged: ConfigObject,
    pub plan: LaunchPlan,
}

/// Merge the specialized settings for `target` into the common file and
/// produce the launch plan for it.
///
/// When the specialized file is missing, the user's editor is opened to
/// create it first; cancelling the edit aborts the whole apply.
pub fn apply_selection(
    target: Target,
    forward_args: Vec<String>,
    base_dir: Option<&Path>,
) -> Result<ApplyOutcome, LauncherError> {
    let paths = get_paths(target, base_dir)?;

    if !paths.specialized.exists() {
        create_specialized(&paths)?;
    }

    let common = store::read_object(&paths.common)?.unwrap_or_default();
    let specialized = store::read_object(&paths.specialized)?.unwrap_or_default();

    let merged = merge_configs(&common, &specialized);
    store::write_object(&paths.common, &merged)?;
    info!(target = %target, common = %paths.common.display(), "merge complete");
    eprintln!(
        "{} Merge complete. Updated {}",
        "✔".green(),
        paths.common.display().to_string().green()
    );

    let env = extract_env(&merged);
    let plan = LaunchPlan::new(target, forward_args, env);

    Ok(ApplyOutcome {
        paths,
        merged,
        plan,
    })
}

/// Open the editor on an empty skeleton and persist the result as the
/// specialized file, validating it parses to a JSON object first.
fn create_specialized(paths: &Paths) -> Result<(), LauncherError> {
    let name = paths
        .specialized
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| paths.specialized.display().to_string());
    eprintln!(
        "No specialized config {} found; opening editor to create it…",
        name.cyan()
    );

    let edited = match open_in_editor("{}\n", &paths.specialized)? {
        EditOutcome::Edited(text) => text,
        EditOutcome::Cancelled => return Err(LauncherError::EditCancelled),
    };

    let object = store::parse_object(&edited, &paths.specialized)?;
    store::write_object(&paths.specialized, &object)?;
    eprintln!("{} Created {}. Continuing to merge…", "✔".green(), name.green());
    Ok(())
}

/// Pull the `env` object out of merged settings as child-process variables.
/// String values pass through; other values keep their JSON rendering.
pub fn extract_env(merged: &ConfigObject) -> BTreeMap<String, String> {
    let mut env = BTreeMap::new();
    if let Some(Value::Object(entries)) = merged.get("env") {
        for (key, value) in entries {
            let rendered = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            env.insert(key.clone(), rendered);
        }
    }
    env
}
