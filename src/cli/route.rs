//! CLI route: single route table and run context. Dispatches to the
//! settings, editor, and launch modules.

use crate::cli::parse::Commands;
use crate::editor::{open_in_editor, EditOutcome};
use crate::error::LauncherError;
use crate::launch;
use crate::settings::{self, apply_selection};
use crate::target::Target;
use std::path::PathBuf;
use tracing::info;

/// Runtime context for CLI execution: the resolved home override and
/// whether launching the external command is allowed.
///
/// A `base_dir` override marks a sandboxed run (tests, dry runs); the merge
/// still happens but no child process is spawned.
pub struct RunContext {
    base_dir: Option<PathBuf>,
}

impl RunContext {
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self { base_dir }
    }

    fn base_dir(&self) -> Option<&std::path::Path> {
        self.base_dir.as_deref()
    }

    /// Execute a parsed command, returning the text to print.
    pub fn execute(&self, command: &Commands) -> Result<String, LauncherError> {
        match command {
            Commands::Run { target, args } => self.handle_run(*target, args.clone()),
            Commands::Edit { target, common } => self.handle_edit(*target, *common),
            Commands::Paths { target, format } => self.handle_paths(*target, format),
        }
    }

    fn handle_run(
        &self,
        target: Option<Target>,
        args: Vec<String>,
    ) -> Result<String, LauncherError> {
        let target = match target {
            Some(t) => t,
            None => select_target_interactive()?,
        };

        let outcome = apply_selection(target, args, self.base_dir())?;

        // Sandboxed runs stop after the merge.
        if self.base_dir.is_some() {
            info!(target = %target, "base dir override set, skipping launch");
            return Ok(format!("Merged settings for {} (launch skipped)", target));
        }

        let status = launch::run(&outcome.plan)?;
        match status.code() {
            Some(code) => Ok(format!("{} exited with code {}", target.command(), code)),
            None => Ok(format!("{} terminated by signal", target.command())),
        }
    }

    fn handle_edit(&self, target: Option<Target>, common: bool) -> Result<String, LauncherError> {
        let path = if common {
            let dir = settings::ensure_config_dir(self.base_dir())?;
            dir.join("settings.json")
        } else {
            let target = target.ok_or_else(|| {
                LauncherError::Config(
                    "No target specified and --common not selected".to_string(),
                )
            })?;
            settings::get_paths(target, self.base_dir())?.specialized
        };

        let initial = settings::read_text(&path)?;
        let edited = match open_in_editor(&initial, &path)? {
            EditOutcome::Edited(text) => text,
            EditOutcome::Cancelled => return Err(LauncherError::EditCancelled),
        };

        // Validate before anything is written; bad edits leave the file alone.
        let object = settings::parse_object(&edited, &path)?;
        settings::write_object(&path, &object)?;
        Ok(format!("Saved {}", path.display()))
    }

    fn handle_paths(&self, target: Target, format: &str) -> Result<String, LauncherError> {
        let paths = settings::get_paths(target, self.base_dir())?;
        match format {
            "json" => serde_json::to_string_pretty(&paths)
                .map_err(|e| LauncherError::Config(format!("Failed to render paths: {}", e))),
            "text" => Ok(format!(
                "base dir:    {}\ncommon:      {}\nspecialized: {}",
                paths.base_dir.display(),
                paths.common.display(),
                paths.specialized.display()
            )),
            other => Err(LauncherError::Config(format!(
                "Invalid format: {} (must be 'text' or 'json')",
                other
            ))),
        }
    }
}

/// Prompt for a target when none was given on the command line.
fn select_target_interactive() -> Result<Target, LauncherError> {
    use dialoguer::Select;

    let items: Vec<&str> = Target::ALL.iter().map(|t| t.id()).collect();
    let selection = Select::new()
        .with_prompt("Launch target")
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| LauncherError::Config(format!("Failed to get user input: {}", e)))?;

    Ok(Target::ALL[selection])
}
