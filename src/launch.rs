//! Process Launcher
//!
//! Spawns the selected target executable with forwarded arguments and the
//! environment derived from the merged settings. The extra environment is an
//! explicit map layered over the inherited one at spawn time; the launcher's
//! own process environment is never mutated.

use crate::error::LauncherError;
use crate::target::Target;
use owo_colors::OwoColorize;
use std::collections::BTreeMap;
use std::process::{Command, ExitStatus};
use tracing::{info, warn};

/// Everything needed to start a target process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub target: Target,
    /// Arguments forwarded verbatim from the launcher's own command line.
    pub args: Vec<String>,
    /// Environment variables from the merged settings' `env` object.
    pub env: BTreeMap<String, String>,
}

impl LaunchPlan {
    pub fn new(target: Target, args: Vec<String>, env: BTreeMap<String, String>) -> Self {
        Self { target, args, env }
    }
}

/// Run the plan to completion with inherited stdio.
///
/// Returns the child's exit status; a missing executable maps to
/// `LauncherError::CommandNotFound`, other spawn failures propagate as I/O
/// errors.
pub fn run(plan: &LaunchPlan) -> Result<ExitStatus, LauncherError> {
    let cmd = plan.target.command();
    eprintln!("Starting {} …", cmd.cyan());
    info!(command = cmd, args = ?plan.args, env_keys = plan.env.len(), "launching target");

    let status = Command::new(cmd)
        .args(&plan.args)
        .envs(&plan.env)
        .status()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => LauncherError::CommandNotFound(cmd.to_string()),
            _ => LauncherError::Io(e),
        })?;

    report_exit(cmd, status);
    Ok(status)
}

/// Mirror the child's fate to the terminal.
fn report_exit(cmd: &str, status: ExitStatus) {
    match status.code() {
        Some(0) => eprintln!("{} {} exited with code 0", "✔".green(), cmd),
        Some(code) => {
            warn!(command = cmd, code, "target exited non-zero");
            eprintln!("{} {} exited with code {}", "✖".red(), cmd, code);
        }
        None => {
            warn!(command = cmd, "target terminated by signal");
            eprintln!("{} {} terminated by signal", "⚠".yellow(), cmd);
        }
    }
}
