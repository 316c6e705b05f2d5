//! claude-go: Target Launcher with Settings Reconciliation
//!
//! Picks between the `claude` and `k2` execution targets, deep-merges the
//! target's specialized settings into the shared `~/.claude/settings.json`,
//! injects the resulting environment variables, and forwards all arguments
//! to the target executable.

pub mod cli;
pub mod editor;
pub mod error;
pub mod launch;
pub mod logging;
pub mod settings;
pub mod target;
