//! CLI parse: clap types for claude-go. No behavior; definitions only.

use crate::target::Target;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// claude-go CLI - pick a target, reconcile its settings, launch it
#[derive(Parser)]
#[command(name = "claude-go")]
#[command(bin_name = "cg")]
#[command(about = "Launcher that merges per-target settings and forwards to claude or k2")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Home directory override (settings live under <base-dir>/.claude)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge settings for a target and launch it (default command)
    Run {
        /// Target to launch; prompted interactively when omitted
        #[arg(value_enum)]
        target: Option<Target>,

        /// Arguments forwarded verbatim to the target executable
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Open a settings file in $VISUAL / $EDITOR and validate the result
    Edit {
        /// Target whose specialized file to edit
        #[arg(value_enum)]
        target: Option<Target>,

        /// Edit the shared settings.json instead of a specialized file
        #[arg(long)]
        common: bool,
    },
    /// Show the resolved settings paths for a target
    Paths {
        #[arg(value_enum)]
        target: Target,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
