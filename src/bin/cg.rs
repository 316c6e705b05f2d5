//! claude-go CLI Binary
//!
//! Command-line entry point: parse arguments, set up logging, dispatch.

use clap::Parser;
use claude_go::cli::{map_error, Cli, Commands, RunContext};
use claude_go::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("claude-go starting");

    // Bare `cg` behaves like `cg run` with the interactive target prompt.
    let command = cli.command.unwrap_or(Commands::Run {
        target: None,
        args: Vec::new(),
    });

    let context = RunContext::new(cli.base_dir);
    match context.execute(&command) {
        Ok(output) => {
            info!("Command completed successfully");
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI arguments.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = LoggingConfig::default();

    if cli.verbose {
        config.level = "info".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    config
}
