//! Logging System
//!
//! Structured logging via the `tracing` crate. The launcher is quiet by
//! default; `--verbose` or an explicit level turns the subscriber on.

use crate::error::LauncherError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration resolved from CLI args and environment.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    pub level: String,

    /// Output format: json, text
    pub format: String,

    /// Enable colored output (text format only)
    pub color: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "off".to_string(),
            format: "text".to_string(),
            color: true,
        }
    }
}

/// Initialize the logging system.
///
/// Priority order (highest to lowest):
/// 1. `CLAUDE_GO_LOG` environment variable (full filter syntax)
/// 2. CLI arguments (`--log-level`, `--log-format`, `--verbose`)
/// 3. Defaults (off)
pub fn init_logging(config: &LoggingConfig) -> Result<(), LauncherError> {
    let filter = build_env_filter(config);
    let format = determine_format(config)?;

    let base_subscriber = Registry::default().with(filter);

    // Logs go to stderr so forwarded child output on stdout stays clean.
    if format == "json" {
        base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(config.color)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

/// Build environment filter from config or the CLAUDE_GO_LOG variable.
fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_env("CLAUDE_GO_LOG") {
        return filter;
    }
    EnvFilter::new(config.level.as_str())
}

/// Determine output format from environment or config.
fn determine_format(config: &LoggingConfig) -> Result<String, LauncherError> {
    if let Ok(format) = std::env::var("CLAUDE_GO_LOG_FORMAT") {
        if format == "json" || format == "text" {
            return Ok(format);
        }
    }

    if config.format != "json" && config.format != "text" {
        return Err(LauncherError::Config(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            config.format
        )));
    }

    Ok(config.format.clone())
}
