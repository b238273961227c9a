//! Shared logging setup for asc binaries.
//!
//! Diagnostics always go to stderr so rendered tables on stdout stay clean.

use anyhow::{Context, Result};
use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Filter used when neither `ASC_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "asc=warn,asc_table=warn,asc_resources=warn";

/// Environment variable consulted before `RUST_LOG`.
pub const LOG_ENV: &str = "ASC_LOG";

/// Logging configuration shared by asc binaries.
#[derive(Debug, Clone, Copy)]
pub struct LogConfig<'a> {
    pub app_name: &'a str,
    /// Raise every target to `debug`.
    pub verbose: bool,
    /// Only report errors.
    pub quiet: bool,
}

/// Directive string the console filter is built from.
///
/// `--verbose` and `--quiet` win over the environment; `--verbose` wins over
/// `--quiet` when both are given.
pub fn filter_directives(config: &LogConfig<'_>, env: Option<&str>) -> String {
    if config.verbose {
        "debug".to_string()
    } else if config.quiet {
        "error".to_string()
    } else {
        env.map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_LOG_FILTER)
            .to_string()
    }
}

fn env_directives() -> Option<String> {
    std::env::var(LOG_ENV)
        .ok()
        .or_else(|| std::env::var(EnvFilter::DEFAULT_ENV).ok())
}

/// Install the stderr subscriber.
///
/// A second call in the same process leaves the first subscriber in place.
pub fn init_logging(config: LogConfig<'_>) -> Result<()> {
    let directives = filter_directives(&config, env_directives().as_deref());
    let filter = EnvFilter::try_new(&directives)
        .with_context(|| format!("Invalid log filter for {}: {directives}", config.app_name))?;

    let installed = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(config.verbose)
                .with_filter(filter),
        )
        .try_init();

    if installed.is_err() {
        tracing::debug!(app = config.app_name, "logging already initialised");
    }
    Ok(())
}
