//! Tracing setup.
//!
//! The TUI owns the terminal, so logs always go to a file under
//! `paths::logs_dir()`; nothing is written to stdout or stderr.

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{LoggingConfig, paths};

/// Environment variable overriding the configured filter.
pub const LOG_ENV: &str = "VAULTGATE_LOG";

/// Picks the env override when present, else the configured default.
///
/// # Errors
/// Returns an error if the chosen directive does not parse.
pub fn build_filter(env_value: Option<&str>, default: &str) -> Result<EnvFilter> {
    let directive = env_value.filter(|v| !v.trim().is_empty()).unwrap_or(default);
    EnvFilter::try_new(directive).with_context(|| format!("Invalid log filter '{directive}'"))
}

/// Installs the global subscriber. Keep the guard alive until exit so
/// buffered lines get flushed.
///
/// # Errors
/// Returns an error if the log directory cannot be created, the filter is
/// invalid, or a subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<WorkerGuard> {
    let dir = paths::logs_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let env_value = std::env::var(LOG_ENV).ok();
    let filter = build_filter(env_value.as_deref(), &config.filter)?;

    let appender = tracing_appender::rolling::never(&dir, &config.file);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))?;

    Ok(guard)
}
