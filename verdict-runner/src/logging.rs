//! Logging setup
//!
//! Every event goes both to stdout and to an append-only log file.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const DEFAULT_LOG_FILE: &str = "main.log";
pub const DEFAULT_FILTER: &str = "info,verdict_runner=debug,verdict_client=debug";

/// Log file path from `LOG_FILE`, falling back to `main.log`
pub fn log_file_path() -> PathBuf {
    std::env::var_os("LOG_FILE")
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
}

/// Installs the global subscriber
pub fn init(log_file: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(fmt::layer().with_writer(std::io::stdout))
        .with(fmt::layer().with_ansi(false).with_writer(Arc::new(file)))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}
