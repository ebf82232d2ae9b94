//! Logging setup.
//!
//! The terminal is in raw mode while playing, so log output goes to a file.
//! `RUST_LOG` wins over the configured level.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// `<state dir>/vidcue/vidcue.log`, falling back to the cache dir.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .map(|dir| dir.join("vidcue").join("vidcue.log"))
}

/// Install the global subscriber. Without a usable log location logging is
/// simply off. An error means the location could not be opened; the caller
/// carries on without logging.
pub fn init(config: &LogConfig) -> Result<()> {
    let Some(path) = config.file.clone().or_else(default_log_path) else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
