//! Configuration file handling.
//!
//! Read from `<config dir>/vidcue/config.toml`, or from the file named by
//! `VIDCUE_CONFIG`. Every field has a default, so a missing file or a
//! partial one is fine.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::player::PlayerOptions;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "VIDCUE_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub indicator: IndicatorConfig,
    pub log: LogConfig,
}

/// How to run mpv.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// mpv executable
    pub mpv_path: String,
    /// Extra arguments passed to mpv
    pub extra_args: Vec<String>,
    /// Native window id to render into instead of mpv's own window
    pub window_id: Option<u64>,
    /// Milliseconds to wait for mpv's IPC socket
    pub startup_timeout_ms: u64,
    /// Milliseconds to wait for a reply to one command
    pub ipc_timeout_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            mpv_path: "mpv".to_string(),
            extra_args: Vec::new(),
            window_id: None,
            startup_timeout_ms: 5000,
            ipc_timeout_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    /// Show label and scrub bar at startup
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    /// Log file; defaults to `<state dir>/vidcue/vidcue.log`
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Location of the config file.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("vidcue").join("config.toml"))
    }

    /// Load from the default location.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Player settings; snapshots go to the home directory.
    pub fn player_options(&self) -> PlayerOptions {
        let snapshot_dir = dirs::home_dir().unwrap_or_else(|| {
            tracing::warn!("no home directory, snapshots go to the working directory");
            PathBuf::from(".")
        });
        PlayerOptions {
            snapshot_dir,
            indicator_visible: self.indicator.visible,
        }
    }
}

#[cfg(unix)]
impl BackendConfig {
    pub fn mpv_options(&self) -> crate::backend::MpvOptions {
        crate::backend::MpvOptions {
            program: self.mpv_path.clone(),
            extra_args: self.extra_args.clone(),
            window_id: self.window_id,
            startup_timeout: std::time::Duration::from_millis(self.startup_timeout_ms),
            ipc_timeout: std::time::Duration::from_millis(self.ipc_timeout_ms),
        }
    }
}
