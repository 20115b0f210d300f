//! Viewer configuration
//!
//! Resolution order for each setting: command-line flag, environment
//! variable (handled by clap), `config.toml`, compiled default.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::state::store::Store;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How often the index page re-reads the store
    pub poll_interval_ms: u64,
    /// How long an update notification stays up
    pub notification_secs: u64,
    /// Store file; defaults to the user data directory
    pub store_path: Option<PathBuf>,
    /// Image cache root; defaults to the user cache directory
    pub cache_dir: Option<PathBuf>,
    /// Longest edge of generated thumbnails, in pixels
    pub thumbnail_size: u32,
    /// Default tracing filter when RUST_LOG is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            poll_interval_ms: 2000,
            notification_secs: 5,
            store_path: None,
            cache_dir: None,
            thumbnail_size: 400,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// `~/.config/photo-portfolio/config.toml` on Linux
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("photo-portfolio").join("config.toml"))
    }

    /// Load from `path`. A missing file yields defaults; an unreadable or
    /// invalid one is an error. Runs before logging is set up, so it
    /// reports nothing itself.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(100))
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_secs(self.notification_secs)
    }

    pub fn store_path(&self) -> Result<PathBuf> {
        match &self.store_path {
            Some(path) => Ok(path.clone()),
            None => Store::default_path(),
        }
    }

    /// Root of the thumbnail and preview caches:
    /// ~/.cache/photo-portfolio on Linux
    pub fn cache_root(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.cache_dir {
            return Ok(dir.clone());
        }
        let mut path = dirs_next::cache_dir()
            .or_else(dirs_next::home_dir)
            .ok_or(Error::NoDirectory("cache"))?;
        path.push("photo-portfolio");
        Ok(path)
    }
}
