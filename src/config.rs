//! Disposal policy configuration.
//!
//! Configuration is layered: compiled-in defaults, then an optional
//! `lethe.toml`, then `LETHE__`-prefixed environment variables. Running
//! completely configless is supported and selects immediate deletion.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::cleaner::{ArchiveCleaner, Cleaner, DelayedCleaner, DeleteCleaner};
use crate::error::{Error, Result};
use crate::vfs::Vfs;

/// Config file consulted by [`CleanerConfig::load`] when no explicit path
/// is given.
pub const DEFAULT_CONFIG_FILE: &str = "lethe.toml";

/// Which disposal strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CleanerMode {
    /// Remove obsolete files immediately.
    #[default]
    Delete,
    /// Move obsolete logs, manifests and tables into a sibling `archive`
    /// directory.
    Archive,
    /// Buffer paceable deletions and remove them in periodic batches.
    Delayed,
}

impl fmt::Display for CleanerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CleanerMode::Delete => "delete",
            CleanerMode::Archive => "archive",
            CleanerMode::Delayed => "delayed",
        };
        write!(f, "{name}")
    }
}

impl FromStr for CleanerMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "delete" => Ok(CleanerMode::Delete),
            "archive" => Ok(CleanerMode::Archive),
            "delayed" => Ok(CleanerMode::Delayed),
            _ => Err(Error::UnknownMode(s.to_string())),
        }
    }
}

/// Settings for the disposal subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanerConfig {
    /// Active strategy. Defaults to immediate deletion.
    #[serde(default)]
    pub mode: CleanerMode,
    /// Minimum time between paced-delete flushes. Only consulted in
    /// `delayed` mode; zero makes every paceable call flush.
    #[serde(default = "default_interval", with = "humantime_serde")]
    pub interval: Duration,
}

fn default_interval() -> Duration {
    Duration::from_secs(30)
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            mode: CleanerMode::default(),
            interval: default_interval(),
        }
    }
}

impl CleanerConfig {
    /// Load configuration from `lethe.toml` and the environment.
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load configuration, reading the given TOML file if it exists.
    ///
    /// Environment variables use the `LETHE__` prefix and override file
    /// values, e.g. `LETHE__MODE=archive` or `LETHE__INTERVAL=45s`.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config = Figment::from(Serialized::defaults(CleanerConfig::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("LETHE__").split("__"))
            .extract()
            .map_err(Box::new)?;
        Ok(config)
    }

    /// Construct the configured strategy over the given filesystem.
    pub fn build(&self, fs: Arc<dyn Vfs>) -> Arc<dyn Cleaner> {
        match self.mode {
            CleanerMode::Delete => Arc::new(DeleteCleaner::new(fs)),
            CleanerMode::Archive => Arc::new(ArchiveCleaner::new(fs)),
            CleanerMode::Delayed => DelayedCleaner::new(fs, self.interval),
        }
    }
}
