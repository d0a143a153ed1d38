//! Configuration management

use crate::error::{DaytrackError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the metadata directory at the store root
pub const META_DIR: &str = ".daytrack";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub created: DateTime<Utc>,
    /// Append to existing export files instead of overwriting them
    #[serde(default)]
    pub export_append: bool,
    /// Fail on malformed day log lines instead of stopping the scan there
    #[serde(default)]
    pub strict_day_log: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            created: Utc::now(),
            export_append: false,
            strict_day_log: false,
        }
    }

    /// Load config from .daytrack/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(META_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DaytrackError::NotStoreDirectory(path.to_path_buf())
            } else {
                DaytrackError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| DaytrackError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .daytrack/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let meta_dir = path.join(META_DIR);

        if !meta_dir.exists() {
            fs::create_dir(&meta_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(meta_dir.join("config.toml"), contents)?;

        Ok(())
    }
}
