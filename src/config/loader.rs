//! Configuration File Loading
//!
//! Finds and loads engine configuration from standard locations, with an
//! environment-variable override and graceful fallback to defaults when no
//! file exists.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{ConfigError, EngineConfig};

/// Environment variable naming an explicit config file path
const CONFIG_PATH_ENV: &str = "BUDDYTERM_CONFIG";

/// Config file name searched for in standard locations
const CONFIG_FILE_NAME: &str = "buddyterm.toml";

/// Configuration file loader
pub struct ConfigLoader {
    /// Search paths for configuration files
    search_paths: Vec<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader with the standard search paths
    pub fn new() -> Self {
        Self {
            search_paths: Self::search_paths(),
        }
    }

    /// Load configuration from the first file found, or defaults
    ///
    /// A missing file is not an error; a file that exists but fails to parse
    /// or validate is.
    pub fn load() -> Result<EngineConfig, ConfigError> {
        let loader = Self::new();

        for path in &loader.search_paths {
            if path.exists() {
                debug!("loading config from {}", path.display());
                return Self::load_from_path(path);
            }
        }

        debug!("no config file found, using defaults");
        Ok(EngineConfig::default())
    }

    /// Load and validate configuration from an explicit path
    pub fn load_from_path(path: &Path) -> Result<EngineConfig, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&content)?;
        if let Err(e) = config.validate() {
            warn!("config at {} failed validation: {}", path.display(), e);
            return Err(e);
        }
        Ok(config)
    }

    /// Standard search paths, highest priority first
    fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. Explicit override
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            paths.push(PathBuf::from(path));
        }

        // 2. Working directory
        paths.push(PathBuf::from(CONFIG_FILE_NAME));

        // 3. User config directory
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("buddyterm").join("config.toml"));
        }

        paths
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
