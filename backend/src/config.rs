//! Configuration management for the SwiftReg backend.
//!
//! Settings are loaded from a TOML file when one exists, falling back to
//! defaults otherwise. The configuration is validated on load.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BackendResult, ConfigError};

/// Main configuration structure for the backend
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// CSV seed import settings
    pub import: ImportConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// CSV seed import configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ImportConfig {
    /// CSV files loaded into the registry at startup
    pub seed_files: Vec<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a specific file.
    pub fn load(path: &Path) -> BackendResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        config.validate()?;

        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Load configuration from the given path, or from the default
    /// location when none is given, or fall back to defaults when no
    /// file exists at the default location.
    pub fn load_or_default(path: Option<&Path>) -> BackendResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Self::default_config_path();
                if default_path.exists() {
                    Self::load(&default_path)
                } else {
                    debug!("no configuration file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Default configuration file location.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("swiftreg")
            .join("config.toml")
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Invalid {
                field: "logging.level".to_string(),
                reason: format!(
                    "'{}' is not one of trace, debug, info, warn, error",
                    self.logging.level
                ),
            });
        }

        for seed in &self.import.seed_files {
            if !seed.exists() {
                return Err(ConfigError::Invalid {
                    field: "import.seed_files".to_string(),
                    reason: format!("seed file does not exist: {}", seed.display()),
                });
            }
        }

        Ok(())
    }
}
