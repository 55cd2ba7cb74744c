//! Config management use case

use crate::error::{AnxlogError, Result};
use crate::infrastructure::config::normalize_log_level;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "log_level" => Ok(config.log_level.clone()),
            "trend_window" => Ok(config.trend_window.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(AnxlogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: log_level, trend_window, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "log_level" => {
                config.log_level = normalize_log_level(value)?.to_string();
            }
            "trend_window" => {
                config.trend_window = value.trim().parse().map_err(|_| {
                    AnxlogError::Config(format!(
                        "Invalid trend_window: '{}'. Expected a positive integer",
                        value
                    ))
                })?;
            }
            "created" => {
                return Err(AnxlogError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(AnxlogError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: log_level, trend_window",
                    key
                )));
            }
        }

        config.validate()?;
        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
