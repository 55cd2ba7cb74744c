//! Configuration management

use crate::domain::DEFAULT_TREND_WINDOW;
use crate::error::{AnxlogError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the per-journal metadata directory
pub const ANXLOG_DIR: &str = ".anxlog";

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_trend_window")]
    pub trend_window: usize,
    pub created: DateTime<Utc>,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_trend_window() -> usize {
    DEFAULT_TREND_WINDOW
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            log_level: default_log_level(),
            trend_window: default_trend_window(),
            created: Utc::now(),
        }
    }

    /// Load config from .anxlog/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(ANXLOG_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AnxlogError::NotAnxlogDirectory(path.to_path_buf())
            } else {
                AnxlogError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| AnxlogError::Config(format!("Failed to parse config.toml: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to .anxlog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let anxlog_dir = path.join(ANXLOG_DIR);
        let config_path = anxlog_dir.join("config.toml");

        if !anxlog_dir.exists() {
            fs::create_dir(&anxlog_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| AnxlogError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Check values that serde alone cannot
    pub fn validate(&self) -> Result<()> {
        normalize_log_level(&self.log_level)?;
        if self.trend_window == 0 {
            return Err(AnxlogError::Config(
                "trend_window must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Map a user-supplied log level onto the canonical name
pub fn normalize_log_level(level: &str) -> Result<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(AnxlogError::Config(format!(
            "Invalid log level: '{}'",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config() {
        let config = Config::new();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.trend_window, 7);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new();
        config.trend_window = 14;

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".anxlog").exists());
        assert!(temp.path().join(".anxlog/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.log_level, config.log_level);
        assert_eq!(loaded.trend_window, 14);
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        match result.unwrap_err() {
            AnxlogError::NotAnxlogDirectory(_) => {}
            other => panic!("Expected NotAnxlogDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_optional_keys_use_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".anxlog")).unwrap();
        fs::write(
            temp.path().join(".anxlog/config.toml"),
            "created = \"2025-01-17T10:00:00Z\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.log_level, "info");
        assert_eq!(loaded.trend_window, 7);
    }

    #[test]
    fn test_invalid_values_rejected_on_load() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".anxlog")).unwrap();
        fs::write(
            temp.path().join(".anxlog/config.toml"),
            "log_level = \"loud\"\ncreated = \"2025-01-17T10:00:00Z\"\n",
        )
        .unwrap();

        assert!(matches!(
            Config::load_from_dir(temp.path()),
            Err(AnxlogError::Config(_))
        ));
    }

    #[test]
    fn test_zero_trend_window_invalid() {
        let mut config = Config::new();
        config.trend_window = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_normalize_log_level() {
        assert_eq!(normalize_log_level("DEBUG").unwrap(), "debug");
        assert_eq!(normalize_log_level("warning").unwrap(), "warn");
        assert!(normalize_log_level("verbose").is_err());
    }
}
