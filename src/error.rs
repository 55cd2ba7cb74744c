//! Error types for anxlog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for anxlog application
#[derive(Debug, Error)]
pub enum AnxlogError {
    #[error("Not an anxlog directory: {0}")]
    NotAnxlogDirectory(PathBuf),

    #[error("Empty entry: nothing to record")]
    EmptyEntry,

    #[error("Invalid anxiety level: {0}")]
    InvalidLevel(String),

    #[error("Confirmation required: {0}")]
    ConfirmationRequired(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Malformed stored data: {0}")]
    MalformedData(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl AnxlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AnxlogError::NotAnxlogDirectory(_) => 2,
            AnxlogError::InvalidLevel(_) | AnxlogError::EmptyEntry => 3,
            AnxlogError::ConfirmationRequired(_) => 4,
            AnxlogError::MalformedData(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            AnxlogError::NotAnxlogDirectory(path) => {
                format!(
                    "Not an anxlog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'anxlog init' in this directory to create a new journal\n\
                    • Navigate to an existing anxlog directory\n\
                    • Set ANXLOG_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            AnxlogError::EmptyEntry => "Empty entry: nothing to record\n\n\
                Add an anxiety level, a trigger or some notes:\n\
                anxlog log --level 2.5\n\
                anxlog log --level high --category work --notes \"deadline stress\""
                .to_string(),
            AnxlogError::InvalidLevel(value) => {
                format!(
                    "Invalid anxiety level: '{}'\n\n\
                    Valid levels:\n\
                    • Numbers from 0 to 5 in steps of 0.5 (e.g., 2.5)\n\
                    • Presets: none, mild, moderate, high, extreme",
                    value
                )
            }
            AnxlogError::ConfirmationRequired(msg) => {
                format!(
                    "{}\n\n\
                    This cannot be undone. Re-run with --yes to confirm:\n\
                    anxlog clear --yes",
                    msg
                )
            }
            AnxlogError::MalformedData(msg) => {
                format!(
                    "Malformed stored data: {}\n\n\
                    Suggestions:\n\
                    • Inspect .anxlog/data/anxiety_entries.json\n\
                    • Check the log files under .anxlog/logs\n\
                    • 'anxlog clear --yes' discards the stored entries",
                    msg
                )
            }
            AnxlogError::Config(msg) => {
                if msg.contains("log level") {
                    format!(
                        "{}\n\n\
                        Valid log levels: trace, debug, info, warn, error\n\
                        Example: anxlog config log_level debug",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using AnxlogError
pub type Result<T> = std::result::Result<T, AnxlogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_anxlog_directory_suggestion() {
        let err = AnxlogError::NotAnxlogDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("anxlog init"));
        assert!(msg.contains("ANXLOG_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_invalid_level_lists_presets() {
        let err = AnxlogError::InvalidLevel("7".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'7'"));
        assert!(msg.contains("none, mild, moderate, high, extreme"));
    }

    #[test]
    fn test_confirmation_required_mentions_yes() {
        let err = AnxlogError::ConfirmationRequired("Refusing to clear 3 entries".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("Refusing to clear 3 entries"));
        assert!(msg.contains("--yes"));
    }

    #[test]
    fn test_config_log_level_suggestions() {
        let err = AnxlogError::Config("Invalid log level: loud".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("trace, debug, info, warn, error"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(AnxlogError::NotAnxlogDirectory(PathBuf::new()).exit_code(), 2);
        assert_eq!(AnxlogError::EmptyEntry.exit_code(), 3);
        assert_eq!(AnxlogError::ConfirmationRequired(String::new()).exit_code(), 4);
        assert_eq!(AnxlogError::MalformedData(String::new()).exit_code(), 5);
        assert_eq!(AnxlogError::Storage(String::new()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = AnxlogError::Storage("disk full".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Storage error: disk full");
    }
}
