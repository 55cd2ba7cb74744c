//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::fs;
use std::path::Path;

/// Initialize a new journal at the specified path.
pub fn init(path: &Path, trend_window: Option<usize>) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    let mut config = Config::new();
    if let Some(window) = trend_window {
        config.trend_window = window;
    }
    config.validate()?;

    repo.initialize()?;
    repo.save_config(&config)?;

    println!("Initialized anxlog journal at {}", path.display());
    println!("Trend window: {} entries", config.trend_window);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("journal");

        init(&target, None).unwrap();

        let config = Config::load_from_dir(&target).unwrap();
        assert_eq!(config.trend_window, 7);
    }

    #[test]
    fn test_init_rejects_zero_window_without_side_effects() {
        let temp = TempDir::new().unwrap();

        assert!(init(temp.path(), Some(0)).is_err());
        assert!(!temp.path().join(".anxlog").exists());
    }
}
