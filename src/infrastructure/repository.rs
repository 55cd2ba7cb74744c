//! Journal root discovery and on-disk layout

use crate::error::{AnxlogError, Result};
use crate::infrastructure::config::ANXLOG_DIR;
use crate::infrastructure::kv::FileKeyValueStore;
use crate::infrastructure::store::EntryStore;
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that pins the journal root
pub const ROOT_ENV_VAR: &str = "ANXLOG_ROOT";

/// Abstract repository for journal operations
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .anxlog/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .anxlog/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .anxlog directory exists
    fn is_initialized(&self) -> bool;

    /// Create .anxlog directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks ANXLOG_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV_VAR) {
            let path = PathBuf::from(root_path);
            if Self::has_anxlog_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(AnxlogError::Config(format!(
                    "{} is set to '{}' but no .anxlog directory found. \
                    Run 'anxlog init' in that directory or unset {}.",
                    ROOT_ENV_VAR,
                    path.display(),
                    ROOT_ENV_VAR
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_anxlog_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(AnxlogError::NotAnxlogDirectory(start.to_path_buf())),
            }
        }
    }

    /// Directory holding the persisted key-value files
    pub fn data_dir(&self) -> PathBuf {
        self.root.join(ANXLOG_DIR).join("data")
    }

    /// Directory holding log files
    pub fn log_dir(&self) -> PathBuf {
        self.root.join(ANXLOG_DIR).join("logs")
    }

    /// Open the entry store backed by this journal's data directory
    pub fn entry_store(&self) -> EntryStore<FileKeyValueStore> {
        EntryStore::new(FileKeyValueStore::new(self.data_dir()))
    }

    fn has_anxlog_dir(path: &Path) -> bool {
        path.join(ANXLOG_DIR).is_dir()
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_anxlog_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let anxlog_dir = self.root.join(ANXLOG_DIR);

        if anxlog_dir.exists() {
            return Err(AnxlogError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&anxlog_dir)?;
        fs::create_dir(self.data_dir())?;
        Ok(())
    }
}
