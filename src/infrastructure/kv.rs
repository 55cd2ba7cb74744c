//! String-keyed persistence backends

use crate::error::{AnxlogError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Per-process counter that keeps concurrent temp file names apart
static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Minimal key-value storage the entry store is written against
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` when absent
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing an absent key is not an error
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// Directory-backed store: one `<key>.json` file per key
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Create a store rooted at `dir`; the directory is created on first write
    pub fn new(dir: PathBuf) -> Self {
        FileKeyValueStore { dir }
    }

    /// Path of the file that holds `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AnxlogError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    /// Write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the
    /// destination is removed first.
    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let storage_err = |e: std::io::Error| {
            AnxlogError::Storage(format!("Failed to write {}: {}", path.display(), e))
        };

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(storage_err)?;
        }

        let tmp_path = self.dir.join(format!(
            "{}.json.anxlog-tmp-{}-{}",
            key,
            std::process::id(),
            TMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));

        if let Err(e) = fs::write(&tmp_path, value) {
            let _ = fs::remove_file(&tmp_path);
            return Err(storage_err(e));
        }

        if cfg!(windows) && path.exists() {
            fs::remove_file(&path).map_err(storage_err)?;
        }

        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(storage_err(e));
        }
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AnxlogError::Storage(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

/// In-process store backed by a map
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.items
            .lock()
            .map_err(|_| AnxlogError::Storage("memory store lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.lock()?.remove(key);
        Ok(())
    }
}

fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(AnxlogError::Storage(format!("Invalid storage key: '{}'", key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_missing_key_is_none() {
        let temp = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp.path().join("data"));
        assert_eq!(store.get_item("anxiety_entries").unwrap(), None);
    }

    #[test]
    fn test_file_store_set_get_remove() {
        let temp = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp.path().join("data"));

        store.set_item("anxiety_entries", "[1,2]").unwrap();
        assert!(temp.path().join("data/anxiety_entries.json").exists());
        assert_eq!(
            store.get_item("anxiety_entries").unwrap().as_deref(),
            Some("[1,2]")
        );

        // Overwrite
        store.set_item("anxiety_entries", "[]").unwrap();
        assert_eq!(store.get_item("anxiety_entries").unwrap().as_deref(), Some("[]"));

        store.remove_item("anxiety_entries").unwrap();
        assert_eq!(store.get_item("anxiety_entries").unwrap(), None);
    }

    #[test]
    fn test_file_store_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp.path().to_path_buf());
        store.set_item("k", "v").unwrap();
        store.set_item("k", "w").unwrap();

        let names: Vec<String> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["k.json".to_string()]);
    }

    #[test]
    fn test_file_store_concurrent_writers_share_a_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().to_path_buf();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                // Separate instances, as separate services would hold
                let store = FileKeyValueStore::new(dir.clone());
                std::thread::spawn(move || {
                    for j in 0..25 {
                        store
                            .set_item("anxiety_entries", &format!("[{},{}]", i, j))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let names: Vec<String> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["anxiety_entries.json".to_string()]);

        let last = FileKeyValueStore::new(dir)
            .get_item("anxiety_entries")
            .unwrap()
            .unwrap();
        assert!(last.ends_with(",24]"), "unexpected final value {}", last);
    }

    #[test]
    fn test_file_store_remove_missing_is_ok() {
        let temp = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp.path().to_path_buf());
        store.remove_item("nothing_here").unwrap();
    }

    #[test]
    fn test_file_store_read_error_is_storage_error() {
        let temp = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp.path().to_path_buf());
        // A directory where the file should be
        fs::create_dir(temp.path().join("anxiety_entries.json")).unwrap();

        match store.get_item("anxiety_entries") {
            Err(AnxlogError::Storage(_)) => {}
            other => panic!("Expected Storage error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let temp = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp.path().to_path_buf());
        assert!(store.set_item("../escape", "x").is_err());
        assert!(store.get_item("").is_err());
        assert!(store.remove_item("a/b").is_err());
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryKeyValueStore::new();
        assert_eq!(store.get_item("k").unwrap(), None);
        store.set_item("k", "v").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("v"));
        store.remove_item("k").unwrap();
        store.remove_item("k").unwrap();
        assert_eq!(store.get_item("k").unwrap(), None);
    }
}
