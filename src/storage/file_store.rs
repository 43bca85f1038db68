//! File-backed key-value store
//!
//! Directory structure:
//! ```text
//! {data-dir}/progress/
//! ├── studyProgress.json          # Global ledger
//! └── studyProgress.hsk1.json     # Per-set ledger
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use super::{validate_key, KeyValueStore, Result, StorageError};

pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `data_dir/progress`, creating it if needed
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        let base_path = data_dir.join("progress");
        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
            log::info!("Created progress store at {}", base_path.display());
        }
        Ok(Self { base_path })
    }

    /// Get the default data directory
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("jin"))
            .ok_or(StorageError::DataDirNotFound)
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get the document path for a key
    fn entry_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.base_path.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key)?;
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        Ok(Some(content))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.entry_path(key)?;
        fs::write(&path, value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let path = self.entry_path(key)?;
        if !path.exists() {
            return Ok(false);
        }

        fs::remove_file(&path)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (FileStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf()).unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_missing_key_is_none() {
        let (store, _temp) = create_test_store();
        assert_eq!(store.get("studyProgress").unwrap(), None);
        assert!(!store.remove("studyProgress").unwrap());
    }

    #[test]
    fn test_values_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        {
            let store = FileStore::new(temp_dir.path().to_path_buf()).unwrap();
            store.set("studyProgress.hsk1", r#"{"totalCards":150}"#).unwrap();
        }

        let reopened = FileStore::new(temp_dir.path().to_path_buf()).unwrap();
        assert_eq!(
            reopened.get("studyProgress.hsk1").unwrap().as_deref(),
            Some(r#"{"totalCards":150}"#)
        );
        assert!(reopened
            .base_path()
            .join("studyProgress.hsk1.json")
            .exists());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let (store, _temp) = create_test_store();
        for key in ["", "../escape", "a/b", ".hidden", "with space"] {
            assert!(
                matches!(store.set(key, "{}"), Err(StorageError::InvalidKey(_))),
                "key {:?} should be rejected",
                key
            );
        }
    }
}
