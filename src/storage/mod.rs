//! Key-value persistence for study progress
//!
//! Ledgers never talk to the filesystem directly. They are handed a
//! [`KeyValueStore`] and read/write one JSON document per key.

mod file_store;
mod memory_store;

use thiserror::Error;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("Store lock poisoned")]
    Poisoned,
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// A string-keyed store of serialized documents.
///
/// Implementations must be safe to share between ledgers; a single store
/// usually backs the global ledger and every per-set ledger.
pub trait KeyValueStore: Send + Sync {
    /// Read the document stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the document stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`, returning whether it existed
    fn remove(&self, key: &str) -> Result<bool>;
}

/// Check that `key` can be used by every store.
///
/// Keys become file names in [`FileStore`], so only ASCII alphanumerics and
/// `.`, `_`, `-` are allowed, and a key may not start with `.`.
pub fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        for key in ["studyProgress", "studyProgress.hsk1", "jin_v2-progress"] {
            assert!(validate_key(key).is_ok(), "key {:?} should be accepted", key);
        }
        for key in ["", "../escape", "a/b", ".hidden", "with space", "字"] {
            assert!(
                matches!(validate_key(key), Err(StorageError::InvalidKey(_))),
                "key {:?} should be rejected",
                key
            );
        }
    }
}
