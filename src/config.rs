//! Configuration file
//!
//! Read from `config.toml` in the data directory. Every field is optional:
//!
//! ```toml
//! # Where progress documents are kept (defaults to the platform data dir)
//! data_dir = "/home/me/.local/share/jin"
//! # Storage key of the global ledger; per-set ledgers append ".hsk1" etc.
//! # Letters, digits, '.', '_' and '-' only
//! key_prefix = "studyProgress"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::progress::DEFAULT_LEDGER_KEY;
use crate::storage::{validate_key, FileStore, StorageError};

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid key_prefix {0:?}: use letters, digits, '.', '_' or '-'")]
    InvalidKeyPrefix(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JinConfig {
    pub data_dir: Option<PathBuf>,
    pub key_prefix: String,
}

impl Default for JinConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            key_prefix: DEFAULT_LEDGER_KEY.to_string(),
        }
    }
}

impl JinConfig {
    /// Parse and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: JinConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `config.toml` from `dir`, using defaults if it is missing
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }

        let config = Self::load(&path)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Per-set keys extend the prefix, so it must already be a valid storage key
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_key(&self.key_prefix)
            .map_err(|_| ConfigError::InvalidKeyPrefix(self.key_prefix.clone()))
    }

    /// The configured data directory, or the platform default
    pub fn resolve_data_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(FileStore::default_data_dir()?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = JinConfig::load_from_dir(temp.path()).unwrap();
        assert_eq!(config, JinConfig::default());
        assert_eq!(config.key_prefix, "studyProgress");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "key_prefix = \"jin\"\n").unwrap();

        let config = JinConfig::load_from_dir(temp.path()).unwrap();
        assert_eq!(config.key_prefix, "jin");
        assert_eq!(config.data_dir, None);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "key_prefix = 7").unwrap();

        assert!(matches!(JinConfig::load(&path), Err(ConfigError::Parse(_))));
        assert!(matches!(
            JinConfig::load_from_dir(temp.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_unusable_key_prefix() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);

        for prefix in ["study progress", "../x", ".hidden", ""] {
            fs::write(&path, format!("key_prefix = {:?}\n", prefix)).unwrap();
            match JinConfig::load_from_dir(temp.path()) {
                Err(ConfigError::InvalidKeyPrefix(p)) => assert_eq!(p, prefix),
                other => panic!("prefix {:?} should be rejected, got {:?}", prefix, other),
            }
        }
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let config = JinConfig {
            data_dir: Some(PathBuf::from("/tmp/jin-test")),
            ..JinConfig::default()
        };
        assert_eq!(
            config.resolve_data_dir().unwrap(),
            PathBuf::from("/tmp/jin-test")
        );
    }
}
