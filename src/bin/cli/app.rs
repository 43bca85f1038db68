use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use jin_lib::clock::{Clock, SystemClock};
use jin_lib::config::JinConfig;
use jin_lib::progress::{ProgressRegistry, StudyProgressLedger};
use jin_lib::storage::{FileStore, KeyValueStore};
use jin_lib::vocabulary::SetKind;

/// Shared application state for CLI commands
pub struct App {
    pub config: JinConfig,
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    registry: ProgressRegistry,
}

impl App {
    /// Initialize from `data_dir`, or the configured/default data directory
    pub fn new(data_dir: Option<&Path>) -> Result<Self> {
        let config_dir = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => FileStore::default_data_dir().context("Failed to get data directory")?,
        };
        let config = JinConfig::load_from_dir(&config_dir)
            .with_context(|| format!("Failed to load config from {}", config_dir.display()))?;

        let data_dir = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => config
                .resolve_data_dir()
                .context("Failed to resolve data directory")?,
        };

        let store: Arc<dyn KeyValueStore> = Arc::new(
            FileStore::new(data_dir.clone())
                .with_context(|| format!("Failed to open store in {}", data_dir.display()))?,
        );
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let registry =
            ProgressRegistry::with_prefix(store.clone(), clock.clone(), config.key_prefix.clone());

        Ok(Self {
            config,
            store,
            clock,
            registry,
        })
    }

    /// Storage key of the ledger a command operates on
    pub fn ledger_key(&self, set: Option<SetKind>) -> String {
        match set {
            Some(kind) => self.registry.ledger_key(kind),
            None => self.config.key_prefix.clone(),
        }
    }

    /// Run `f` against the global ledger, or the ledger of `set`
    pub fn with_ledger<R>(
        &self,
        set: Option<SetKind>,
        f: impl FnOnce(&mut StudyProgressLedger) -> R,
    ) -> Result<R> {
        match set {
            Some(kind) => self
                .registry
                .with_ledger(kind, f)
                .with_context(|| format!("Failed to open progress for {}", kind)),
            None => {
                let mut ledger = StudyProgressLedger::open(
                    self.store.clone(),
                    self.config.key_prefix.clone(),
                    self.clock.clone(),
                );
                Ok(f(&mut ledger))
            }
        }
    }
}
