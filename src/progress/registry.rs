//! Per-set ledgers
//!
//! Every vocabulary set gets its own ledger, stored under
//! `{prefix}.{set key}` (e.g. `studyProgress.hsk1`). Ledgers live behind a
//! mutex so a record-then-persist sequence is never interleaved with another.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use super::ledger::{StudyProgressLedger, DEFAULT_LEDGER_KEY};
use crate::clock::Clock;
use crate::storage::{KeyValueStore, StorageError};
use crate::vocabulary::{SetKind, VocabularySet};

type Result<T> = std::result::Result<T, StorageError>;

pub struct ProgressRegistry {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    key_prefix: String,
    ledgers: Mutex<HashMap<SetKind, StudyProgressLedger>>,
}

impl ProgressRegistry {
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self::with_prefix(store, clock, DEFAULT_LEDGER_KEY)
    }

    pub fn with_prefix(
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        key_prefix: impl Into<String>,
    ) -> Self {
        Self {
            store,
            clock,
            key_prefix: key_prefix.into(),
            ledgers: Mutex::new(HashMap::new()),
        }
    }

    /// Storage key of the ledger for `kind`
    pub fn ledger_key(&self, kind: SetKind) -> String {
        format!("{}.{}", self.key_prefix, kind.storage_key())
    }

    /// Open the ledger for a loaded set and sync its card count
    pub fn register_set(&self, set: &VocabularySet) -> Result<()> {
        let total_cards = u32::try_from(set.card_count()).unwrap_or(u32::MAX);
        self.with_ledger(set.kind, |ledger| ledger.set_total_cards(total_cards))?;
        log::debug!("Registered '{}' with {} cards", set.name, total_cards);
        Ok(())
    }

    /// Run `f` with exclusive access to the ledger for `kind`, opening it on first use
    pub fn with_ledger<R>(
        &self,
        kind: SetKind,
        f: impl FnOnce(&mut StudyProgressLedger) -> R,
    ) -> Result<R> {
        let mut ledgers = self.ledgers.lock().map_err(|_| StorageError::Poisoned)?;
        let ledger = ledgers.entry(kind).or_insert_with(|| {
            StudyProgressLedger::open(self.store.clone(), self.ledger_key(kind), self.clock.clone())
        });
        Ok(f(ledger))
    }

    /// Completed cards over set size for `kind`
    pub fn completion_ratio(&self, kind: SetKind) -> Result<f64> {
        self.with_ledger(kind, |ledger| ledger.completion_ratio())
    }

    pub fn last_studied(&self, kind: SetKind) -> Result<Option<DateTime<Utc>>> {
        self.with_ledger(kind, |ledger| ledger.last_studied_at())
    }

    pub fn card_count(&self, kind: SetKind) -> Result<u32> {
        self.with_ledger(kind, |ledger| ledger.total_cards())
    }

    /// Sets that have a ledger open in this registry
    pub fn open_sets(&self) -> Result<Vec<SetKind>> {
        let ledgers = self.ledgers.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(ledgers.keys().copied().collect())
    }
}
