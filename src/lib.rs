//! Study progress tracking for Chinese vocabulary flashcards
//!
//! - [`mastery`]: per-card accuracy, review scheduling and difficulty
//! - [`progress`]: session log, daily streaks and aggregates, persisted after every change
//! - [`session`]: one pass over a vocabulary set, feeding both of the above
//! - [`storage`]: the key-value stores ledgers persist into

pub mod clock;
pub mod config;
pub mod mastery;
pub mod progress;
pub mod session;
pub mod storage;
pub mod vocabulary;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::JinConfig;
pub use mastery::{CardMastery, DifficultyTier};
pub use progress::{ProgressEvent, ProgressRegistry, StudyProgressLedger, StudySession};
pub use session::SessionDriver;
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use vocabulary::{SetKind, VocabCard, VocabularySet};
