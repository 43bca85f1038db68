//! Study progress and streak tracking module

pub mod ledger;
pub mod models;
pub mod registry;
pub mod streak;

pub use ledger::{StudyProgressLedger, DEFAULT_LEDGER_KEY};
pub use models::*;
pub use registry::ProgressRegistry;
