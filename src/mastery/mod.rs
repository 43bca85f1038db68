//! Card mastery tracking
//!
//! This module provides:
//! - Per-card attempt counters and accuracy
//! - Accuracy-banded review scheduling
//! - Difficulty tiers for display

pub mod models;
pub mod schedule;

pub use models::CardMastery;
pub use schedule::{format_interval, review_interval, DifficultyTier};
