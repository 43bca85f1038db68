//! Study progress data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A finished pass over a vocabulary set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    pub id: Uuid,
    pub completed_at: DateTime<Utc>,
    pub cards_studied: u32,
    pub correct_answers: u32,
    /// Seconds spent on the pass
    pub total_duration: f64,
}

impl StudySession {
    pub fn new(
        completed_at: DateTime<Utc>,
        cards_studied: u32,
        correct_answers: u32,
        total_duration: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            completed_at,
            cards_studied,
            correct_answers,
            total_duration,
        }
    }

    /// Fraction of cards answered correctly, 0.0 - 1.0
    pub fn accuracy(&self) -> f64 {
        if self.cards_studied == 0 {
            return 0.0;
        }
        self.correct_answers as f64 / self.cards_studied as f64
    }
}

/// Everything a ledger persists, as stored under its key
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    #[serde(default)]
    pub sessions: Vec<StudySession>,
    #[serde(default)]
    pub total_cards: u32,
    #[serde(default)]
    pub completed_cards: u32,
    #[serde(default)]
    pub last_studied_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub best_streak: u32,
}

/// Change notifications emitted by a ledger
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    /// A single card was answered
    AttemptRecorded { correct: bool },
    /// A pass was finished and appended to the session log
    SessionCompleted(StudySession),
    /// Current or best streak moved
    StreakChanged { current: u32, best: u32 },
    /// The ledger was cleared
    Reset,
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// Summary of a ledger, used by front ends
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    pub total_cards: u32,
    pub completed_cards: u32,
    pub completion_ratio: f64,
    pub session_count: usize,
    pub total_cards_studied: u32,
    pub average_accuracy: f64,
    pub overall_accuracy: f64,
    pub total_study_time: f64,
    pub average_time_per_card: f64,
    pub current_streak: u32,
    pub best_streak: u32,
    pub last_studied_at: Option<DateTime<Utc>>,
}
