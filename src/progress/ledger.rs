//! Study progress ledger
//!
//! One ledger exists per vocabulary set (or one global ledger). It keeps the
//! session log, counters and streak state, and writes a full
//! [`ProgressSnapshot`] to its store after every mutation.
//!
//! Persistence is best effort: a store that cannot be read or written is
//! logged and otherwise ignored, and unreadable documents load as an empty
//! ledger.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::models::*;
use super::streak::{advance_streak, StreakUpdate};
use crate::clock::Clock;
use crate::storage::{KeyValueStore, Result as StorageResult};

/// Storage key of the global ledger
pub const DEFAULT_LEDGER_KEY: &str = "studyProgress";

type Subscriber = Box<dyn Fn(&ProgressEvent) + Send>;

pub struct StudyProgressLedger {
    key: String,
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    state: ProgressSnapshot,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl StudyProgressLedger {
    /// Open the ledger stored under `key`, or start an empty one
    pub fn open(store: Arc<dyn KeyValueStore>, key: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        let key = key.into();
        let state = load_snapshot(store.as_ref(), &key);
        Self {
            key,
            store,
            clock,
            state,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    // ===== Accessors =====

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn sessions(&self) -> &[StudySession] {
        &self.state.sessions
    }

    pub fn total_cards(&self) -> u32 {
        self.state.total_cards
    }

    pub fn completed_cards(&self) -> u32 {
        self.state.completed_cards
    }

    pub fn last_studied_at(&self) -> Option<DateTime<Utc>> {
        self.state.last_studied_at
    }

    pub fn current_streak(&self) -> u32 {
        self.state.current_streak
    }

    pub fn best_streak(&self) -> u32 {
        self.state.best_streak
    }

    /// The persisted form of this ledger
    pub fn snapshot(&self) -> &ProgressSnapshot {
        &self.state
    }

    // ===== Recording =====

    /// A card was answered correctly
    pub fn record_success(&mut self) {
        self.record_attempt(true);
    }

    /// A card was answered incorrectly
    pub fn record_failure(&mut self) {
        self.record_attempt(false);
    }

    fn record_attempt(&mut self, correct: bool) {
        let now = self.clock.now();
        let streak = self.touch(now);
        if correct {
            self.state.completed_cards = self.state.completed_cards.saturating_add(1);
        }
        self.persist();

        if let Some(event) = streak {
            self.emit(&event);
        }
        self.emit(&ProgressEvent::AttemptRecorded { correct });
    }

    /// Append a finished pass to the session log.
    ///
    /// `correct_answers` is capped at `cards_studied` and negative or
    /// non-finite durations count as zero. A pass with no cards is not a
    /// session and is dropped.
    pub fn complete_session(
        &mut self,
        cards_studied: u32,
        correct_answers: u32,
        duration: f64,
    ) -> Option<StudySession> {
        if cards_studied == 0 {
            log::warn!("Ignoring empty study session for '{}'", self.key);
            return None;
        }

        let now = self.clock.now();
        let duration = if duration.is_finite() { duration.max(0.0) } else { 0.0 };
        let session = StudySession::new(
            now,
            cards_studied,
            correct_answers.min(cards_studied),
            duration,
        );

        let streak = self.touch(now);
        self.state.sessions.push(session.clone());
        self.persist();

        log::info!(
            "Completed session for '{}': {}/{} correct in {:.0}s",
            self.key,
            session.correct_answers,
            session.cards_studied,
            session.total_duration
        );
        if let Some(event) = streak {
            self.emit(&event);
        }
        self.emit(&ProgressEvent::SessionCompleted(session.clone()));
        Some(session)
    }

    /// Advance the streak against the previous study time, then move it to `now`.
    ///
    /// Returns the `StreakChanged` event to emit once the change is persisted.
    fn touch(&mut self, now: DateTime<Utc>) -> Option<ProgressEvent> {
        let before = (self.state.current_streak, self.state.best_streak);
        let previous_day = self.state.last_studied_at.map(|at| self.clock.day_of(at));
        let today = self.clock.day_of(now);

        let update = advance_streak(
            &mut self.state.current_streak,
            &mut self.state.best_streak,
            previous_day,
            today,
        );
        self.state.last_studied_at = Some(now);

        if update != StreakUpdate::SameDay {
            log::debug!(
                "Streak for '{}' {:?}: current {}, best {}",
                self.key,
                update,
                self.state.current_streak,
                self.state.best_streak
            );
        }

        let after = (self.state.current_streak, self.state.best_streak);
        (after != before).then_some(ProgressEvent::StreakChanged {
            current: after.0,
            best: after.1,
        })
    }

    // ===== Maintenance =====

    /// Update the size of the set this ledger tracks
    pub fn set_total_cards(&mut self, total_cards: u32) {
        if self.state.total_cards == total_cards {
            return;
        }
        self.state.total_cards = total_cards;
        self.persist();
    }

    /// Clear all progress
    pub fn reset(&mut self) {
        let total_cards = self.state.total_cards;
        self.state = ProgressSnapshot {
            total_cards,
            ..ProgressSnapshot::default()
        };
        self.persist();
        log::info!("Reset study progress for '{}'", self.key);
        self.emit(&ProgressEvent::Reset);
    }

    // ===== Aggregates =====

    /// Sum of cards studied over all sessions
    pub fn total_cards_studied(&self) -> u32 {
        self.state.sessions.iter().map(|s| s.cards_studied).sum()
    }

    /// Mean of per-session accuracy, each session weighted equally (0.0 - 1.0)
    pub fn average_accuracy(&self) -> f64 {
        if self.state.sessions.is_empty() {
            return 0.0;
        }
        let total: f64 = self.state.sessions.iter().map(|s| s.accuracy()).sum();
        total / self.state.sessions.len() as f64
    }

    /// Correct answers over cards studied across all sessions (0.0 - 1.0)
    pub fn overall_accuracy(&self) -> f64 {
        let studied = self.total_cards_studied();
        if studied == 0 {
            return 0.0;
        }
        let correct: u32 = self.state.sessions.iter().map(|s| s.correct_answers).sum();
        correct as f64 / studied as f64
    }

    /// Seconds spent over all sessions
    pub fn total_study_time(&self) -> f64 {
        self.state.sessions.iter().map(|s| s.total_duration).sum()
    }

    /// Seconds per studied card, 0 with no sessions
    pub fn average_time_per_card(&self) -> f64 {
        let studied = self.total_cards_studied();
        if studied == 0 {
            return 0.0;
        }
        self.total_study_time() / studied as f64
    }

    /// Completed cards over set size, 0 when the set size is unknown
    pub fn completion_ratio(&self) -> f64 {
        if self.state.total_cards == 0 {
            return 0.0;
        }
        self.state.completed_cards as f64 / self.state.total_cards as f64
    }

    pub fn stats(&self) -> ProgressStats {
        ProgressStats {
            total_cards: self.state.total_cards,
            completed_cards: self.state.completed_cards,
            completion_ratio: self.completion_ratio(),
            session_count: self.state.sessions.len(),
            total_cards_studied: self.total_cards_studied(),
            average_accuracy: self.average_accuracy(),
            overall_accuracy: self.overall_accuracy(),
            total_study_time: self.total_study_time(),
            average_time_per_card: self.average_time_per_card(),
            current_streak: self.state.current_streak,
            best_streak: self.state.best_streak,
            last_studied_at: self.state.last_studied_at,
        }
    }

    // ===== Notifications =====

    /// Register a callback invoked after every change
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&ProgressEvent) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback, returning whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != len_before
    }

    fn emit(&self, event: &ProgressEvent) {
        for (_, subscriber) in &self.subscribers {
            subscriber(event);
        }
    }

    // ===== Persistence =====

    fn persist(&self) {
        if let Err(e) = write_snapshot(self.store.as_ref(), &self.key, &self.state) {
            log::warn!("Failed to save study progress '{}': {}", self.key, e);
        }
    }
}

fn write_snapshot(
    store: &dyn KeyValueStore,
    key: &str,
    snapshot: &ProgressSnapshot,
) -> StorageResult<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    store.set(key, &json)
}

fn read_snapshot(store: &dyn KeyValueStore, key: &str) -> StorageResult<Option<ProgressSnapshot>> {
    match store.get(key)? {
        Some(content) => Ok(Some(serde_json::from_str(&content)?)),
        None => Ok(None),
    }
}

/// Read a snapshot, falling back to an empty one on any problem
fn load_snapshot(store: &dyn KeyValueStore, key: &str) -> ProgressSnapshot {
    match read_snapshot(store, key) {
        Ok(Some(mut snapshot)) => {
            snapshot.best_streak = snapshot.best_streak.max(snapshot.current_streak);
            snapshot
        }
        Ok(None) => ProgressSnapshot::default(),
        Err(e) => {
            log::warn!("Discarding unreadable study progress '{}': {}", key, e);
            ProgressSnapshot::default()
        }
    }
}
