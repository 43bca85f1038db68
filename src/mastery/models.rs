//! Per-card mastery tracking

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::schedule::{review_interval, DifficultyTier};

/// Attempt history for one card in a study set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardMastery {
    pub id: Uuid,
    #[serde(default)]
    pub correct_attempts: u32,
    #[serde(default)]
    pub total_attempts: u32,
    #[serde(default)]
    pub has_been_studied: bool,
    #[serde(default)]
    pub last_studied_at: Option<DateTime<Utc>>,
}

impl CardMastery {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            correct_attempts: 0,
            total_attempts: 0,
            has_been_studied: false,
            last_studied_at: None,
        }
    }

    /// Record an answer given now
    pub fn record_attempt(&mut self, correct: bool) {
        self.record_attempt_at(correct, Utc::now());
    }

    /// Record an answer given at `at`
    pub fn record_attempt_at(&mut self, correct: bool, at: DateTime<Utc>) {
        self.has_been_studied = true;
        self.total_attempts = self.total_attempts.saturating_add(1);
        if correct {
            self.correct_attempts = self.correct_attempts.saturating_add(1);
        }
        self.last_studied_at = Some(at);
    }

    /// Percentage of correct attempts, 0 when never attempted
    pub fn accuracy(&self) -> f64 {
        if self.total_attempts == 0 {
            return 0.0;
        }
        (self.correct_attempts as f64 * 100.0) / self.total_attempts as f64
    }

    /// The review wait currently in effect, `None` if never studied
    pub fn review_interval(&self) -> Option<Duration> {
        self.last_studied_at.map(|_| review_interval(self.accuracy()))
    }

    /// When the card becomes due again, `None` if it is due right away
    pub fn next_review_at(&self) -> Option<DateTime<Utc>> {
        let last = self.last_studied_at?;
        Some(last + review_interval(self.accuracy()))
    }

    /// Whether the card should be shown again at `now`
    pub fn due_for_review(&self, now: DateTime<Utc>) -> bool {
        match self.last_studied_at {
            None => true,
            Some(last) => now - last >= review_interval(self.accuracy()),
        }
    }

    pub fn difficulty_tier(&self) -> DifficultyTier {
        DifficultyTier::from_accuracy(self.accuracy())
    }

    /// Forget all history, used when a new set is loaded
    pub fn reset(&mut self) {
        *self = Self::new(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at_noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 4, 12, 0, 0).unwrap()
    }

    /// A card with `correct` of `total` attempts, last studied at `at`
    fn card_with(correct: u32, total: u32, at: DateTime<Utc>) -> CardMastery {
        let mut card = CardMastery::new(Uuid::new_v4());
        for i in 0..total {
            card.record_attempt_at(i < correct, at);
        }
        card
    }

    #[test]
    fn test_new_card_has_zero_accuracy() {
        let card = CardMastery::new(Uuid::new_v4());
        assert_eq!(card.accuracy(), 0.0);
        assert!(!card.has_been_studied);
        assert_eq!(card.review_interval(), None);
        assert_eq!(card.next_review_at(), None);
    }

    #[test]
    fn test_record_attempt_counts() {
        let mut card = CardMastery::new(Uuid::new_v4());
        let outcomes = [true, false, true, true, false, false, true];
        for (i, correct) in outcomes.iter().enumerate() {
            card.record_attempt(*correct);
            assert!(card.correct_attempts <= card.total_attempts);
            assert_eq!(card.total_attempts, i as u32 + 1);
        }
        assert_eq!(card.correct_attempts, 4);
        assert!(card.has_been_studied);
        assert!(card.last_studied_at.is_some());
    }

    #[test]
    fn test_never_studied_is_always_due() {
        let card = CardMastery::new(Uuid::new_v4());
        assert!(card.due_for_review(at_noon()));
        assert!(card.due_for_review(DateTime::<Utc>::MIN_UTC));
    }

    #[test]
    fn test_low_accuracy_due_after_an_hour() {
        let now = at_noon();

        let card = card_with(3, 10, now - Duration::minutes(59));
        assert_eq!(card.accuracy(), 30.0);
        assert!(!card.due_for_review(now));

        let card = card_with(3, 10, now - Duration::minutes(61));
        assert!(card.due_for_review(now));
    }

    #[test]
    fn test_medium_and_high_accuracy_intervals() {
        let now = at_noon();

        let medium = card_with(1, 2, now - Duration::hours(23));
        assert!(!medium.due_for_review(now));
        assert!(medium.due_for_review(now + Duration::hours(1)));

        let high = card_with(4, 5, now - Duration::days(2));
        assert_eq!(high.review_interval(), Some(Duration::days(3)));
        assert!(!high.due_for_review(now));
        assert!(high.due_for_review(now + Duration::days(1)));
        assert_eq!(
            high.next_review_at(),
            Some(now - Duration::days(2) + Duration::days(3))
        );
    }

    #[test]
    fn test_difficulty_tier_from_attempts() {
        let now = at_noon();
        assert_eq!(card_with(1, 3, now).difficulty_tier(), DifficultyTier::Hard);
        assert_eq!(card_with(2, 5, now).difficulty_tier(), DifficultyTier::Medium);
        assert_eq!(card_with(3, 4, now).difficulty_tier(), DifficultyTier::Easy);
        assert_eq!(
            CardMastery::new(Uuid::new_v4()).difficulty_tier(),
            DifficultyTier::Hard
        );
    }

    #[test]
    fn test_reset_keeps_identity() {
        let mut card = card_with(2, 3, at_noon());
        let id = card.id;
        card.reset();
        assert_eq!(card, CardMastery::new(id));
    }
}
