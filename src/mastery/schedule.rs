//! Accuracy-banded review scheduling
//!
//! A studied card comes back for review after a wait that depends on how
//! well it is known:
//! - accuracy below 50%: 1 hour
//! - 50% up to (not including) 80%: 1 day
//! - 80% and above: 3 days
//!
//! The same accuracy also picks the difficulty label shown next to a card:
//! below 40% Hard, 40% up to 75% Medium, 75% and above Easy.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Accuracy at which the review wait grows from one hour to one day
const DAILY_REVIEW_ACCURACY: f64 = 50.0;

/// Accuracy at which the review wait grows from one day to three days
const SPACED_REVIEW_ACCURACY: f64 = 80.0;

const MEDIUM_ACCURACY: f64 = 40.0;
const EASY_ACCURACY: f64 = 75.0;

/// How long to wait before a card with `accuracy` (0-100) is due again
pub fn review_interval(accuracy: f64) -> Duration {
    if accuracy < DAILY_REVIEW_ACCURACY {
        Duration::hours(1)
    } else if accuracy < SPACED_REVIEW_ACCURACY {
        Duration::days(1)
    } else {
        Duration::days(3)
    }
}

/// Difficulty label derived from accuracy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DifficultyTier {
    Hard,
    Medium,
    Easy,
}

impl DifficultyTier {
    pub fn from_accuracy(accuracy: f64) -> Self {
        if accuracy < MEDIUM_ACCURACY {
            Self::Hard
        } else if accuracy < EASY_ACCURACY {
            Self::Medium
        } else {
            Self::Easy
        }
    }

    /// Numeric level used for display: Hard = 3, Medium = 2, Easy = 1
    pub fn level(self) -> u8 {
        match self {
            Self::Hard => 3,
            Self::Medium => 2,
            Self::Easy => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hard => "Hard",
            Self::Medium => "Medium",
            Self::Easy => "Easy",
        }
    }
}

/// Format a review wait as a short label ("1h", "1d", "3d", "2w")
pub fn format_interval(interval: Duration) -> String {
    let minutes = interval.num_minutes();
    if minutes <= 0 {
        "now".to_string()
    } else if minutes < 60 {
        format!("{}m", minutes)
    } else if interval.num_hours() < 24 {
        format!("{}h", interval.num_hours())
    } else if interval.num_days() < 7 {
        format!("{}d", interval.num_days())
    } else {
        format!("{}w", interval.num_days() / 7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_interval_bands() {
        assert_eq!(review_interval(0.0), Duration::hours(1));
        assert_eq!(review_interval(49.9), Duration::hours(1));
        assert_eq!(review_interval(50.0), Duration::days(1));
        assert_eq!(review_interval(79.9), Duration::days(1));
        assert_eq!(review_interval(80.0), Duration::days(3));
        assert_eq!(review_interval(100.0), Duration::days(3));
    }

    #[test]
    fn test_difficulty_band_edges() {
        assert_eq!(DifficultyTier::from_accuracy(0.0), DifficultyTier::Hard);
        assert_eq!(DifficultyTier::from_accuracy(39.99), DifficultyTier::Hard);
        assert_eq!(DifficultyTier::from_accuracy(40.0), DifficultyTier::Medium);
        assert_eq!(DifficultyTier::from_accuracy(74.99), DifficultyTier::Medium);
        assert_eq!(DifficultyTier::from_accuracy(75.0), DifficultyTier::Easy);
        assert_eq!(DifficultyTier::from_accuracy(100.0), DifficultyTier::Easy);
    }

    #[test]
    fn test_difficulty_levels() {
        assert_eq!(DifficultyTier::Hard.level(), 3);
        assert_eq!(DifficultyTier::Medium.level(), 2);
        assert_eq!(DifficultyTier::Easy.level(), 1);
    }

    #[test]
    fn test_format_interval() {
        assert_eq!(format_interval(Duration::zero()), "now");
        assert_eq!(format_interval(Duration::minutes(30)), "30m");
        assert_eq!(format_interval(Duration::hours(1)), "1h");
        assert_eq!(format_interval(Duration::days(1)), "1d");
        assert_eq!(format_interval(Duration::days(3)), "3d");
        assert_eq!(format_interval(Duration::days(14)), "2w");
    }
}
