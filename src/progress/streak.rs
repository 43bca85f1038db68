//! Daily study streaks
//!
//! A streak counts consecutive calendar days with at least one study event.
//! It is advanced incrementally: each event compares the day of the previous
//! event with today.

use chrono::{Duration, NaiveDate};

/// What a study event did to the streak
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakUpdate {
    /// Nothing studied before, so there is no streak to extend yet
    NoHistory,
    /// Already counted today
    SameDay,
    /// Previous event was yesterday
    Extended,
    /// Gap of two or more days, or the previous event is in the future
    Restarted,
}

/// Advance `current`/`best` for an event on `today`.
///
/// `previous_day` is the day of the last recorded event, before this one
/// overwrote it. `best` is a watermark and never decreases.
pub fn advance_streak(
    current: &mut u32,
    best: &mut u32,
    previous_day: Option<NaiveDate>,
    today: NaiveDate,
) -> StreakUpdate {
    let Some(previous_day) = previous_day else {
        *current = 0;
        return StreakUpdate::NoHistory;
    };

    let update = if previous_day == today {
        return StreakUpdate::SameDay;
    } else if previous_day == today - Duration::days(1) {
        *current = current.saturating_add(1);
        StreakUpdate::Extended
    } else {
        *current = 1;
        StreakUpdate::Restarted
    };

    *best = (*best).max(*current);
    update
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, d).unwrap()
    }

    #[test]
    fn test_no_history_resets_to_zero() {
        let (mut current, mut best) = (4, 6);
        let update = advance_streak(&mut current, &mut best, None, day(10));
        assert_eq!(update, StreakUpdate::NoHistory);
        assert_eq!((current, best), (0, 6));
    }

    #[test]
    fn test_same_day_is_counted_once() {
        let (mut current, mut best) = (2, 2);
        let update = advance_streak(&mut current, &mut best, Some(day(10)), day(10));
        assert_eq!(update, StreakUpdate::SameDay);
        assert_eq!((current, best), (2, 2));
    }

    #[test]
    fn test_consecutive_day_extends() {
        let (mut current, mut best) = (2, 2);
        let update = advance_streak(&mut current, &mut best, Some(day(9)), day(10));
        assert_eq!(update, StreakUpdate::Extended);
        assert_eq!((current, best), (3, 3));
    }

    #[test]
    fn test_gap_restarts_without_lowering_best() {
        let (mut current, mut best) = (5, 5);
        let update = advance_streak(&mut current, &mut best, Some(day(7)), day(10));
        assert_eq!(update, StreakUpdate::Restarted);
        assert_eq!((current, best), (1, 5));
    }

    #[test]
    fn test_restart_lifts_zero_best() {
        let (mut current, mut best) = (0, 0);
        advance_streak(&mut current, &mut best, Some(day(1)), day(10));
        assert_eq!((current, best), (1, 1));
    }

    #[test]
    fn test_future_previous_day_restarts() {
        let (mut current, mut best) = (3, 4);
        let update = advance_streak(&mut current, &mut best, Some(day(12)), day(10));
        assert_eq!(update, StreakUpdate::Restarted);
        assert_eq!((current, best), (1, 4));
    }

    #[test]
    fn test_month_boundary_counts_as_consecutive() {
        let (mut current, mut best) = (1, 1);
        let last_of_march = NaiveDate::from_ymd_opt(2026, 3, 31).unwrap();
        advance_streak(&mut current, &mut best, Some(last_of_march), day(1));
        assert_eq!((current, best), (2, 2));
    }
}
