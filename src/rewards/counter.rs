//! XP counters for Purrfect Saver
//!
//! The state is a small `Copy` value. Submitting an amount returns the next
//! state instead of mutating anything shared, so the window simply keeps
//! the latest value and redraws from it.

use serde::{Deserialize, Serialize};

use crate::error::{CatResult, NumberKind};
use crate::input::parse_number;

/// One XP point per this many units saved
pub const AMOUNT_PER_POINT: u64 = 5;

/// Points needed to climb one level
pub const POINTS_PER_LEVEL: u64 = 50;

/// Points, level and streak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardState {
    points: u64,
    level: u64,
    streak: u64,
}

/// Outcome of a successful submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    /// XP earned by this submission
    pub gain: u64,
    /// Counters after the submission
    pub state: RewardState,
}

impl Default for RewardState {
    fn default() -> Self {
        Self {
            points: 0,
            level: level_for(0),
            streak: 0,
        }
    }
}

/// Level reached with `points` points
pub fn level_for(points: u64) -> u64 {
    points / POINTS_PER_LEVEL + 1
}

impl RewardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> u64 {
        self.points
    }

    /// Always `points / 50 + 1`
    pub fn level(&self) -> u64 {
        self.level
    }

    pub fn streak(&self) -> u64 {
        self.streak
    }

    /// Turn an entered amount into XP
    ///
    /// # Errors
    ///
    /// Returns an invalid-number error, leaving `self` untouched, when the
    /// text is not a non-negative whole number.
    pub fn submit(&self, amount_text: &str) -> CatResult<Submission> {
        let amount: u64 = parse_number(amount_text, NumberKind::NonNegativeInteger)?;
        let gain = amount / AMOUNT_PER_POINT;
        let points = self.points.saturating_add(gain);

        Ok(Submission {
            gain,
            state: RewardState {
                points,
                level: level_for(points),
                streak: self.streak.saturating_add(1),
            },
        })
    }

    /// Status line shown under the form
    pub fn status_line(&self) -> String {
        format!(
            "Level: {} | Points: {} | Streak: {}",
            self.level, self.points, self.streak
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = RewardState::new();
        assert_eq!(state.points(), 0);
        assert_eq!(state.level(), 1);
        assert_eq!(state.streak(), 0);
    }

    #[test]
    fn test_submit_twenty_five() {
        let submission = RewardState::new().submit("25").unwrap();

        assert_eq!(submission.gain, 5);
        assert_eq!(submission.state.points(), 5);
        assert_eq!(submission.state.level(), 1);
        assert_eq!(submission.state.streak(), 1);
    }

    #[test]
    fn test_submit_rejects_text() {
        let state = RewardState::new().submit("25").unwrap().state;

        let err = state.submit("abc").unwrap_err();

        assert!(err.is_invalid_number());
        assert_eq!(state.points(), 5);
        assert_eq!(state.level(), 1);
        assert_eq!(state.streak(), 1);
    }

    #[test]
    fn test_submit_rejects_negative_and_decimal() {
        let state = RewardState::new();
        assert!(state.submit("-10").is_err());
        assert!(state.submit("12.5").is_err());
        assert!(state.submit("").is_err());
    }

    #[test]
    fn test_small_amounts_still_count_for_streak() {
        let submission = RewardState::new().submit("4").unwrap();
        assert_eq!(submission.gain, 0);
        assert_eq!(submission.state.points(), 0);
        assert_eq!(submission.state.streak(), 1);
    }

    #[test]
    fn test_level_follows_points() {
        let mut state = RewardState::new();
        for _ in 0..4 {
            state = state.submit("60").unwrap().state;
        }
        // 4 * 12 points
        assert_eq!(state.points(), 48);
        assert_eq!(state.level(), 1);

        state = state.submit(" 10 ").unwrap().state;
        assert_eq!(state.points(), 50);
        assert_eq!(state.level(), 2);
        assert_eq!(state.streak(), 5);
        assert_eq!(state.level(), level_for(state.points()));
    }

    #[test]
    fn test_status_line() {
        let state = RewardState::new().submit("250").unwrap().state;
        assert_eq!(state.status_line(), "Level: 2 | Points: 50 | Streak: 1");
    }
}
