use chrono::{DateTime, Utc};
use game_types::Difficulty;

pub const POINTS_PER_CORRECT_GUESS: u32 = 10;
pub const WIN_BONUS_BASE: u32 = 50;
pub const HINT_PENALTY: u32 = 25;
pub const TIME_BONUS_WINDOW_SECS: u64 = 300;

/// Pure scoring rules. Scores are unsigned, so every subtraction saturates
/// at zero and a score can never be observed negative.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Points for a guess that reveals at least one new position. Awarded
    /// once per guess, not per revealed occurrence.
    pub fn correct_guess_points(difficulty: Difficulty) -> u32 {
        POINTS_PER_CORRECT_GUESS * difficulty.multiplier()
    }

    pub fn win_bonus(difficulty: Difficulty, attempts_remaining: u32) -> u32 {
        WIN_BONUS_BASE * difficulty.multiplier() * (attempts_remaining + 1)
    }

    /// One point per second under the five minute window.
    pub fn time_bonus(elapsed_seconds: u64) -> u32 {
        // Bounded by the window, so the narrowing is lossless.
        TIME_BONUS_WINDOW_SECS.saturating_sub(elapsed_seconds) as u32
    }

    /// Whole seconds between two instants, truncated. A clock that went
    /// backwards counts as zero.
    pub fn elapsed_seconds(start: DateTime<Utc>, end: DateTime<Utc>) -> u64 {
        u64::try_from((end - start).num_seconds()).unwrap_or(0)
    }

    pub fn apply_hint_penalty(score: u32) -> u32 {
        score.saturating_sub(HINT_PENALTY)
    }

    /// Score after the win transition: accumulated score plus win and time
    /// bonuses.
    pub fn apply_win_bonus(
        score: u32,
        difficulty: Difficulty,
        attempts_remaining: u32,
        elapsed_seconds: u64,
    ) -> u32 {
        score
            .saturating_add(Self::win_bonus(difficulty, attempts_remaining))
            .saturating_add(Self::time_bonus(elapsed_seconds))
    }
}
