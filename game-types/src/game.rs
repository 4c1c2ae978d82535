use crate::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;
use uuid::Uuid;

pub type SessionId = Uuid;

/// Pseudo-category that picks a real category uniformly at random.
pub const RANDOM_CATEGORY: &str = "random";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Weight applied to per-letter points and the win bonus.
    pub fn multiplier(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(GameError::UnknownDifficulty {
                difficulty: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SessionOutcome {
    InProgress,
    Won,
    Lost,
}

impl SessionOutcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, SessionOutcome::InProgress)
    }
}

/// What a single accepted guess did to the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GuessResult {
    Correct {
        letter: char,
        revealed_positions: Vec<usize>,
        points_earned: u32,
    },
    Incorrect {
        letter: char,
        attempts_remaining: u32,
    },
}

impl GuessResult {
    pub fn letter(&self) -> char {
        match self {
            GuessResult::Correct { letter, .. } | GuessResult::Incorrect { letter, .. } => *letter,
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, GuessResult::Correct { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HintResult {
    pub letter: char,
    pub revealed_positions: Vec<usize>,
    pub penalty: u32,
}

/// Read-only snapshot of a session for rendering. Never contains the
/// hidden letters of an unfinished word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionView {
    pub session_id: SessionId,
    pub player: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub revealed: Vec<Option<char>>,
    pub guessed_letters: Vec<char>, // sorted
    pub incorrect_guesses: u32,
    pub attempts_remaining: u32,
    pub score: u32,
    pub hints_used: u32,
    pub outcome: SessionOutcome,
}

impl SessionView {
    /// Revealed word with `_` placeholders, letters separated by spaces.
    pub fn masked_word(&self) -> String {
        self.revealed
            .iter()
            .map(|cell| cell.unwrap_or('_').to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Final result of a finished session, handed to the profile aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionSummary {
    pub session_id: SessionId,
    pub player: String,
    pub category: String,
    /// What the player asked for; equals `category` unless it was `random`.
    pub requested_category: String,
    pub difficulty: Difficulty,
    pub word: String,
    pub outcome: SessionOutcome,
    pub score: u32,
    pub hints_used: u32,
    pub incorrect_guesses: u32,
    pub elapsed_seconds: u64,
}

impl SessionSummary {
    pub fn won(&self) -> bool {
        self.outcome == SessionOutcome::Won
    }
}
