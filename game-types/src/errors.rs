use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Signals raised by session setup and session operations.
///
/// Every variant leaves the session and profile untouched: an operation
/// either applies fully or returns one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GameError {
    #[error("unknown category: {category}")]
    UnknownCategory { category: String },
    #[error("unknown difficulty: {difficulty}")]
    UnknownDifficulty { difficulty: String },
    #[error("no words available for {category}/{difficulty}")]
    EmptyWordList { category: String, difficulty: String },
    #[error("invalid word in word list: {word:?}")]
    InvalidWord { word: String },
    #[error("player name must not be empty")]
    InvalidPlayerName,
    #[error("please enter a single letter (got {input:?})")]
    InvalidInput { input: String },
    #[error("you already guessed '{letter}'")]
    DuplicateGuess { letter: char },
    #[error("no hint available")]
    NoHintAvailable,
    #[error("the round is already over")]
    GameAlreadyCompleted,
}

impl GameError {
    /// Errors that prevent a session from starting at all.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            GameError::UnknownCategory { .. }
                | GameError::UnknownDifficulty { .. }
                | GameError::EmptyWordList { .. }
                | GameError::InvalidWord { .. }
                | GameError::InvalidPlayerName
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_family() {
        assert!(GameError::UnknownCategory { category: "x".into() }.is_configuration());
        assert!(GameError::InvalidPlayerName.is_configuration());
        assert!(!GameError::NoHintAvailable.is_configuration());
        assert!(!GameError::DuplicateGuess { letter: 'a' }.is_configuration());
    }

    #[test]
    fn test_error_messages() {
        let err = GameError::DuplicateGuess { letter: 'e' };
        assert_eq!(err.to_string(), "you already guessed 'e'");

        let err = GameError::EmptyWordList {
            category: "food".into(),
            difficulty: "hard".into(),
        };
        assert!(err.to_string().contains("food/hard"));
    }
}
