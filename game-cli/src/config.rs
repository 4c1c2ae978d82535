use game_types::{Difficulty, GameError, RANDOM_CATEGORY};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub profiles_path: PathBuf,
    pub default_difficulty: Difficulty,
    pub default_category: String,
    pub player: String,
}

impl Config {
    pub fn from_env() -> Result<Self, GameError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults, invalid
    /// values are rejected.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GameError> {
        let profiles_path = lookup("HANGMAN_PROFILES_PATH")
            .unwrap_or_else(|| game_persistence::connection::DEFAULT_PROFILES_PATH.to_string())
            .into();
        let default_difficulty = lookup("HANGMAN_DEFAULT_DIFFICULTY")
            .unwrap_or_else(|| "medium".to_string())
            .parse()?;
        let default_category = lookup("HANGMAN_DEFAULT_CATEGORY")
            .map(|c| c.trim().to_lowercase())
            .unwrap_or_else(|| RANDOM_CATEGORY.to_string());
        let player = lookup("HANGMAN_PLAYER").unwrap_or_else(|| "Guest".to_string());
        if player.trim().is_empty() {
            return Err(GameError::InvalidPlayerName);
        }

        Ok(Self {
            profiles_path,
            default_difficulty,
            default_category,
            player: player.trim().to_string(),
        })
    }
}
