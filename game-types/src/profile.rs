use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// All known profiles by player name, in creation order.
pub type ProfileMap = IndexMap<String, PlayerProfile>;

/// Durable per-player statistics, keyed by (case-sensitive) player name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct PlayerProfile {
    pub games_played: u32,
    pub games_won: u32,
    pub games_lost: u32,
    pub best_score: u32,
    pub total_score: u64,
    pub favorite_category: Option<String>,
    pub last_played: Option<String>, // RFC 3339
    pub highest_streak: u32,
    pub current_streak: u32,
    /// Plays per category, in first-played order.
    pub category_counts: IndexMap<String, u32>,
}

impl PlayerProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Percentage of games won, 0 when nothing has been played yet.
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) / f64::from(self.games_played) * 100.0
        }
    }
}
