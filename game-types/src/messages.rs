use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Commands a display collaborator can issue during a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PlayerCommand {
    Guess { input: String },
    Hint,
    Quit,
}

/// Informational notices the core asks the display to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Notice {
    GoodGuess { letter: char },
    WrongGuess { letter: char },
    HintRevealed { letter: char, penalty: u32 },
    Rejected { message: String },
}
