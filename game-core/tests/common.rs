#![allow(dead_code)]

use game_core::{GameDisplay, GameEvent, GameEventHandler, GameSession, WordBank};
use game_types::{
    Difficulty, Notice, PlayerCommand, PlayerProfile, SessionSummary, SessionView,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Creates a small word bank with known words
pub fn create_test_bank() -> WordBank {
    let mut bank = WordBank::new();
    bank.add_words("animals", Difficulty::Easy, ["dog", "cat"]).unwrap();
    bank.add_words("animals", Difficulty::Hard, ["platypus"]).unwrap();
    bank.add_words("food", Difficulty::Easy, ["pie"]).unwrap();
    bank
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a session with a specific secret word
pub fn create_session(word: &str, difficulty: Difficulty) -> GameSession {
    GameSession::start("Alice", "animals", difficulty, word).unwrap()
}

/// Distinct letters of a word in first-seen order
pub fn distinct_letters(word: &str) -> Vec<char> {
    let mut letters = Vec::new();
    for ch in word.chars() {
        if !letters.contains(&ch) {
            letters.push(ch);
        }
    }
    letters
}

pub fn guess_all(session: &mut GameSession, letters: &[&str]) {
    for letter in letters {
        session.guess(letter).unwrap();
    }
}

/// Event collector for testing event emissions
#[derive(Clone, Default)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_events(&self) -> Vec<GameEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn has_event_type(&self, check_fn: impl Fn(&GameEvent) -> bool) -> bool {
        self.events.lock().unwrap().iter().any(check_fn)
    }
}

impl GameEventHandler for EventCollector {
    fn handle_event(&mut self, event: GameEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Display that replays a fixed list of commands and records what it was
/// asked to show. Runs out of commands by quitting.
#[derive(Default)]
pub struct ScriptedDisplay {
    pub commands: VecDeque<PlayerCommand>,
    pub views: Vec<SessionView>,
    pub notices: Vec<Notice>,
    pub results: Vec<SessionSummary>,
    pub profiles: Vec<(String, PlayerProfile)>,
}

impl ScriptedDisplay {
    pub fn new(commands: Vec<PlayerCommand>) -> Self {
        Self {
            commands: commands.into(),
            ..Self::default()
        }
    }

    pub fn guesses(letters: &[&str]) -> Self {
        Self::new(
            letters
                .iter()
                .map(|l| PlayerCommand::Guess {
                    input: l.to_string(),
                })
                .collect(),
        )
    }
}

impl GameDisplay for ScriptedDisplay {
    fn render_session(&mut self, view: &SessionView) {
        self.views.push(view.clone());
    }

    fn render_notice(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }

    fn render_result(&mut self, summary: &SessionSummary) {
        self.results.push(summary.clone());
    }

    fn render_profile(&mut self, player: &str, profile: &PlayerProfile) {
        self.profiles.push((player.to_string(), profile.clone()));
    }

    fn next_command(&mut self) -> PlayerCommand {
        self.commands.pop_front().unwrap_or(PlayerCommand::Quit)
    }
}
