use game_types::{Difficulty, PlayerProfile, SessionId};

#[derive(Debug, Clone)]
pub enum GameEvent {
    SessionStarted {
        session_id: SessionId,
        player: String,
        category: String,
        difficulty: Difficulty,
        word_length: usize,
    },
    LetterGuessed {
        session_id: SessionId,
        letter: char,
        correct: bool,
    },
    HintRevealed {
        session_id: SessionId,
        letter: char,
        hints_used: u32,
    },
    SessionWon {
        session_id: SessionId,
        score: u32,
    },
    SessionLost {
        session_id: SessionId,
        score: u32,
    },
    SessionAbandoned {
        session_id: SessionId,
    },
    ProfileUpdated {
        player: String,
        profile: PlayerProfile,
    },
}

impl GameEvent {
    pub fn session_id(&self) -> Option<SessionId> {
        match self {
            GameEvent::SessionStarted { session_id, .. }
            | GameEvent::LetterGuessed { session_id, .. }
            | GameEvent::HintRevealed { session_id, .. }
            | GameEvent::SessionWon { session_id, .. }
            | GameEvent::SessionLost { session_id, .. }
            | GameEvent::SessionAbandoned { session_id } => Some(*session_id),
            GameEvent::ProfileUpdated { .. } => None,
        }
    }
}

/// Event handler trait for processing game events
pub trait GameEventHandler {
    fn handle_event(&mut self, event: GameEvent);
}

/// Simple event bus for distributing game events
pub struct GameEventBus {
    handlers: Vec<Box<dyn GameEventHandler>>,
}

impl GameEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn GameEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn publish(&mut self, event: GameEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(event.clone());
        }
    }
}

impl Default for GameEventBus {
    fn default() -> Self {
        Self::new()
    }
}
