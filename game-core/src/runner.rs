use crate::{GameDisplay, GameEvent, GameEventBus, GameSession, ProfileAggregator, WordBank};
use game_types::{
    Difficulty, GameError, GuessResult, Notice, PlayerCommand, PlayerProfile, ProfileMap,
    SessionOutcome, SessionSummary,
};
use rand::Rng;
use tracing::info;

/// Drives rounds: picks words, feeds commands from a [`GameDisplay`] into a
/// [`GameSession`] and folds finished rounds into profiles.
pub struct GameRunner<R> {
    word_bank: WordBank,
    rng: R,
    pub event_bus: GameEventBus,
}

impl<R: Rng> GameRunner<R> {
    pub fn new(word_bank: WordBank, rng: R) -> Self {
        Self {
            word_bank,
            rng,
            event_bus: GameEventBus::new(),
        }
    }

    pub fn word_bank(&self) -> &WordBank {
        &self.word_bank
    }

    pub fn start_session(
        &mut self,
        player: &str,
        category: &str,
        difficulty: Difficulty,
    ) -> Result<GameSession, GameError> {
        let session = GameSession::from_word_bank(
            &self.word_bank,
            player,
            category,
            difficulty,
            &mut self.rng,
        )?;

        self.event_bus.publish(GameEvent::SessionStarted {
            session_id: session.id(),
            player: session.player().to_string(),
            category: session.category().to_string(),
            difficulty,
            word_length: session.revealed().len(),
        });
        Ok(session)
    }

    /// Apply one command. Returns `false` when the player quit.
    pub fn apply_command(
        &mut self,
        session: &mut GameSession,
        command: PlayerCommand,
        display: &mut dyn GameDisplay,
    ) -> bool {
        let notice = match command {
            PlayerCommand::Guess { input } => match session.guess(input.trim()) {
                Ok(result) => {
                    self.event_bus.publish(GameEvent::LetterGuessed {
                        session_id: session.id(),
                        letter: result.letter(),
                        correct: result.is_correct(),
                    });
                    match result {
                        GuessResult::Correct { letter, .. } => Notice::GoodGuess { letter },
                        GuessResult::Incorrect { letter, .. } => Notice::WrongGuess { letter },
                    }
                }
                Err(err) => Notice::Rejected {
                    message: err.to_string(),
                },
            },
            PlayerCommand::Hint => match session.hint(&mut self.rng) {
                Ok(hint) => {
                    self.event_bus.publish(GameEvent::HintRevealed {
                        session_id: session.id(),
                        letter: hint.letter,
                        hints_used: session.hints_used(),
                    });
                    Notice::HintRevealed {
                        letter: hint.letter,
                        penalty: hint.penalty,
                    }
                }
                Err(err) => Notice::Rejected {
                    message: err.to_string(),
                },
            },
            PlayerCommand::Quit => {
                info!("Session {} abandoned by {}", session.id(), session.player());
                self.event_bus.publish(GameEvent::SessionAbandoned {
                    session_id: session.id(),
                });
                return false;
            }
        };

        display.render_notice(&notice);
        true
    }

    /// Play a session to the end. Returns `None` if the player quit first;
    /// an abandoned round is never recorded.
    pub fn play(
        &mut self,
        session: &mut GameSession,
        display: &mut dyn GameDisplay,
    ) -> Option<SessionSummary> {
        while !session.is_over() {
            display.render_session(&session.view());
            let command = display.next_command();
            if !self.apply_command(session, command, display) {
                return None;
            }
        }

        let summary = session.summary()?;
        let event = match summary.outcome {
            SessionOutcome::Won => GameEvent::SessionWon {
                session_id: summary.session_id,
                score: summary.score,
            },
            _ => GameEvent::SessionLost {
                session_id: summary.session_id,
                score: summary.score,
            },
        };
        self.event_bus.publish(event);
        display.render_session(&session.view());
        display.render_result(&summary);
        Some(summary)
    }

    /// Fold a finished round into the player's profile and return the new
    /// profile for persistence.
    pub fn record(&mut self, profiles: &mut ProfileMap, summary: &SessionSummary) -> PlayerProfile {
        let profile = ProfileAggregator::create_or_get(profiles, &summary.player);
        *profile = ProfileAggregator::record_session(profile, summary);
        info!(
            "Recorded {:?} for {} (score {}, {} games played)",
            summary.outcome, summary.player, summary.score, profile.games_played
        );

        let updated = profile.clone();
        self.event_bus.publish(GameEvent::ProfileUpdated {
            player: summary.player.clone(),
            profile: updated.clone(),
        });
        updated
    }
}
