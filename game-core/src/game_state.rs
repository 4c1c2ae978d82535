use crate::{ScoringEngine, WordBank};
use chrono::{DateTime, Utc};
use game_types::{
    Difficulty, GameError, GuessResult, HintResult, SessionId, SessionOutcome, SessionSummary,
    SessionView,
};
use rand::Rng;
use std::collections::BTreeSet;
use tracing::{debug, info};
use uuid::Uuid;

pub const MAX_INCORRECT_GUESSES: u32 = 6;

/// One round of play, from word selection to a win or a loss.
///
/// All mutation goes through [`GameSession::guess`] and [`GameSession::hint`].
/// Both validate before touching any field, so a rejected call leaves the
/// session exactly as it was. Once the outcome is terminal nothing changes.
#[derive(Debug, Clone)]
pub struct GameSession {
    id: SessionId,
    player: String,
    category: String,
    requested_category: String,
    difficulty: Difficulty,
    secret_word: Vec<char>,
    revealed: Vec<Option<char>>,
    guessed_letters: BTreeSet<char>,
    incorrect_guesses: u32,
    hints_used: u32,
    score: u32,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
    outcome: SessionOutcome,
}

impl GameSession {
    /// Start a round with a known secret word.
    pub fn start(
        player: &str,
        category: &str,
        difficulty: Difficulty,
        word: &str,
    ) -> Result<Self, GameError> {
        if player.trim().is_empty() {
            return Err(GameError::InvalidPlayerName);
        }
        if !WordBank::is_valid_word(word) {
            return Err(GameError::InvalidWord {
                word: word.to_string(),
            });
        }

        let secret_word: Vec<char> = word.chars().collect();
        let session = Self {
            id: Uuid::new_v4(),
            player: player.to_string(),
            category: category.to_string(),
            requested_category: category.to_string(),
            difficulty,
            revealed: vec![None; secret_word.len()],
            secret_word,
            guessed_letters: BTreeSet::new(),
            incorrect_guesses: 0,
            hints_used: 0,
            score: 0,
            started_at: Utc::now(),
            ended_at: None,
            outcome: SessionOutcome::InProgress,
        };

        info!(
            "Session {} started for {}: category={}, difficulty={}, word length {}",
            session.id,
            session.player,
            session.category,
            session.difficulty,
            session.secret_word.len()
        );
        Ok(session)
    }

    /// Start a round with a word drawn from the bank. The session shows the
    /// category the word came from but remembers the one asked for, so a
    /// `random` round is recorded as `random`.
    pub fn from_word_bank<R: Rng + ?Sized>(
        bank: &WordBank,
        player: &str,
        category: &str,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if player.trim().is_empty() {
            return Err(GameError::InvalidPlayerName);
        }
        let selected = bank.select_word(category, difficulty, rng)?;
        let mut session = Self::start(player, &selected.category, difficulty, &selected.word)?;
        session.requested_category = category.trim().to_lowercase();
        Ok(session)
    }

    pub fn guess(&mut self, input: &str) -> Result<GuessResult, GameError> {
        if self.outcome.is_terminal() {
            return Err(GameError::GameAlreadyCompleted);
        }

        let letter = Self::parse_letter(input)?;
        if self.guessed_letters.contains(&letter) {
            return Err(GameError::DuplicateGuess { letter });
        }

        self.guessed_letters.insert(letter);
        let revealed_positions = self.reveal(letter);

        let result = if revealed_positions.is_empty() {
            self.incorrect_guesses += 1;
            debug!("Session {}: '{}' is not in the word", self.id, letter);
            GuessResult::Incorrect {
                letter,
                attempts_remaining: self.attempts_remaining(),
            }
        } else {
            let points_earned = ScoringEngine::correct_guess_points(self.difficulty);
            self.score = self.score.saturating_add(points_earned);
            debug!(
                "Session {}: '{}' revealed {} position(s)",
                self.id,
                letter,
                revealed_positions.len()
            );
            GuessResult::Correct {
                letter,
                revealed_positions,
                points_earned,
            }
        };

        self.check_termination();
        Ok(result)
    }

    /// Reveal a random hidden letter at a fixed score cost.
    ///
    /// Candidates are hidden positions. A candidate whose letter was already
    /// guessed is discarded and another is drawn, so the penalty is never
    /// charged twice for one letter.
    pub fn hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<HintResult, GameError> {
        let mut candidates: Vec<usize> = self.hidden_positions();
        if candidates.is_empty() {
            return Err(GameError::NoHintAvailable);
        }
        if self.outcome.is_terminal() {
            return Err(GameError::GameAlreadyCompleted);
        }

        while !candidates.is_empty() {
            let position = candidates.swap_remove(rng.random_range(0..candidates.len()));
            let letter = self.secret_word[position];
            if self.guessed_letters.contains(&letter) {
                debug!(
                    "Session {}: hint candidate '{}' already guessed, drawing again",
                    self.id, letter
                );
                continue;
            }

            self.guessed_letters.insert(letter);
            let revealed_positions = self.reveal(letter);
            self.hints_used += 1;
            self.score = ScoringEngine::apply_hint_penalty(self.score);
            info!(
                "Session {}: hint revealed '{}' ({} hint(s) used)",
                self.id, letter, self.hints_used
            );

            self.check_termination();
            return Ok(HintResult {
                letter,
                revealed_positions,
                penalty: crate::HINT_PENALTY,
            });
        }

        Err(GameError::NoHintAvailable)
    }

    fn parse_letter(input: &str) -> Result<char, GameError> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_lowercase()),
            _ => Err(GameError::InvalidInput {
                input: input.to_string(),
            }),
        }
    }

    /// Uncover every position holding `letter`; returns the newly shown ones.
    fn reveal(&mut self, letter: char) -> Vec<usize> {
        let mut positions = Vec::new();
        for (i, &ch) in self.secret_word.iter().enumerate() {
            if ch == letter && self.revealed[i].is_none() {
                self.revealed[i] = Some(ch);
                positions.push(i);
            }
        }
        positions
    }

    fn hidden_positions(&self) -> Vec<usize> {
        self.revealed
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// Win is checked before loss; at most one transition fires.
    fn check_termination(&mut self) {
        if self.is_word_guessed() {
            let ended_at = Utc::now();
            self.ended_at = Some(ended_at);
            self.outcome = SessionOutcome::Won;
            self.score = ScoringEngine::apply_win_bonus(
                self.score,
                self.difficulty,
                self.attempts_remaining(),
                ScoringEngine::elapsed_seconds(self.started_at, ended_at),
            );
            info!(
                "Session {} won by {} with score {}",
                self.id, self.player, self.score
            );
        } else if self.incorrect_guesses >= MAX_INCORRECT_GUESSES {
            self.ended_at = Some(Utc::now());
            self.outcome = SessionOutcome::Lost;
            info!(
                "Session {} lost by {} with score {}",
                self.id, self.player, self.score
            );
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Category as chosen by the player, possibly `random`.
    pub fn requested_category(&self) -> &str {
        &self.requested_category
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn revealed(&self) -> &[Option<char>] {
        &self.revealed
    }

    /// Guessed letters in alphabetical order.
    pub fn guessed_letters(&self) -> Vec<char> {
        self.guessed_letters.iter().copied().collect()
    }

    pub fn incorrect_guesses(&self) -> u32 {
        self.incorrect_guesses
    }

    pub fn attempts_remaining(&self) -> u32 {
        MAX_INCORRECT_GUESSES - self.incorrect_guesses
    }

    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn outcome(&self) -> SessionOutcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn is_word_guessed(&self) -> bool {
        self.revealed.iter().all(Option::is_some)
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    /// Seconds from start to the terminal transition, or to now while the
    /// round is still running.
    pub fn elapsed_seconds(&self) -> u64 {
        ScoringEngine::elapsed_seconds(self.started_at, self.ended_at.unwrap_or_else(Utc::now))
    }

    /// The secret word, only once the round is over.
    pub fn solution(&self) -> Option<String> {
        self.is_over().then(|| self.secret_word.iter().collect())
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            session_id: self.id,
            player: self.player.clone(),
            category: self.category.clone(),
            difficulty: self.difficulty,
            revealed: self.revealed.clone(),
            guessed_letters: self.guessed_letters(),
            incorrect_guesses: self.incorrect_guesses,
            attempts_remaining: self.attempts_remaining(),
            score: self.score,
            hints_used: self.hints_used,
            outcome: self.outcome,
        }
    }

    /// Final result for the profile aggregator; `None` while in progress.
    pub fn summary(&self) -> Option<SessionSummary> {
        let word = self.solution()?;
        Some(SessionSummary {
            session_id: self.id,
            player: self.player.clone(),
            category: self.category.clone(),
            requested_category: self.requested_category.clone(),
            difficulty: self.difficulty,
            word,
            outcome: self.outcome,
            score: self.score,
            hints_used: self.hints_used,
            incorrect_guesses: self.incorrect_guesses,
            elapsed_seconds: self.elapsed_seconds(),
        })
    }
}
