use game_core::{GameDisplay, MAX_INCORRECT_GUESSES};
use game_types::{Notice, PlayerCommand, PlayerProfile, SessionOutcome, SessionSummary, SessionView};
use std::io::{BufRead, Write};

/// Line-oriented display over any reader/writer pair.
///
/// Write errors are ignored: the terminal going away ends the game through
/// end-of-input on the reader side instead.
pub struct TerminalDisplay<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalDisplay<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn line(&mut self, text: &str) {
        let _ = writeln!(self.output, "{text}");
    }

    /// Print a prompt and read one trimmed line; `None` on end of input.
    pub fn prompt(&mut self, prompt: &str) -> Option<String> {
        let _ = write!(self.output, "{prompt}");
        let _ = self.output.flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

/// `?` asks for a hint, `!` leaves the round, anything else is a guess.
pub fn parse_command(line: &str) -> PlayerCommand {
    match line.trim().to_lowercase().as_str() {
        "?" | "hint" => PlayerCommand::Hint,
        "!" | "quit" => PlayerCommand::Quit,
        _ => PlayerCommand::Guess {
            input: line.trim().to_string(),
        },
    }
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl<R: BufRead, W: Write> GameDisplay for TerminalDisplay<R, W> {
    fn render_session(&mut self, view: &SessionView) {
        self.line("");
        self.line(&format!(
            "Player: {} | Difficulty: {} | Category: {}",
            view.player,
            capitalize(view.difficulty.as_str()),
            capitalize(&view.category)
        ));
        self.line(&format!("Score: {} | Hints Used: {}", view.score, view.hints_used));
        self.line(&format!("Word: {}", view.masked_word()));

        let guessed = if view.guessed_letters.is_empty() {
            "None".to_string()
        } else {
            view.guessed_letters
                .iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };
        self.line(&format!("Guessed letters: {guessed}"));
        self.line(&format!(
            "Remaining attempts: {}/{}",
            view.attempts_remaining, MAX_INCORRECT_GUESSES
        ));
    }

    fn render_notice(&mut self, notice: &Notice) {
        let text = match notice {
            Notice::GoodGuess { letter } => format!("Good guess! '{letter}' is in the word."),
            Notice::WrongGuess { letter } => format!("Incorrect guess: no '{letter}'."),
            Notice::HintRevealed { letter, penalty } => {
                format!("Hint: the letter '{letter}' is in the word! (-{penalty} points)")
            }
            Notice::Rejected { message } => capitalize(message),
        };
        self.line(&text);
    }

    fn render_result(&mut self, summary: &SessionSummary) {
        self.line("");
        match summary.outcome {
            SessionOutcome::Won => {
                self.line(&format!(
                    "Congratulations, {}! You guessed the word: {}",
                    summary.player, summary.word
                ));
                self.line(&format!(
                    "Time taken: {} minutes and {} seconds",
                    summary.elapsed_seconds / 60,
                    summary.elapsed_seconds % 60
                ));
            }
            _ => {
                self.line(&format!(
                    "Sorry, {}! You've run out of attempts.",
                    summary.player
                ));
                self.line(&format!("The word was: {}", summary.word));
            }
        }
        self.line(&format!("Your score: {}", summary.score));
    }

    fn render_profile(&mut self, player: &str, profile: &PlayerProfile) {
        self.line(&"=".repeat(40));
        self.line(&format!("  Player Stats: {player}"));
        self.line(&"=".repeat(40));
        self.line(&format!("  Games Played: {}", profile.games_played));
        self.line(&format!("  Games Won: {}", profile.games_won));
        self.line(&format!("  Games Lost: {}", profile.games_lost));
        self.line(&format!("  Win Rate: {:.1}%", profile.win_rate()));
        self.line(&format!("  Best Score: {}", profile.best_score));
        self.line(&format!("  Total Score: {}", profile.total_score));
        self.line(&format!("  Current Streak: {}", profile.current_streak));
        self.line(&format!("  Highest Streak: {}", profile.highest_streak));
        if let Some(category) = &profile.favorite_category {
            self.line(&format!("  Favorite Category: {}", capitalize(category)));
        }
        if let Some(last_played) = &profile.last_played {
            self.line(&format!("  Last Played: {last_played}"));
        }
        self.line(&"=".repeat(40));
    }

    fn next_command(&mut self) -> PlayerCommand {
        match self.prompt("\nEnter a letter ('?' for a hint, '!' to quit): ") {
            Some(line) => parse_command(&line),
            None => PlayerCommand::Quit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_types::Difficulty;
    use std::io::Cursor;
    use uuid::Uuid;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("?"), PlayerCommand::Hint);
        assert_eq!(parse_command(" HINT "), PlayerCommand::Hint);
        assert_eq!(parse_command("!"), PlayerCommand::Quit);
        assert_eq!(
            parse_command(" e "),
            PlayerCommand::Guess {
                input: "e".to_string()
            }
        );
    }

    #[test]
    fn test_next_command_quits_on_eof() {
        let mut display = TerminalDisplay::new(Cursor::new(""), Vec::new());
        assert_eq!(display.next_command(), PlayerCommand::Quit);
    }

    #[test]
    fn test_render_session() {
        let mut display = TerminalDisplay::new(Cursor::new(""), Vec::new());
        display.render_session(&SessionView {
            session_id: Uuid::new_v4(),
            player: "Ada".to_string(),
            category: "space".to_string(),
            difficulty: Difficulty::Hard,
            revealed: vec![Some('s'), None, None],
            guessed_letters: vec!['s', 'x'],
            incorrect_guesses: 1,
            attempts_remaining: 5,
            score: 30,
            hints_used: 0,
            outcome: SessionOutcome::InProgress,
        });

        let output = String::from_utf8(display.into_output()).unwrap();
        assert!(output.contains("Difficulty: Hard | Category: Space"));
        assert!(output.contains("Word: s _ _"));
        assert!(output.contains("Guessed letters: s, x"));
        assert!(output.contains("Remaining attempts: 5/6"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("animals"), "Animals");
        assert_eq!(capitalize(""), "");
    }
}
