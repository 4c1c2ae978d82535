use crate::config::Config;
use crate::terminal::{TerminalDisplay, capitalize};
use game_core::{GameDisplay, GameRunner, WordBank};
use game_persistence::ProfileStore;
use game_persistence::repositories::ProfileRepository;
use game_types::{Difficulty, GameError, Notice, RANDOM_CATEGORY};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{info, warn};

const GUEST: &str = "Guest";

/// Menu-driven front end tying the runner, the profile repository and a
/// terminal together.
pub struct App<S: ProfileStore, G, R, W> {
    runner: GameRunner<G>,
    profiles: ProfileRepository<S>,
    display: TerminalDisplay<R, W>,
    player: String,
    difficulty: Difficulty,
    category: String,
}

impl<S, G, R, W> App<S, G, R, W>
where
    S: ProfileStore,
    G: Rng,
    R: BufRead,
    W: Write,
{
    pub fn new(
        config: &Config,
        word_bank: WordBank,
        store: S,
        rng: G,
        display: TerminalDisplay<R, W>,
    ) -> Result<Self, GameError> {
        if !word_bank.has_category(&config.default_category) {
            return Err(GameError::UnknownCategory {
                category: config.default_category.clone(),
            });
        }

        let mut profiles = ProfileRepository::new(store);
        profiles.select_player(&config.player)?;

        Ok(Self {
            runner: GameRunner::new(word_bank, rng),
            profiles,
            display,
            player: config.player.clone(),
            difficulty: config.default_difficulty,
            category: config.default_category.clone(),
        })
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn profiles(&self) -> &ProfileRepository<S> {
        &self.profiles
    }

    pub fn into_output(self) -> W {
        self.display.into_output()
    }

    /// Main menu loop; returns on exit or end of input.
    pub fn run(&mut self) {
        info!("Main menu for {}", self.player);
        while self.main_menu() {}
        self.display.line("Thanks for playing Hangman! Goodbye!");
    }

    fn main_menu(&mut self) -> bool {
        self.display.line("");
        self.display.line(&format!(
            "Welcome to Hangman! Player: {} | Difficulty: {} | Category: {}",
            self.player,
            capitalize(self.difficulty.as_str()),
            capitalize(&self.category)
        ));
        for option in [
            "1. Start New Game",
            "2. Select Difficulty",
            "3. Select Category",
            "4. Manage Profiles",
            "5. View Statistics",
            "6. Leaderboard",
            "7. Instructions",
            "8. Exit",
        ] {
            self.display.line(option);
        }

        let Some(choice) = self.display.prompt("\nEnter your choice (1-8): ") else {
            return false;
        };
        match choice.as_str() {
            "1" => return self.play(),
            "2" => self.select_difficulty(),
            "3" => self.select_category(),
            "4" => self.manage_profiles(),
            "5" => self.show_stats(),
            "6" => self.show_leaderboard(),
            "7" => self.show_instructions(),
            "8" => return false,
            _ => self.display.line("Invalid choice. Please try again."),
        }
        true
    }

    /// Play rounds until the player goes back to the menu. Returns `false`
    /// when input ran out.
    fn play(&mut self) -> bool {
        loop {
            let mut session =
                match self
                    .runner
                    .start_session(&self.player, &self.category, self.difficulty)
                {
                    Ok(session) => session,
                    Err(err) => {
                        self.display.render_notice(&Notice::Rejected {
                            message: err.to_string(),
                        });
                        return true;
                    }
                };

            let Some(summary) = self.runner.play(&mut session, &mut self.display) else {
                return true;
            };
            self.runner.record(self.profiles.profiles_mut(), &summary);
            self.profiles.persist();

            loop {
                self.display.line("\n1. Play again\n2. View your statistics\n3. Main menu");
                let Some(choice) = self.display.prompt("\nEnter your choice (1-3): ") else {
                    return false;
                };
                match choice.as_str() {
                    "1" => break,
                    "2" => self.show_stats(),
                    "3" => return true,
                    _ => self.display.line("Invalid choice. Please try again."),
                }
            }
        }
    }

    fn select_difficulty(&mut self) {
        for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
            self.display
                .line(&format!("{}. {}", i + 1, capitalize(difficulty.as_str())));
        }
        let Some(choice) = self.display.prompt("\nSelect difficulty: ") else {
            return;
        };
        let picked = choice
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Difficulty::ALL.get(i).copied())
            .map_or_else(|| choice.parse::<Difficulty>(), Ok);
        match picked {
            Ok(difficulty) => {
                self.difficulty = difficulty;
                self.display
                    .line(&format!("Difficulty set to {}.", capitalize(difficulty.as_str())));
            }
            Err(err) => self.display.line(&capitalize(&err.to_string())),
        }
    }

    fn select_category(&mut self) {
        let mut options: Vec<String> = self
            .runner
            .word_bank()
            .categories()
            .into_iter()
            .map(str::to_string)
            .collect();
        options.push(RANDOM_CATEGORY.to_string());
        for (i, category) in options.iter().enumerate() {
            self.display.line(&format!("{}. {}", i + 1, capitalize(category)));
        }

        let Some(choice) = self.display.prompt("\nSelect category: ") else {
            return;
        };
        let picked = choice
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| options.get(i).cloned())
            .unwrap_or_else(|| choice.to_lowercase());
        if self.runner.word_bank().has_category(&picked) {
            self.display
                .line(&format!("Category set to {}.", capitalize(&picked)));
            self.category = picked;
        } else {
            let err = GameError::UnknownCategory { category: picked };
            self.display.line(&capitalize(&err.to_string()));
        }
    }

    fn manage_profiles(&mut self) {
        self.display.line("\n1. Create/Select a profile\n2. View all profiles\n3. Delete a profile\n4. Back");
        let Some(choice) = self.display.prompt("\nEnter your choice (1-4): ") else {
            return;
        };
        match choice.as_str() {
            "1" => {
                let Some(name) = self.display.prompt("\nEnter your name: ") else {
                    return;
                };
                match self.profiles.select_player(&name) {
                    Ok(_) => {
                        self.player = name.trim().to_string();
                        self.display.line(&format!("Welcome, {}!", self.player));
                    }
                    Err(err) => self.display.line(&capitalize(&err.to_string())),
                }
            }
            "2" => {
                let names: Vec<String> =
                    self.profiles.player_names().iter().map(|n| n.to_string()).collect();
                if names.is_empty() {
                    self.display.line("No profiles found.");
                }
                for (i, name) in names.iter().enumerate() {
                    self.display.line(&format!("{}. {}", i + 1, name));
                }
            }
            "3" => self.delete_profile(),
            _ => {}
        }
    }

    fn delete_profile(&mut self) {
        let names: Vec<String> =
            self.profiles.player_names().iter().map(|n| n.to_string()).collect();
        if names.is_empty() {
            self.display.line("No profiles found.");
            return;
        }
        for (i, name) in names.iter().enumerate() {
            self.display.line(&format!("{}. {}", i + 1, name));
        }

        let Some(choice) = self.display.prompt("\nSelect a profile to delete: ") else {
            return;
        };
        let Some(name) = choice
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| names.get(i))
        else {
            self.display.line("Invalid choice.");
            return;
        };

        let confirm = self
            .display
            .prompt(&format!("Are you sure you want to delete the profile for {name}? (y/n): "));
        if !confirm.is_some_and(|c| c.eq_ignore_ascii_case("y")) {
            return;
        }

        self.profiles.delete_player(name);
        self.display.line(&format!("Profile for {name} deleted."));
        if *name == self.player {
            self.player = GUEST.to_string();
            if let Err(err) = self.profiles.select_player(GUEST) {
                warn!("Could not fall back to {}: {}", GUEST, err);
            }
        }
    }

    fn show_stats(&mut self) {
        match self.profiles.find(&self.player).cloned() {
            Some(profile) => {
                self.display.render_profile(&self.player, &profile);
                if let Some(rank) = self.profiles.player_rank(&self.player) {
                    self.display.line(&format!(
                        "  Leaderboard Rank: {} of {}",
                        rank,
                        self.profiles.profiles().len()
                    ));
                }
            }
            None => self.display.line("No player profile found. Create a profile first!"),
        }
    }

    fn show_leaderboard(&mut self) {
        let board = self.profiles.leaderboard(10);
        if board.is_empty() {
            self.display.line("No profiles found.");
        }
        for entry in board {
            self.display.line(&format!(
                "{:>2}. {:<20} best {:>5}  total {:>6}",
                entry.rank, entry.name, entry.profile.best_score, entry.profile.total_score
            ));
        }
    }

    fn show_instructions(&mut self) {
        for line in [
            "=== How to Play Hangman ===",
            "1. A random word is chosen from your category and difficulty.",
            "2. Guess the word letter by letter.",
            "3. You have 6 incorrect guesses before the game is over.",
            "4. Hints reveal a letter but cost 25 points.",
            "Scoring:",
            "- Correct guess: 10-30 points (based on difficulty)",
            "- Winning bonus: based on difficulty, remaining attempts and time taken",
            "- Hint penalty: -25 points per hint",
        ] {
            self.display.line(line);
        }
    }
}
