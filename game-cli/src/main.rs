use anyhow::{Context, Result};
use std::io;
use tracing::info;

use game_cli::config::Config;
use game_cli::menu::App;
use game_cli::terminal::TerminalDisplay;
use game_core::WordBank;
use game_persistence::connection::open_profile_store;

fn main() {
    // Logs go to stderr so they never interleave with the game screen.
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    info!("Starting Hangman...");

    if let Err(e) = run() {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
    info!("Hangman exited.");
}

fn run() -> Result<()> {
    let config = Config::from_env().context("Invalid configuration")?;
    let store = open_profile_store(&config.profiles_path);
    let display = TerminalDisplay::new(io::stdin().lock(), io::stdout());

    let mut app = App::new(&config, WordBank::builtin(), store, rand::rng(), display)
        .context("Failed to start")?;
    app.run();
    Ok(())
}
