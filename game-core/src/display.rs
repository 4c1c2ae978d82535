use game_types::{Notice, PlayerCommand, PlayerProfile, SessionSummary, SessionView};

/// Front end collaborator. The core only hands it data; layout, art and
/// screen handling are entirely up to the implementation.
pub trait GameDisplay {
    fn render_session(&mut self, view: &SessionView);

    fn render_notice(&mut self, notice: &Notice);

    /// Called once when a round ends.
    fn render_result(&mut self, summary: &SessionSummary);

    fn render_profile(&mut self, player: &str, profile: &PlayerProfile);

    /// Block until the player issues the next command.
    fn next_command(&mut self) -> PlayerCommand;
}
