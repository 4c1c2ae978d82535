pub mod display;
pub mod game_events;
pub mod game_state;
pub mod profile;
pub mod runner;
pub mod scoring;
pub mod word_bank;

// Re-export main components
pub use display::*;
pub use game_events::*;
pub use game_state::*;
pub use profile::*;
pub use runner::*;
pub use scoring::*;
pub use word_bank::*;
