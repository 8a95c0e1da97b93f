//! Front-ends: a ratatui terminal UI and a line-based console, both driving
//! the game through [`GameDisplay`](crate::display::GameDisplay).

mod app;
pub mod console;
mod game_view;
mod terminal;

pub use app::App;
pub use terminal::{TerminalDisplay, Tui};

use crate::game::{Outcome, Player};

/// Terminal UI settings, loadable from the `[ui]` table of the config file.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Column the selector starts on (0-based).
    pub start_column: usize,
    /// How long to wait for a key before redrawing.
    pub poll_interval_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            start_column: 3,
            poll_interval_ms: 100,
        }
    }
}

/// Text shown when a game ends.
pub fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win(Player::One) => "You win!",
        Outcome::Win(Player::Two) => "The computer wins!",
        Outcome::Draw => "It's a draw!",
        Outcome::InProgress => "",
    }
}
