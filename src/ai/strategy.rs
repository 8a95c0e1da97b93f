use rand::rngs::StdRng;

use super::echo::EchoStrategy;
use super::threat::ThreatScanner;
use crate::error::MoveError;

/// Highest difficulty a player can pick.
pub const MAX_DIFFICULTY: u8 = 2;

/// Strength of the computer opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// Echoes the player's last column.
    One,
    /// Takes wins, blocks threats, otherwise plays at random.
    #[default]
    Two,
}

impl Difficulty {
    /// Parse a 1-based level as answered by the player.
    pub fn from_level(level: u8) -> Option<Difficulty> {
        match level {
            1 => Some(Difficulty::One),
            2 => Some(Difficulty::Two),
            _ => None,
        }
    }

    pub fn level(self) -> u8 {
        match self {
            Difficulty::One => 1,
            Difficulty::Two => 2,
        }
    }
}

/// A computer opponent. It is told the column the player just used and
/// answers with its own column; it never sees the controller's board.
pub trait Strategy {
    /// Pick the reply to the player's move in `last_opponent_column`.
    fn choose_move(&mut self, last_opponent_column: usize) -> Result<usize, MoveError>;

    /// Return the strategy's display name.
    fn name(&self) -> &str;
}

/// Build a fresh opponent for a new game.
pub fn new_strategy(difficulty: Difficulty, rng: StdRng) -> Box<dyn Strategy> {
    match difficulty {
        Difficulty::One => Box::new(EchoStrategy::new()),
        Difficulty::Two => Box::new(ThreatScanner::new(rng)),
    }
}
