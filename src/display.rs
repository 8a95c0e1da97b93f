//! The boundary between the game core and whatever shows it to a player.

use crate::game::{Board, Outcome};

/// Output side of a front-end. The controller pushes every settled position
/// and the final result, and asks for the opponent strength on reset.
pub trait GameDisplay {
    /// Show the board after a token has settled.
    fn update_board(&mut self, board: &Board);

    /// Announce a finished game.
    fn game_over(&mut self, outcome: Outcome);

    /// Ask for a difficulty in `1..=max_level`. Blocks until answered.
    fn prompt_for_opponent_difficulty(&mut self, max_level: u8) -> u8;
}

/// A display without a screen: answers the difficulty prompt with a fixed
/// level and remembers what it was shown during the current game.
///
/// The controller prompts exactly once per game, so a prompt starts a new
/// record: the last board, update count and outcome are cleared. Only
/// `prompts` counts across games.
#[derive(Debug, Clone)]
pub struct HeadlessDisplay {
    difficulty: u8,
    last_board: Board,
    updates: usize,
    outcome: Option<Outcome>,
    prompts: usize,
}

impl HeadlessDisplay {
    pub fn new(difficulty: u8) -> Self {
        HeadlessDisplay {
            difficulty,
            last_board: Board::new(),
            updates: 0,
            outcome: None,
            prompts: 0,
        }
    }

    pub fn last_board(&self) -> &Board {
        &self.last_board
    }

    /// Number of board snapshots received this game.
    pub fn updates(&self) -> usize {
        self.updates
    }

    /// Result announced for the current game, if any.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn prompts(&self) -> usize {
        self.prompts
    }

    fn start_game_record(&mut self) {
        self.last_board = Board::new();
        self.updates = 0;
        self.outcome = None;
    }
}

impl GameDisplay for HeadlessDisplay {
    fn update_board(&mut self, board: &Board) {
        self.last_board = *board;
        self.updates += 1;
    }

    fn game_over(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
    }

    fn prompt_for_opponent_difficulty(&mut self, _max_level: u8) -> u8 {
        self.prompts += 1;
        self.start_game_record();
        self.difficulty
    }
}
