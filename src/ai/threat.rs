use rand::rngs::StdRng;
use rand::Rng;

use crate::error::MoveError;
use crate::game::{place_and_settle, Board, Cell, Direction, Player, COLS, OBJECTIVE, ROWS};

use super::strategy::Strategy;

/// Why the scanner picked its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reason {
    Win,
    Block,
    Random,
}

/// Difficulty two: completes its own lines, blocks the player's, and
/// otherwise plays a random open column.
///
/// Keeps a private copy of the board, updated by replaying both sides' moves
/// through the same gravity rule the controller uses.
pub struct ThreatScanner {
    board: Board,
    rng: StdRng,
}

impl ThreatScanner {
    pub fn new(rng: StdRng) -> Self {
        Self::with_board(Board::new(), rng)
    }

    /// Start from an existing position.
    pub fn with_board(board: Board, rng: StdRng) -> Self {
        ThreatScanner { board, rng }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Uniform pick among the playable columns.
    fn random_column(&mut self) -> Result<usize, MoveError> {
        let playable = self.board.playable_columns();
        if playable.is_empty() {
            return Err(MoveError::BoardFull);
        }
        Ok(playable[self.rng.random_range(0..playable.len())])
    }

    fn pick(&mut self) -> Result<(usize, Reason), MoveError> {
        if let Some(col) = find_completion(&self.board, Player::Two) {
            return Ok((col, Reason::Win));
        }
        if let Some(col) = find_completion(&self.board, Player::One) {
            return Ok((col, Reason::Block));
        }
        Ok((self.random_column()?, Reason::Random))
    }
}

impl Strategy for ThreatScanner {
    fn choose_move(&mut self, last_opponent_column: usize) -> Result<usize, MoveError> {
        place_and_settle(&mut self.board, last_opponent_column, Cell::PlayerOne)?;

        let (col, reason) = self.pick()?;
        place_and_settle(&mut self.board, col, Cell::PlayerTwo)?;
        tracing::debug!(column = col, ?reason, "threat scanner move");
        Ok(col)
    }

    fn name(&self) -> &str {
        "Threat scanner"
    }
}

/// Column that turns a run of three of `player`'s tokens into four.
///
/// Directions are tried in [`Direction::ALL`] order, each with a raster scan.
/// For every run the cell after it is tried before the cell before it; a cell
/// only counts if a token dropped in its column would land there now.
fn find_completion(board: &Board, player: Player) -> Option<usize> {
    let run = OBJECTIVE - 1;
    let ends = [run as isize, -1];

    for direction in Direction::ALL {
        for row in 0..ROWS {
            for col in 0..COLS {
                if board.get(row, col) != player.cell() || !direction.is_run(board, row, col, run) {
                    continue;
                }
                let target = ends
                    .iter()
                    .filter_map(|&k| direction.step(row, col, k))
                    .find(|&(r, c)| board.is_reachable(r, c));
                if let Some((_, c)) = target {
                    return Some(c);
                }
            }
        }
    }
    None
}
