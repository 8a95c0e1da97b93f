//! Core Connect Four rules: board representation, gravity and win/draw
//! detection.

mod board;
mod detector;
mod gravity;
mod player;

pub use board::{Board, Cell, COLS, OBJECTIVE, ROWS};
pub use detector::{check_outcome, Direction, Outcome};
pub use gravity::place_and_settle;
pub use player::Player;
