use super::board::{Board, Cell, COLS, ROWS};
use crate::error::MoveError;

/// Drop `cell` into `col` and let it fall to the lowest free cell.
///
/// The token enters at row 0 and a single top-to-bottom pass over the column
/// carries it down: every occupied cell with an empty cell below moves one row,
/// and because the token keeps moving into the row the pass visits next, one
/// pass settles it. Only the touched column is visited. Returns the landing row.
///
/// An unplayable column leaves the board untouched.
pub fn place_and_settle(board: &mut Board, col: usize, cell: Cell) -> Result<usize, MoveError> {
    if col >= COLS {
        return Err(MoveError::OutOfRange(col));
    }
    if !board.is_column_playable(col) {
        return Err(MoveError::ColumnFull(col));
    }

    board.set(0, col, cell);
    let mut landed = 0;
    for row in 0..ROWS - 1 {
        let token = board.get(row, col);
        if !token.is_empty() && board.get(row + 1, col).is_empty() {
            board.set(row, col, Cell::Empty);
            board.set(row + 1, col, token);
            landed = row + 1;
        }
    }

    Ok(landed)
}
