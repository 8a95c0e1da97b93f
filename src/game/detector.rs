use super::board::{Board, COLS, OBJECTIVE, ROWS};
use super::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Draw,
}

impl Outcome {
    /// Check if game is over
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }
}

/// Line directions, each pointing "forward" from the top/left-most cell of a
/// line so that a raster scan meets every line exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Down the column
    Vertical,
    /// Right along the row
    Horizontal,
    /// Down and to the right
    RightDiagonal,
    /// Down and to the left
    LeftDiagonal,
}

impl Direction {
    /// Scan order shared by the win detector and the threat scanner.
    pub const ALL: [Direction; 4] = [
        Direction::Vertical,
        Direction::Horizontal,
        Direction::RightDiagonal,
        Direction::LeftDiagonal,
    ];

    fn delta(self) -> (isize, isize) {
        match self {
            Direction::Vertical => (1, 0),
            Direction::Horizontal => (0, 1),
            Direction::RightDiagonal => (1, 1),
            Direction::LeftDiagonal => (1, -1),
        }
    }

    /// The cell `steps` along this direction from `(row, col)`, or `None` when
    /// it falls outside the grid. Negative steps walk backwards.
    pub fn step(self, row: usize, col: usize, steps: isize) -> Option<(usize, usize)> {
        let (dr, dc) = self.delta();
        let r = row.checked_add_signed(dr * steps)?;
        let c = col.checked_add_signed(dc * steps)?;
        (r < ROWS && c < COLS).then_some((r, c))
    }

    /// True when the `len` cells starting at `(row, col)` all hold the same
    /// occupied state.
    pub fn is_run(self, board: &Board, row: usize, col: usize, len: usize) -> bool {
        let start = board.get(row, col);
        if start.is_empty() {
            return false;
        }
        (1..len as isize).all(|k| {
            self.step(row, col, k)
                .is_some_and(|(r, c)| board.get(r, c) == start)
        })
    }
}

/// Winner along one direction family, first line in raster order.
fn find_line(board: &Board, direction: Direction) -> Option<Player> {
    for row in 0..ROWS {
        for col in 0..COLS {
            if direction.is_run(board, row, col, OBJECTIVE) {
                return Player::from_cell(board.get(row, col));
            }
        }
    }
    None
}

/// Decide the state of the game: a line of [`OBJECTIVE`] tokens wins, a full
/// board without one is a draw.
///
/// Families are checked vertical, horizontal, right-diagonal, left-diagonal;
/// the first line found decides.
pub fn check_outcome(board: &Board) -> Outcome {
    if let Some(player) = Direction::ALL
        .iter()
        .find_map(|&direction| find_line(board, direction))
    {
        return Outcome::Win(player);
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::Cell;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(check_outcome(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_bottom_row_horizontal_win() {
        let mut board = Board::new();
        for col in 0..3 {
            board.set(5, col, Cell::PlayerOne);
        }
        assert_eq!(check_outcome(&board), Outcome::InProgress);
        board.set(5, 3, Cell::PlayerOne);
        assert_eq!(check_outcome(&board), Outcome::Win(Player::One));
    }

    #[test]
    fn test_vertical_win() {
        let board = Board::from_rows([
            ".......", ".......", "...O...", "...O...", "...O...", "..XOXX.",
        ]);
        assert_eq!(check_outcome(&board), Outcome::Win(Player::Two));
    }

    #[test]
    fn test_right_diagonal_win() {
        let board = Board::from_rows([
            ".......", ".......", "X......", "OX.....", "OOX....", "XOOX...",
        ]);
        assert_eq!(check_outcome(&board), Outcome::Win(Player::One));
    }

    #[test]
    fn test_left_diagonal_win() {
        let board = Board::from_rows([
            ".......", ".......", "......O", ".....OX", "....OXX", "...OXXO",
        ]);
        assert_eq!(check_outcome(&board), Outcome::Win(Player::Two));
    }

    #[test]
    fn test_line_at_right_edge() {
        let board = Board::from_rows([
            ".......", ".......", ".......", ".......", ".......", "...OOOO",
        ]);
        assert_eq!(check_outcome(&board), Outcome::Win(Player::Two));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::from_rows([
            ".......", ".......", ".......", ".......", ".......", "XXOXX..",
        ]);
        assert_eq!(check_outcome(&board), Outcome::InProgress);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_rows([
            "XXOOXXO", "OOXXOOX", "XXOOXXO", "OOXXOOX", "XXOOXXO", "OOXXOOX",
        ]);
        assert!(board.is_full());
        assert_eq!(check_outcome(&board), Outcome::Draw);
    }

    #[test]
    fn test_line_on_full_board_beats_draw() {
        let board = Board::from_rows([
            "XXOOXXO", "OOXXOOX", "XXOOXXO", "OOXXOOX", "XXOOXXO", "OOOOXXX",
        ]);
        assert_eq!(check_outcome(&board), Outcome::Win(Player::Two));
    }

    #[test]
    fn test_vertical_checked_before_horizontal() {
        // Player two has a horizontal line, player one a vertical line.
        let board = Board::from_rows([
            ".......", ".......", "X......", "X......", "X......", "XOOOO..",
        ]);
        assert_eq!(check_outcome(&board), Outcome::Win(Player::One));
    }

    #[test]
    fn test_step_stays_inside_grid() {
        assert_eq!(Direction::LeftDiagonal.step(0, 0, 1), None);
        assert_eq!(Direction::LeftDiagonal.step(0, 3, 3), Some((3, 0)));
        assert_eq!(Direction::Horizontal.step(2, 6, 1), None);
        assert_eq!(Direction::Vertical.step(0, 2, -1), None);
        assert_eq!(Direction::RightDiagonal.step(2, 2, -1), Some((1, 1)));
    }
}
