use std::fmt;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of same-owner tokens in an unbroken line needed to win.
pub const OBJECTIVE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PlayerOne => 'X',
            Cell::PlayerTwo => 'O',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Clear every cell
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; COLS]; ROWS];
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// A column accepts a token while its top cell is empty
    pub fn is_column_playable(&self, col: usize) -> bool {
        col < COLS && self.cells[0][col].is_empty()
    }

    /// Columns that currently accept a token, in ascending order
    pub fn playable_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.is_column_playable(col)).collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| !self.is_column_playable(col))
    }

    /// Cell can receive a token right now: empty and resting on the floor or
    /// on an occupied cell.
    pub fn is_reachable(&self, row: usize, col: usize) -> bool {
        self.cells[row][col].is_empty()
            && (row == ROWS - 1 || !self.cells[row + 1][col].is_empty())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell; COLS]> {
        self.cells.iter()
    }

    /// Build a board from text rows, top row first. `.` is empty, `X` is
    /// player one and `O` is player two.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: [&str; ROWS]) -> Self {
        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    'X' => Cell::PlayerOne,
                    'O' => Cell::PlayerTwo,
                    _ => Cell::Empty,
                };
                board.set(row, col, cell);
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        let footer: String = (1..=COLS)
            .map(|col| char::from_digit(col as u32, 10).unwrap_or('?'))
            .collect();
        write!(f, "{footer}")
    }
}
