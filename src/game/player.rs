use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Convert player to cell type
    pub fn cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }

    /// Owner of an occupied cell
    pub fn from_cell(cell: Cell) -> Option<Player> {
        match cell {
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
            Cell::Empty => None,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::One => "Player",
            Player::Two => "Computer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
    }

    #[test]
    fn test_cell_mapping() {
        assert_eq!(Player::from_cell(Player::One.cell()), Some(Player::One));
        assert_eq!(Player::from_cell(Player::Two.cell()), Some(Player::Two));
        assert_eq!(Player::from_cell(Cell::Empty), None);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::One.name(), "Player");
        assert_eq!(Player::Two.name(), "Computer");
    }
}
