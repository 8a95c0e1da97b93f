use crate::error::MoveError;
use crate::game::{COLS, ROWS};

use super::strategy::Strategy;

// Every column holds an even number of tokens before the player moves, so the
// echoed column still has room only while the height is even.
const _: () = assert!(ROWS % 2 == 0, "echo replies need an even board height");

/// Difficulty one: answers in the column the player just used.
///
/// Column heights are counted from the replayed moves so an echo into a full
/// column is reported instead of returned.
pub struct EchoStrategy {
    heights: [usize; COLS],
}

impl EchoStrategy {
    pub fn new() -> Self {
        EchoStrategy { heights: [0; COLS] }
    }
}

impl Default for EchoStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for EchoStrategy {
    fn choose_move(&mut self, last_opponent_column: usize) -> Result<usize, MoveError> {
        let height = self
            .heights
            .get_mut(last_opponent_column)
            .ok_or(MoveError::OutOfRange(last_opponent_column))?;
        if *height + 2 > ROWS {
            return Err(MoveError::ColumnFull(last_opponent_column));
        }
        *height += 2;
        tracing::debug!(column = last_opponent_column, "echo move");
        Ok(last_opponent_column)
    }

    fn name(&self) -> &str {
        "Echo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echoes_last_column() {
        let mut strategy = EchoStrategy::new();
        for col in [3, 0, 6, 3] {
            assert_eq!(strategy.choose_move(col), Ok(col));
        }
    }

    #[test]
    fn test_column_fills_in_pairs() {
        let mut strategy = EchoStrategy::new();
        for _ in 0..ROWS / 2 {
            assert_eq!(strategy.choose_move(1), Ok(1));
        }
        assert_eq!(strategy.choose_move(1), Err(MoveError::ColumnFull(1)));
        assert_eq!(strategy.choose_move(2), Ok(2));
    }

    #[test]
    fn test_out_of_range_column() {
        let mut strategy = EchoStrategy::new();
        assert_eq!(strategy.choose_move(COLS), Err(MoveError::OutOfRange(COLS)));
    }
}
