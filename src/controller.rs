use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, error, info, warn};

use crate::ai::{new_strategy, Difficulty, Strategy, MAX_DIFFICULTY};
use crate::display::GameDisplay;
use crate::error::MoveError;
use crate::game::{check_outcome, place_and_settle, Board, Outcome, Player};

/// Game settings, loadable from the `[game]` table of the config file.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Opponent level to use without asking; `None` prompts on every reset.
    pub difficulty: Option<u8>,
    /// Seed for the opponent's random choices.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    AwaitingPlayerMove,
    GameOver,
}

/// Runs a game between the player and the computer.
///
/// Owns the authoritative board and the opponent. The display is told about
/// every settled move and the final result.
pub struct GameController<D: GameDisplay> {
    display: D,
    board: Board,
    strategy: Box<dyn Strategy>,
    difficulty: Difficulty,
    state: ControllerState,
    outcome: Outcome,
    seed: Option<u64>,
    games: u64,
}

impl<D: GameDisplay> GameController<D> {
    /// Start a game, asking the display for the opponent's difficulty.
    pub fn new(display: D) -> Self {
        Self::build(display, None)
    }

    /// Like [`GameController::new`], with reproducible opponent choices.
    pub fn with_seed(display: D, seed: u64) -> Self {
        Self::build(display, Some(seed))
    }

    fn build(mut display: D, seed: Option<u64>) -> Self {
        let difficulty = prompt_difficulty(&mut display);
        let strategy = new_strategy(difficulty, strategy_rng(seed, 0));
        info!(difficulty = difficulty.level(), opponent = strategy.name(), "new game");
        GameController {
            display,
            board: Board::new(),
            strategy,
            difficulty,
            state: ControllerState::AwaitingPlayerMove,
            outcome: Outcome::InProgress,
            seed,
            games: 1,
        }
    }

    /// Drop the player's token into `col` and, if the game goes on, let the
    /// computer answer.
    ///
    /// A rejected column leaves the game untouched so the player can pick
    /// again. If the computer cannot answer, the player's token stays on the
    /// board and the game is abandoned: the error is returned and later moves
    /// get [`MoveError::GameOver`] until [`GameController::reset`].
    pub fn add_piece(&mut self, col: usize) -> Result<Outcome, MoveError> {
        if self.state == ControllerState::GameOver {
            return Err(MoveError::GameOver);
        }

        let row = place_and_settle(&mut self.board, col, Player::One.cell())?;
        debug!(column = col, row, "player move");
        self.display.update_board(&self.board);
        let outcome = check_outcome(&self.board);
        if outcome.is_terminal() {
            return Ok(self.finish(outcome));
        }

        let (reply, row) = match self.computer_move(col) {
            Ok(placed) => placed,
            Err(err) => {
                error!(%err, "computer could not answer, abandoning game");
                self.state = ControllerState::GameOver;
                return Err(err);
            }
        };
        debug!(column = reply, row, "computer move");
        self.display.update_board(&self.board);
        let outcome = check_outcome(&self.board);
        if outcome.is_terminal() {
            return Ok(self.finish(outcome));
        }

        Ok(outcome)
    }

    fn computer_move(&mut self, player_column: usize) -> Result<(usize, usize), MoveError> {
        let reply = self.strategy.choose_move(player_column)?;
        let row = place_and_settle(&mut self.board, reply, Player::Two.cell())?;
        Ok((reply, row))
    }

    fn finish(&mut self, outcome: Outcome) -> Outcome {
        info!(?outcome, "game over");
        self.state = ControllerState::GameOver;
        self.outcome = outcome;
        self.display.game_over(outcome);
        outcome
    }

    /// Start over with an empty board and a newly chosen opponent.
    pub fn reset(&mut self) {
        self.board.reset();
        self.difficulty = prompt_difficulty(&mut self.display);
        self.strategy = new_strategy(self.difficulty, strategy_rng(self.seed, self.games));
        self.state = ControllerState::AwaitingPlayerMove;
        self.outcome = Outcome::InProgress;
        self.games += 1;
        info!(
            difficulty = self.difficulty.level(),
            opponent = self.strategy.name(),
            "new game"
        );
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }
}

fn prompt_difficulty<D: GameDisplay>(display: &mut D) -> Difficulty {
    let level = display.prompt_for_opponent_difficulty(MAX_DIFFICULTY);
    Difficulty::from_level(level).unwrap_or_else(|| {
        let fallback = Difficulty::default();
        warn!(level, fallback = fallback.level(), "difficulty out of range");
        fallback
    })
}

/// Each game gets its own stream; a seeded controller stays reproducible
/// across resets.
fn strategy_rng(seed: Option<u64>, game: u64) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(game)),
        None => StdRng::from_os_rng(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::HeadlessDisplay;
    use crate::game::{Cell, COLS, ROWS};

    fn controller(level: u8) -> GameController<HeadlessDisplay> {
        GameController::with_seed(HeadlessDisplay::new(level), 9)
    }

    #[test]
    fn test_new_controller_prompts_once() {
        let game = controller(2);
        assert_eq!(game.display().prompts(), 1);
        assert_eq!(game.difficulty(), Difficulty::Two);
        assert_eq!(game.state(), ControllerState::AwaitingPlayerMove);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_out_of_range_difficulty_falls_back() {
        let game = controller(7);
        assert_eq!(game.difficulty(), Difficulty::Two);
    }

    #[test]
    fn test_move_places_both_tokens() {
        let mut game = controller(1);
        assert_eq!(game.add_piece(3), Ok(Outcome::InProgress));
        assert_eq!(game.board().get(5, 3), Cell::PlayerOne);
        assert_eq!(game.board().get(4, 3), Cell::PlayerTwo);
        assert_eq!(game.display().updates(), 2);
        assert_eq!(game.display().last_board(), game.board());
    }

    #[test]
    fn test_rejected_column_changes_nothing() {
        let mut game = controller(1);
        for _ in 0..ROWS / 2 {
            game.add_piece(0).unwrap();
        }
        let before = *game.board();
        let updates = game.display().updates();

        assert_eq!(game.add_piece(0), Err(MoveError::ColumnFull(0)));
        assert_eq!(game.add_piece(COLS), Err(MoveError::OutOfRange(COLS)));
        assert_eq!(game.board(), &before);
        assert_eq!(game.display().updates(), updates);
        assert_eq!(game.state(), ControllerState::AwaitingPlayerMove);
    }

    #[test]
    fn test_player_win_ends_game_before_reply() {
        let mut game = controller(1);
        // Echo stacks the computer on top of each player token, so the
        // bottom row belongs to the player.
        for col in 0..3 {
            assert_eq!(game.add_piece(col), Ok(Outcome::InProgress));
        }
        assert_eq!(game.add_piece(3), Ok(Outcome::Win(Player::One)));
        assert_eq!(game.board().get(4, 3), Cell::Empty);
        assert_eq!(game.state(), ControllerState::GameOver);
        assert_eq!(game.outcome(), Outcome::Win(Player::One));
        assert_eq!(game.display().outcome(), Some(Outcome::Win(Player::One)));
        assert_eq!(game.add_piece(5), Err(MoveError::GameOver));
    }

    #[test]
    fn test_scanner_blocks_column_stack() {
        let mut game = controller(2);
        // Keep dropping into column 0 until it fills; the scanner must never
        // let the player stack four there.
        let mut result = Outcome::InProgress;
        for _ in 0..ROWS {
            match game.add_piece(0) {
                Ok(outcome) => result = outcome,
                Err(err) => {
                    assert!(err.is_invalid_column());
                    break;
                }
            }
            if result.is_terminal() {
                break;
            }
        }
        assert_ne!(result, Outcome::Win(Player::One));
        if result.is_terminal() {
            assert_eq!(game.display().outcome(), Some(result));
        }
    }

    struct Stuck;

    impl Strategy for Stuck {
        fn choose_move(&mut self, _last_opponent_column: usize) -> Result<usize, MoveError> {
            Err(MoveError::BoardFull)
        }

        fn name(&self) -> &str {
            "Stuck"
        }
    }

    #[test]
    fn test_failed_reply_abandons_game() {
        let mut game = controller(2);
        game.strategy = Box::new(Stuck);

        assert_eq!(game.add_piece(3), Err(MoveError::BoardFull));
        assert_eq!(game.board().get(5, 3), Cell::PlayerOne);
        assert_eq!(game.state(), ControllerState::GameOver);
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(game.add_piece(4), Err(MoveError::GameOver));

        game.reset();
        assert_eq!(game.state(), ControllerState::AwaitingPlayerMove);
        assert_eq!(game.add_piece(4), Ok(Outcome::InProgress));
    }

    #[test]
    fn test_reset_starts_fresh_game() {
        let mut game = controller(1);
        game.add_piece(2).unwrap();
        game.reset();
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.state(), ControllerState::AwaitingPlayerMove);
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(game.display().prompts(), 2);
        assert_eq!(game.display().updates(), 0);
        assert_eq!(game.add_piece(2), Ok(Outcome::InProgress));
    }
}
