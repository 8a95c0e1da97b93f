//! Headless evaluation: a random stand-in for the player plays a batch of
//! games against one difficulty through the real controller.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::controller::GameController;
use crate::display::HeadlessDisplay;
use crate::error::MoveError;
use crate::game::{Outcome, Player};

/// Arena configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub games: usize,
    pub difficulty: u8,
    pub seed: Option<u64>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: 1_000,
            difficulty: 2,
            seed: None,
        }
    }
}

/// Aggregated results of an arena run.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct ArenaReport {
    pub difficulty: u8,
    pub games: usize,
    pub player_wins: usize,
    pub computer_wins: usize,
    pub draws: usize,
    pub total_moves: usize,
}

impl ArenaReport {
    fn record(&mut self, outcome: Outcome, moves: usize) {
        self.games += 1;
        self.total_moves += moves;
        match outcome {
            Outcome::Win(Player::One) => self.player_wins += 1,
            Outcome::Win(Player::Two) => self.computer_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    fn rate(&self, count: usize) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        count as f32 / self.games as f32
    }

    /// Share of games the computer won.
    pub fn computer_win_rate(&self) -> f32 {
        self.rate(self.computer_wins)
    }

    pub fn player_win_rate(&self) -> f32 {
        self.rate(self.player_wins)
    }

    pub fn draw_rate(&self) -> f32 {
        self.rate(self.draws)
    }

    /// Average tokens on the board when a game ended.
    pub fn average_game_length(&self) -> f32 {
        self.rate(self.total_moves)
    }
}

/// Play `config.games` games and collect the results.
pub fn run(config: &ArenaConfig) -> Result<ArenaReport, MoveError> {
    let display = HeadlessDisplay::new(config.difficulty);
    let (mut controller, mut rng) = match config.seed {
        Some(seed) => (
            GameController::with_seed(display, seed),
            StdRng::seed_from_u64(seed),
        ),
        None => (GameController::new(display), StdRng::from_os_rng()),
    };

    let mut report = ArenaReport {
        difficulty: controller.difficulty().level(),
        ..Default::default()
    };
    info!(
        games = config.games,
        difficulty = report.difficulty,
        "starting arena"
    );

    for game in 0..config.games {
        if game > 0 {
            controller.reset();
        }
        let outcome = play_game(&mut controller, &mut rng)?;
        let moves = count_tokens(&controller);
        debug!(game, ?outcome, moves, "arena game finished");
        report.record(outcome, moves);
    }

    Ok(report)
}

/// The stand-in player picks uniformly among the playable columns.
fn play_game(
    controller: &mut GameController<HeadlessDisplay>,
    rng: &mut StdRng,
) -> Result<Outcome, MoveError> {
    loop {
        let playable = controller.board().playable_columns();
        if playable.is_empty() {
            return Err(MoveError::BoardFull);
        }
        let col = playable[rng.random_range(0..playable.len())];
        let outcome = controller.add_piece(col)?;
        if outcome.is_terminal() {
            return Ok(outcome);
        }
    }
}

fn count_tokens(controller: &GameController<HeadlessDisplay>) -> usize {
    controller
        .board()
        .rows()
        .map(|row| row.iter().filter(|cell| !cell.is_empty()).count())
        .sum()
}
