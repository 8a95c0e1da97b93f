use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::warn;

use super::game_view::{self, ViewState};
use super::{outcome_message, UiConfig};
use crate::ai::Difficulty;
use crate::display::GameDisplay;
use crate::game::{Board, Outcome};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// [`GameDisplay`] backed by the terminal. Board pushes are kept as the
/// snapshot the next frame draws; the difficulty prompt runs its own small
/// key loop.
pub struct TerminalDisplay {
    terminal: Tui,
    snapshot: Board,
    message: Option<String>,
    preset_difficulty: Option<u8>,
    poll_interval: Duration,
}

impl TerminalDisplay {
    pub fn new(terminal: Tui, config: &UiConfig, preset_difficulty: Option<u8>) -> Self {
        TerminalDisplay {
            terminal,
            snapshot: Board::new(),
            message: None,
            preset_difficulty,
            poll_interval: Duration::from_millis(config.poll_interval_ms),
        }
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn terminal_mut(&mut self) -> &mut Tui {
        &mut self.terminal
    }

    /// Draw one frame of the game screen.
    pub fn draw(
        &mut self,
        selected_column: usize,
        difficulty: Difficulty,
        game_over: bool,
    ) -> io::Result<()> {
        let board = self.snapshot;
        let view = ViewState {
            selected_column,
            difficulty,
            game_over,
            message: self.message.as_deref(),
        };
        self.terminal.draw(|f| game_view::render(f, &board, &view))?;
        Ok(())
    }

    fn read_difficulty(&mut self, max_level: u8) -> io::Result<u8> {
        loop {
            self.terminal
                .draw(|f| game_view::render_difficulty_prompt(f, max_level))?;

            if !event::poll(self.poll_interval)? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char(c) => {
                    if let Some(level) = c.to_digit(10).and_then(|d| u8::try_from(d).ok()) {
                        if (1..=max_level).contains(&level) {
                            return Ok(level);
                        }
                    }
                }
                KeyCode::Enter | KeyCode::Esc => return Ok(Difficulty::default().level()),
                _ => {}
            }
        }
    }
}

impl GameDisplay for TerminalDisplay {
    fn update_board(&mut self, board: &Board) {
        self.snapshot = *board;
    }

    fn game_over(&mut self, outcome: Outcome) {
        self.set_message(format!("{}  Press 'r' to play again.", outcome_message(outcome)));
    }

    fn prompt_for_opponent_difficulty(&mut self, max_level: u8) -> u8 {
        self.snapshot = Board::new();
        self.message = None;
        if let Some(level) = self.preset_difficulty {
            return level;
        }
        self.read_difficulty(max_level).unwrap_or_else(|err| {
            let fallback = Difficulty::default().level();
            warn!(%err, fallback, "difficulty prompt failed");
            fallback
        })
    }
}
