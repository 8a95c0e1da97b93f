use crate::controller::{ControllerState, GameController};
use crate::error::MoveError;
use crate::game::COLS;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::io;
use std::time::Duration;

use super::terminal::{TerminalDisplay, Tui};
use super::UiConfig;

pub struct App {
    controller: GameController<TerminalDisplay>,
    selected_column: usize,
    start_column: usize,
    poll_interval: Duration,
    should_quit: bool,
}

impl App {
    pub fn new(controller: GameController<TerminalDisplay>, config: &UiConfig) -> Self {
        App {
            controller,
            selected_column: config.start_column,
            start_column: config.start_column,
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            should_quit: false,
        }
    }

    /// Main application loop
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let game_over = self.controller.state() == ControllerState::GameOver;
            let difficulty = self.controller.difficulty();
            self.controller
                .display_mut()
                .draw(self.selected_column, difficulty, game_over)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    pub fn terminal_mut(&mut self) -> &mut Tui {
        self.controller.display_mut().terminal_mut()
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_interval)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(col) = c.to_digit(10).map(|d| d as usize - 1) {
                    if col < COLS {
                        self.selected_column = col;
                        self.drop_piece();
                    }
                }
            }
            KeyCode::Char('r') => {
                self.controller.reset();
                self.selected_column = self.start_column;
                self.controller.display_mut().set_message("New game started!");
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        self.controller.display_mut().clear_message();

        match self.controller.add_piece(self.selected_column) {
            // The display has already been told about a finished game.
            Ok(_) => {}
            Err(MoveError::GameOver) => {
                self.controller
                    .display_mut()
                    .set_message("Game over! Press 'r' to restart.");
            }
            Err(err) => self.controller.display_mut().set_message(err.to_string()),
        }
    }
}
