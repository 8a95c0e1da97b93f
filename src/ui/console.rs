//! Line-based front-end: reads commands from a reader and prints the board
//! to a writer. Used by `--headless`.

use std::io::{self, BufRead, Write};

use tracing::warn;

use super::outcome_message;
use crate::ai::Difficulty;
use crate::controller::GameController;
use crate::display::GameDisplay;
use crate::error::MoveError;
use crate::game::{Board, Outcome, COLS};

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Drop(usize),
    Reset,
    Quit,
}

impl Command {
    /// Columns are typed 1-based.
    fn parse(line: &str) -> Option<Command> {
        match line.trim() {
            "q" | "quit" => Some(Command::Quit),
            "r" | "reset" => Some(Command::Reset),
            other => other
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .map(Command::Drop),
        }
    }
}

pub struct ConsoleDisplay<R, W> {
    input: R,
    output: W,
    preset_difficulty: Option<u8>,
}

impl<R: BufRead, W: Write> ConsoleDisplay<R, W> {
    pub fn new(input: R, output: W, preset_difficulty: Option<u8>) -> Self {
        ConsoleDisplay {
            input,
            output,
            preset_difficulty,
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Print a line; a broken output stream is logged, not fatal.
    pub fn show(&mut self, text: &str) {
        if let Err(err) = writeln!(self.output, "{text}").and_then(|()| self.output.flush()) {
            warn!(%err, "console write failed");
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Next command; end of input quits.
    pub fn read_command(&mut self) -> io::Result<Command> {
        loop {
            self.show(&format!("Column (1-{COLS}), r to restart, q to quit:"));
            let Some(line) = self.read_line()? else {
                return Ok(Command::Quit);
            };
            match Command::parse(&line) {
                Some(command) => return Ok(command),
                None => self.show(&format!("'{}' is not a command", line.trim())),
            }
        }
    }

    fn read_difficulty(&mut self, max_level: u8) -> io::Result<Option<u8>> {
        loop {
            self.show(&format!("Choose opponent difficulty (1-{max_level}):"));
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.trim().parse::<u8>() {
                Ok(level) if (1..=max_level).contains(&level) => return Ok(Some(level)),
                _ => self.show(&format!("'{}' is not a difficulty", line.trim())),
            }
        }
    }
}

impl<R: BufRead, W: Write> GameDisplay for ConsoleDisplay<R, W> {
    fn update_board(&mut self, board: &Board) {
        self.show(&format!("{board}\n"));
    }

    fn game_over(&mut self, outcome: Outcome) {
        self.show(outcome_message(outcome));
    }

    fn prompt_for_opponent_difficulty(&mut self, max_level: u8) -> u8 {
        if let Some(level) = self.preset_difficulty {
            return level;
        }
        match self.read_difficulty(max_level) {
            Ok(Some(level)) => level,
            Ok(None) => Difficulty::default().level(),
            Err(err) => {
                let fallback = Difficulty::default().level();
                warn!(%err, fallback, "difficulty prompt failed");
                fallback
            }
        }
    }
}

/// Play until the player quits or input ends.
pub fn run<R: BufRead, W: Write>(
    controller: &mut GameController<ConsoleDisplay<R, W>>,
) -> io::Result<()> {
    let board = *controller.board();
    controller.display_mut().update_board(&board);

    loop {
        match controller.display_mut().read_command()? {
            Command::Quit => return Ok(()),
            Command::Reset => {
                controller.reset();
                let board = *controller.board();
                controller.display_mut().update_board(&board);
            }
            Command::Drop(col) => match controller.add_piece(col) {
                Ok(_) => {}
                Err(MoveError::GameOver) => controller
                    .display_mut()
                    .show("The game is over. Type r to play again."),
                Err(err) => controller.display_mut().show(&err.to_string()),
            },
        }
    }
}
