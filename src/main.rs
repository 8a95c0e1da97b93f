use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::{AppConfig, ConfigSource};
use connect_four::controller::GameController;
use connect_four::display::GameDisplay;
use connect_four::logging::{self, LogTarget};
use connect_four::ui::{console, console::ConsoleDisplay, App, TerminalDisplay};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::warn;

/// Play Connect Four against the computer.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Opponent difficulty (1 or 2); skips the prompt
    #[arg(long)]
    difficulty: Option<u8>,

    /// Seed for the opponent's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Play on stdin/stdout instead of the terminal UI
    #[arg(long)]
    headless: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, source) = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if cli.difficulty.is_some() {
        config.game.difficulty = cli.difficulty;
    }
    if cli.seed.is_some() {
        config.game.seed = cli.seed;
    }
    config.validate().context("invalid settings")?;

    let target = if cli.headless {
        LogTarget::Stderr
    } else {
        LogTarget::FileOnly
    };
    let logging_on = logging::init(&config.logging, target).context("initializing logging")?;
    if source == ConfigSource::Defaults {
        if logging_on {
            warn!(path = %cli.config.display(), "config file not found, using defaults");
        } else {
            eprintln!(
                "Config file {} not found, using defaults",
                cli.config.display()
            );
        }
    }

    if cli.headless {
        let stdin = io::stdin();
        let display = ConsoleDisplay::new(stdin.lock(), io::stdout(), config.game.difficulty);
        let mut controller = new_controller(display, config.game.seed);
        console::run(&mut controller).context("console session failed")?;
        return Ok(());
    }

    run_tui(&config).context("terminal UI failed")?;
    Ok(())
}

fn new_controller<D: GameDisplay>(display: D, seed: Option<u64>) -> GameController<D> {
    match seed {
        Some(seed) => GameController::with_seed(display, seed),
        None => GameController::new(display),
    }
}

fn run_tui(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    // The difficulty prompt needs the terminal, so the game starts here
    let display = TerminalDisplay::new(terminal, &config.ui, config.game.difficulty);
    let controller = new_controller(display, config.game.seed);
    let mut app = App::new(controller, &config.ui);
    let res = app.run();

    // Restore terminal even on error
    let terminal = app.terminal_mut();
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
