use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;

use connect_four::arena;
use connect_four::config::{AppConfig, ConfigSource};
use connect_four::logging::{self, LogTarget};

/// Measure an opponent against a random player.
#[derive(Parser)]
#[command(name = "arena", about = "Play many games between a random player and the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override number of games
    #[arg(long)]
    games: Option<usize>,

    /// Override opponent difficulty (1 or 2)
    #[arg(long)]
    difficulty: Option<u8>,

    /// Seed both players for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut app_config, source) = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        app_config.arena.games = games;
    }
    if let Some(difficulty) = cli.difficulty {
        app_config.arena.difficulty = difficulty;
    }
    if cli.seed.is_some() {
        app_config.arena.seed = cli.seed;
    }
    app_config.validate().context("invalid settings")?;

    logging::init(&app_config.logging, LogTarget::Stderr).context("initializing logging")?;
    if source == ConfigSource::Defaults {
        warn!(path = %cli.config.display(), "config file not found, using defaults");
    }

    let report = arena::run(&app_config.arena).context("arena run failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Difficulty {} over {} games",
        report.difficulty, report.games
    );
    println!("-------------------------------------------");
    println!(
        "computer: {:.1}% | player: {:.1}% | draw: {:.1}% | avg_len: {:.1}",
        report.computer_win_rate() * 100.0,
        report.player_win_rate() * 100.0,
        report.draw_rate() * 100.0,
        report.average_game_length(),
    );

    Ok(())
}
