//! tictactoe - play against an opponent that never loses.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tictactoe::{Cli, Command, Console, FirstPlayer, GameConfig, Side, self_play, write_best_move};
use tictactoe_engine::Board;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            first,
            stats,
        } => run_play(config, first, stats),
        Command::SelfPlay { first, json } => run_self_play(first, json),
        Command::BestMove { board, side } => run_best_move(&board, side),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play(config: Option<PathBuf>, first: Option<FirstPlayer>, stats: bool) -> Result<()> {
    let config = match config {
        Some(path) => GameConfig::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    }
    .with_overrides(first, stats);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    let outcome = console.play(&config)?;
    info!(%outcome, "Game complete");
    Ok(())
}

/// Run the engine against itself
#[instrument]
fn run_self_play(first: FirstPlayer, json: bool) -> Result<()> {
    let report = self_play(first.mark())?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.write_text(std::io::stdout().lock())?;
    }
    Ok(())
}

/// Analyze a board given on the command line
#[instrument]
fn run_best_move(board: &str, side: Side) -> Result<()> {
    let board: Board = board.parse().context("Failed to parse board")?;
    write_best_move(&board, side.into(), std::io::stdout().lock())
        .context("Failed to analyze board")
}
