//! Command-line interface for tictactoe.

use crate::config::FirstPlayer;
use clap::{Parser, Subcommand, ValueEnum};
use tictactoe_engine::Mark;

/// Tic-tac-toe against an opponent that never loses
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against an optimal minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Who moves first (overrides the config file)
        #[arg(long, value_enum)]
        first: Option<FirstPlayer>,

        /// Print search statistics after each computer move
        #[arg(long)]
        stats: bool,
    },

    /// Let the engine play both sides and print the game
    SelfPlay {
        /// Who moves first
        #[arg(long, value_enum, default_value_t = FirstPlayer::Human)]
        first: FirstPlayer,

        /// Print the transcript as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the best move for a board, e.g. "XO./.X./..."
    BestMove {
        /// Nine squares in row-major order: X, O, and . or _ for empty
        board: String,

        /// Side to find a move for
        #[arg(long, value_enum, default_value_t = Side::Opponent)]
        side: Side,
    },
}

/// Side selector for analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    /// The human side (X)
    Player,
    /// The computer side (O)
    Opponent,
}

impl From<Side> for Mark {
    fn from(side: Side) -> Self {
        match side {
            Side::Player => Mark::Player,
            Side::Opponent => Mark::Opponent,
        }
    }
}
