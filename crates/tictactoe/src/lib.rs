//! Terminal tic-tac-toe against the minimax opponent from `tictactoe_engine`.
//!
//! - **Console**: the turn-taking loop over any `BufRead`/`Write` pair
//! - **Input**: parsing `row col` lines into legal moves
//! - **Config**: who moves first and whether to show search statistics
//! - **Self-play**: the engine against itself
//! - **Best move**: analysis of a single board

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod best_move;
mod cli;
mod config;
mod console;
mod input;
mod self_play;

pub use best_move::write_best_move;
pub use cli::{Cli, Command, Side};
pub use config::{ConfigError, FirstPlayer, GameConfig};
pub use console::{Console, PROMPT};
pub use input::{InputError, parse_move};
pub use self_play::{PlayedMove, SelfPlayReport, self_play};
