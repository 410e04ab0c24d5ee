//! Tic-tac-toe board logic and an optimal minimax opponent.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, its squares and row-major coordinates
//! - **Rules**: win and draw detection, combined by [`outcome`]
//! - **Search**: minimax with alpha-beta pruning, [`find_best_move`]
//! - **Game**: turn-taking state owned by a driving loop
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Board, Mark, Move, find_best_move};
//!
//! # fn example() -> Result<(), tictactoe_engine::EngineError> {
//! let mut board = Board::new();
//! board.place(Move::new(0, 0)?, Mark::Opponent)?;
//! board.place(Move::new(0, 1)?, Mark::Opponent)?;
//! board.place(Move::new(1, 0)?, Mark::Player)?;
//! board.place(Move::new(1, 1)?, Mark::Player)?;
//!
//! assert_eq!(find_best_move(&board)?, Move::new(0, 2)?);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod error;
mod game;
pub mod rules;
mod search;
mod types;

pub use action::{Move, SIZE};
pub use board::Board;
pub use error::{EngineError, EngineErrorKind};
pub use game::{Game, GameStatus};
pub use rules::{Outcome, is_draw, is_winning, outcome};
pub use search::{Analysis, SearchStats, analyze, evaluate, find_best_move};
pub use types::{Mark, Square};
