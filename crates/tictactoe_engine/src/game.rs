//! Turn-taking state for a single game.

use crate::error::{EngineError, EngineErrorKind};
use crate::rules::{Outcome, outcome};
use crate::types::Mark;
use crate::{Board, Move};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game has ended.
    Over(Outcome),
}

/// Tic-tac-toe game: the authoritative board plus whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Mark,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with `first` to move.
    #[instrument]
    pub fn new(first: Mark) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the current side's mark at `mv`.
    ///
    /// After the mark is placed the board is classified (win before draw);
    /// the turn passes to the other side only while the game is still open.
    #[track_caller]
    #[instrument(skip(self), fields(mark = %self.to_move))]
    pub fn make_move(&mut self, mv: Move) -> Result<GameStatus, EngineError> {
        if self.status != GameStatus::InProgress {
            return Err(EngineError::new(EngineErrorKind::GameOver));
        }

        self.board.place(mv, self.to_move)?;
        self.history.push(mv);
        debug!(%mv, moves = self.history.len(), "Move applied");

        match outcome(&self.board) {
            Some(result) => {
                info!(%result, "Game over");
                self.status = GameStatus::Over(result);
            }
            None => self.to_move = self.to_move.other(),
        }

        Ok(self.status)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Mark::Player)
    }
}
