//! Engine error types.

use crate::Move;
use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong inside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum EngineErrorKind {
    /// Move selection was requested on a board with no empty squares.
    #[display("No available moves on a full board")]
    NoAvailableMoves,

    /// A coordinate fell outside the 3x3 grid.
    #[display("Position ({}, {}) is out of bounds (rows and columns are 0-2)", _0, _1)]
    OutOfBounds(usize, usize),

    /// The targeted square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Move),

    /// A move was attempted after the game ended.
    #[display("Game is already over")]
    GameOver,

    /// Board text could not be parsed.
    #[display("Invalid board: {}", _0)]
    InvalidBoard(String),
}

/// Engine error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Engine error: {} at {}:{}", kind, file, line)]
pub struct EngineError {
    /// Error kind.
    pub kind: EngineErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EngineError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: EngineErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &EngineErrorKind {
        &self.kind
    }
}
