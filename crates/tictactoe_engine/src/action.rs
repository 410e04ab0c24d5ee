//! Board coordinates.
//!
//! A [`Move`] is always in range: the only way to build one from untrusted
//! numbers is [`Move::new`], which rejects anything outside the 3x3 grid.

use crate::error::{EngineError, EngineErrorKind};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const SIZE: usize = 3;

/// A (row, column) coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// All nine coordinates in row-major order.
    pub const ALL: [Move; SIZE * SIZE] = [
        Move::at(0, 0),
        Move::at(0, 1),
        Move::at(0, 2),
        Move::at(1, 0),
        Move::at(1, 1),
        Move::at(1, 2),
        Move::at(2, 0),
        Move::at(2, 1),
        Move::at(2, 2),
    ];

    /// Creates a move, rejecting coordinates outside the grid.
    #[track_caller]
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, EngineError> {
        if row >= SIZE || col >= SIZE {
            return Err(EngineError::new(EngineErrorKind::OutOfBounds(row, col)));
        }
        Ok(Self::at(row, col))
    }

    const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a move from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// Returns the row (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Returns the column (0-2).
    pub fn col(self) -> usize {
        self.col
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
