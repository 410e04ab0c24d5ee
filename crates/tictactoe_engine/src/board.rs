//! The 3x3 board.

use crate::action::{Move, SIZE};
use crate::error::{EngineError, EngineErrorKind};
use crate::types::{Mark, Square};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// 3x3 tic-tac-toe board.
///
/// `Board` is a small `Copy` value. The search engine takes its own copy and
/// mutates that, so the board owned by the game loop is never touched while
/// a move is being computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [[Square; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given coordinate.
    pub fn get(&self, mv: Move) -> Square {
        self.squares[mv.row()][mv.col()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        self.get(mv) == Square::Empty
    }

    /// Places a mark on an empty square.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn place(&mut self, mv: Move, mark: Mark) -> Result<(), EngineError> {
        if !self.is_empty(mv) {
            return Err(EngineError::new(EngineErrorKind::SquareOccupied(mv)));
        }
        self.set(mv, Square::Occupied(mark));
        Ok(())
    }

    /// Overwrites a square without checking it first.
    pub(crate) fn set(&mut self, mv: Move, square: Square) {
        self.squares[mv.row()][mv.col()] = square;
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Square; SIZE]; SIZE] {
        &self.squares
    }

    /// Empty coordinates in row-major order.
    ///
    /// The order is part of the contract: the search breaks ties in favour of
    /// the first optimal move yielded here.
    pub fn available_moves(&self) -> impl Iterator<Item = Move> + '_ {
        Move::ALL.into_iter().filter(|&mv| self.is_empty(mv))
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|&&sq| sq == Square::Occupied(mark))
            .count()
    }
}

/// Renders each row as three cells joined by `|`, followed by a `-----` rule.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let [a, b, c] = row.map(Square::symbol);
            writeln!(f, "{a}|{b}|{c}")?;
            writeln!(f, "-----")?;
        }
        Ok(())
    }
}

/// Parses nine square symbols in row-major order.
///
/// `X` and `O` (either case) are marks; `.` and `_` are empty squares.
/// Whitespace, `|` and `/` are ignored so `"XO./.X./..O"` and
/// `"X|O|.\n.|X|.\n.|.|O"` both parse.
impl FromStr for Board {
    type Err = EngineError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut filled = 0;
        for c in s.chars() {
            if c.is_whitespace() || c == '|' || c == '/' {
                continue;
            }
            let square = match c {
                '.' | '_' => Square::Empty,
                other => match Mark::from_symbol(other) {
                    Some(mark) => Square::Occupied(mark),
                    None => {
                        return Err(EngineError::new(EngineErrorKind::InvalidBoard(format!(
                            "unexpected character {other:?}"
                        ))));
                    }
                },
            };
            let Some(mv) = Move::from_index(filled) else {
                return Err(EngineError::new(EngineErrorKind::InvalidBoard(
                    "more than 9 squares".to_string(),
                )));
            };
            board.set(mv, square);
            filled += 1;
        }
        if filled != SIZE * SIZE {
            return Err(EngineError::new(EngineErrorKind::InvalidBoard(format!(
                "expected 9 squares, found {filled}"
            ))));
        }
        Ok(board)
    }
}
