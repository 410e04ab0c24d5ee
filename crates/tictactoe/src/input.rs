//! Parsing the human's move from a line of text.

use derive_more::Display;
use tictactoe_engine::{Board, Move};
use tracing::instrument;

/// Why a line of input was not accepted as a move.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// A token was not an integer.
    #[display("Invalid input. Enter row and column as numbers.")]
    NotNumbers,

    /// The line did not hold exactly two integers.
    #[display("Enter exactly two numbers: row and column.")]
    WrongArity(usize),

    /// The coordinates are off the board or the square is taken.
    #[display("That square is not available.")]
    Unavailable,
}

impl std::error::Error for InputError {}

/// Parses `"row col"` into a move that is legal on `board`.
#[instrument(skip(board))]
pub fn parse_move(line: &str, board: &Board) -> Result<Move, InputError> {
    let numbers = line
        .split_whitespace()
        .map(str::parse::<i64>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| InputError::NotNumbers)?;

    let [row, col] = numbers[..] else {
        return Err(InputError::WrongArity(numbers.len()));
    };

    let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
        return Err(InputError::Unavailable);
    };

    match Move::new(row, col) {
        Ok(mv) if board.is_empty(mv) => Ok(mv),
        _ => Err(InputError::Unavailable),
    }
}
