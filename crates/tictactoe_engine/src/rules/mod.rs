//! Game rules for tic-tac-toe.
//!
//! Pure functions classifying a board. Win and draw detection are kept
//! separate; [`outcome`] is the one place that combines them, and it always
//! checks for a win before it considers a draw.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::is_winning;

use crate::Board;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Three in a row for the given mark.
    Win(Mark),
    /// Full board with no line.
    Draw,
}

impl Outcome {
    /// Minimax value of the outcome from the opponent's point of view.
    pub fn score(self) -> i32 {
        match self {
            Outcome::Win(Mark::Opponent) => 1,
            Outcome::Win(Mark::Player) => -1,
            Outcome::Draw => 0,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(mark) => write!(f, "{mark} wins!"),
            Outcome::Draw => write!(f, "It's a draw!"),
        }
    }
}

/// Classifies a board as finished or still open.
///
/// Checked in order: opponent win, player win, full board. A full board that
/// contains a line is a win, never a draw.
pub fn outcome(board: &Board) -> Option<Outcome> {
    if is_winning(board, Mark::Opponent) {
        Some(Outcome::Win(Mark::Opponent))
    } else if is_winning(board, Mark::Player) {
        Some(Outcome::Win(Mark::Player))
    } else if is_draw(board) {
        Some(Outcome::Draw)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_board_has_no_outcome() {
        assert_eq!(outcome(&Board::new()), None);
        let board: Board = "XO..X....".parse().unwrap();
        assert_eq!(outcome(&board), None);
    }

    #[test]
    fn test_full_winning_board_is_a_win() {
        // Last mark completes the top row and fills the board.
        let board: Board = "XXX/OOX/XOO".parse().unwrap();
        assert!(is_draw(&board));
        assert_eq!(outcome(&board), Some(Outcome::Win(Mark::Player)));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(outcome(&board), Some(Outcome::Draw));
        assert_eq!(Outcome::Draw.score(), 0);
    }

    #[test]
    fn test_scores_follow_fixed_identities() {
        assert_eq!(Outcome::Win(Mark::Opponent).score(), 1);
        assert_eq!(Outcome::Win(Mark::Player).score(), -1);
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(Outcome::Win(Mark::Player).to_string(), "X wins!");
        assert_eq!(Outcome::Win(Mark::Opponent).to_string(), "O wins!");
        assert_eq!(Outcome::Draw.to_string(), "It's a draw!");
    }
}
