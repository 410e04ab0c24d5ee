//! Win detection logic for tic-tac-toe.

use crate::types::{Mark, Square};
use crate::{Board, Move};

/// The eight lines as row-major indices.
#[rustfmt::skip]
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],             // Diagonals
];

/// Checks if `mark` holds any full row, column or diagonal.
pub fn is_winning(board: &Board, mark: Mark) -> bool {
    let target = Square::Occupied(mark);
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| board.get(Move::ALL[i]) == target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!is_winning(&board, Mark::Player));
        assert!(!is_winning(&board, Mark::Opponent));
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert!(is_winning(&board, Mark::Player));
        assert!(!is_winning(&board, Mark::Opponent));
    }

    #[test]
    fn test_winner_column() {
        let board: Board = ".OX/.OX/.O.".parse().unwrap();
        assert!(is_winning(&board, Mark::Opponent));
    }

    #[test]
    fn test_winner_both_diagonals() {
        let main: Board = "O../.O./..O".parse().unwrap();
        let anti: Board = "..X/.X./X..".parse().unwrap();
        assert!(is_winning(&main, Mark::Opponent));
        assert!(is_winning(&anti, Mark::Player));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX./O../...".parse().unwrap();
        assert!(!is_winning(&board, Mark::Player));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XOX/.../...".parse().unwrap();
        assert!(!is_winning(&board, Mark::Player));
        assert!(!is_winning(&board, Mark::Opponent));
    }
}
