//! Draw detection logic for tic-tac-toe.

use crate::Board;

/// Checks if the board is full (no empty squares).
///
/// This does not look for lines. A full board can still be a win, so callers
/// must check [`super::is_winning`] first, or use [`super::outcome`].
pub fn is_draw(board: &Board) -> bool {
    board.available_moves().next().is_none()
}
