//! Minimax search with alpha-beta pruning.
//!
//! The opponent is always the maximizer and the player always the minimizer.
//! Terminal boards score +1 (opponent wins), -1 (player wins) or 0 (draw);
//! open boards are scored only by expanding them.
//!
//! The search works on its own copy of the board. Each explored move is
//! placed through a [`Placement`] guard which clears the square again when
//! it goes out of scope, so a pruning `break` cannot leave a stray mark
//! behind.

use crate::error::{EngineError, EngineErrorKind};
use crate::rules::outcome;
use crate::types::{Mark, Square};
use crate::{Board, Move};
use derive_getters::Getters;
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument};

/// Counters collected during a single search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Boards visited, including the root's children.
    pub nodes: u64,
    /// Times the remaining siblings of a node were skipped.
    pub cutoffs: u64,
}

/// Result of analysing a board for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Analysis {
    /// Chosen move.
    best_move: Move,
    /// Minimax value of the chosen move (opponent's point of view).
    score: i32,
    /// Search counters.
    stats: SearchStats,
}

/// A mark placed on the working board for the lifetime of the guard.
struct Placement<'a> {
    board: &'a mut Board,
    at: Move,
}

impl<'a> Placement<'a> {
    fn new(board: &'a mut Board, at: Move, mark: Mark) -> Self {
        board.set(at, Square::Occupied(mark));
        Self { board, at }
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.set(self.at, Square::Empty);
    }
}

/// Mark placed by the side with the given role.
fn mark_for(maximizing: bool) -> Mark {
    if maximizing { Mark::Opponent } else { Mark::Player }
}

/// Minimax value of `board` with `maximizing` deciding who moves next.
///
/// Always one of -1, 0 or 1. The board is taken by reference and copied; the
/// caller's board is never modified.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, maximizing: bool) -> i32 {
    let mut work = *board;
    let mut stats = SearchStats::default();
    let score = alphabeta(&mut work, maximizing, i32::MIN, i32::MAX, &mut stats);
    debug!(score, nodes = stats.nodes, cutoffs = stats.cutoffs, "Evaluated board");
    score
}

/// Recursive alpha-beta search over the working board.
///
/// `alpha` and `beta` are passed by value; siblings only influence each other
/// through the scores they return.
fn alphabeta(
    board: &mut Board,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;

    if let Some(result) = outcome(board) {
        return result.score();
    }

    let mark = mark_for(maximizing);
    let moves: Vec<Move> = board.available_moves().collect();
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for mv in moves {
        let mut placed = Placement::new(board, mv, mark);
        let score = alphabeta(&mut placed, !maximizing, alpha, beta, stats);
        drop(placed);

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }
        if beta <= alpha {
            stats.cutoffs += 1;
            break;
        }
    }

    best
}

/// Picks the best move for `mark` on `board`.
///
/// Candidate moves are tried in row-major order and each is scored with a
/// fresh full-width window. The opponent keeps a candidate only if it scores
/// strictly higher than the best so far, the player only if it scores
/// strictly lower, so ties go to the first move in row-major order.
///
/// # Errors
///
/// Returns [`EngineErrorKind::NoAvailableMoves`] when the board is full.
#[track_caller]
#[instrument(skip(board), fields(mark = %mark))]
pub fn analyze(board: &Board, mark: Mark) -> Result<Analysis, EngineError> {
    let maximizing = mark == Mark::Opponent;
    let mut work = *board;
    let mut stats = SearchStats::default();
    let mut best: Option<(Move, i32)> = None;

    let moves: Vec<Move> = work.available_moves().collect();
    for mv in moves {
        let mut placed = Placement::new(&mut work, mv, mark);
        let score = alphabeta(&mut placed, !maximizing, i32::MIN, i32::MAX, &mut stats);
        drop(placed);

        let improves = match best {
            None => true,
            Some((_, best_score)) if maximizing => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if improves {
            best = Some((mv, score));
        }
    }

    let Some((best_move, score)) = best else {
        return Err(EngineError::new(EngineErrorKind::NoAvailableMoves));
    };

    debug!(
        best_move = %best_move,
        score,
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        "Search complete"
    );

    Ok(Analysis {
        best_move,
        score,
        stats,
    })
}

/// Picks the opponent's move.
///
/// # Errors
///
/// Returns [`EngineErrorKind::NoAvailableMoves`] when called on a full board.
/// The game loop should check [`crate::outcome`] before asking for a move.
#[track_caller]
#[instrument(skip(board))]
pub fn find_best_move(board: &Board) -> Result<Move, EngineError> {
    analyze(board, Mark::Opponent).map(|analysis| analysis.best_move)
}
