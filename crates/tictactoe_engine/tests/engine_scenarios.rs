//! Scenario tests for the minimax opponent.

use tictactoe_engine::{
    Board, EngineErrorKind, Game, GameStatus, Mark, Move, Outcome, analyze, find_best_move,
};

fn mv(row: usize, col: usize) -> Move {
    Move::new(row, col).unwrap()
}

fn board_with(opponent: &[(usize, usize)], player: &[(usize, usize)]) -> Board {
    let mut board = Board::new();
    for &(r, c) in opponent {
        board.place(mv(r, c), Mark::Opponent).unwrap();
    }
    for &(r, c) in player {
        board.place(mv(r, c), Mark::Player).unwrap();
    }
    board
}

#[test]
fn test_completes_own_row() {
    let board = board_with(&[(0, 0), (0, 1)], &[]);
    assert_eq!(find_best_move(&board).unwrap(), mv(0, 2));
}

#[test]
fn test_completes_row_over_blocking() {
    // Both sides threaten; winning beats blocking.
    let board = board_with(&[(0, 0), (0, 1)], &[(1, 0), (1, 1), (2, 2)]);
    assert_eq!(find_best_move(&board).unwrap(), mv(0, 2));
}

#[test]
fn test_blocks_imminent_player_win() {
    let board = board_with(&[(0, 0)], &[(1, 0), (1, 1)]);
    assert_eq!(find_best_move(&board).unwrap(), mv(1, 2));
}

#[test]
fn test_answers_corner_with_center() {
    let board = board_with(&[], &[(0, 0)]);
    assert_eq!(find_best_move(&board).unwrap(), mv(1, 1));
}

#[test]
fn test_empty_board_tie_break_is_row_major_first() {
    // Every opening draws with best play, so the first square wins the tie.
    for _ in 0..3 {
        assert_eq!(find_best_move(&Board::new()).unwrap(), mv(0, 0));
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    let board = board_with(&[(1, 1)], &[(0, 0), (2, 2)]);
    let before = board;
    let first = find_best_move(&board).unwrap();
    let second = find_best_move(&board).unwrap();
    assert_eq!(first, second);
    assert_eq!(board, before);
}

#[test]
fn test_full_board_fails_loudly() {
    let board: Board = "XOX/XOO/OXX".parse().unwrap();
    let err = find_best_move(&board).unwrap_err();
    assert_eq!(err.kind(), &EngineErrorKind::NoAvailableMoves);
}

/// Plays the engine against itself from an empty board.
fn self_play(first: Mark) -> Game {
    let mut game = Game::new(first);
    while game.status() == GameStatus::InProgress {
        let analysis = analyze(game.board(), game.to_move()).unwrap();
        game.make_move(*analysis.best_move()).unwrap();
    }
    game
}

#[test]
fn test_self_play_is_a_draw() {
    for first in [Mark::Player, Mark::Opponent] {
        let game = self_play(first);
        assert_eq!(game.status(), GameStatus::Over(Outcome::Draw));
        assert_eq!(game.history().len(), 9);
    }
}

/// Tries every possible player move against the engine's replies.
///
/// Returns the number of finished games explored.
fn exhaust_player_strategies(game: &Game) -> usize {
    match game.status() {
        GameStatus::Over(result) => {
            assert_ne!(
                result,
                Outcome::Win(Mark::Player),
                "engine lost after {:?}",
                game.history()
            );
            1
        }
        GameStatus::InProgress => match game.to_move() {
            Mark::Opponent => {
                let mut next = game.clone();
                next.make_move(find_best_move(game.board()).unwrap()).unwrap();
                exhaust_player_strategies(&next)
            }
            Mark::Player => game
                .board()
                .available_moves()
                .map(|mv| {
                    let mut next = game.clone();
                    next.make_move(mv).unwrap();
                    exhaust_player_strategies(&next)
                })
                .sum(),
        },
    }
}

#[test]
fn test_engine_never_loses() {
    assert!(exhaust_player_strategies(&Game::new(Mark::Player)) > 0);
    assert!(exhaust_player_strategies(&Game::new(Mark::Opponent)) > 0);
}
