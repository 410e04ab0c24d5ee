//! The engine playing both sides.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use tictactoe_engine::{Game, GameStatus, Mark, Move, Outcome, analyze};
use tracing::{info, instrument};

/// One move of a self-play game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayedMove {
    /// Side that moved.
    pub mark: Mark,
    /// Square played.
    #[serde(rename = "move")]
    pub mv: Move,
    /// Minimax value after the move (opponent's point of view).
    pub score: i32,
    /// Positions searched to choose the move.
    pub nodes: u64,
}

/// Transcript of a finished self-play game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfPlayReport {
    /// Side that moved first.
    pub first: Mark,
    /// Moves in order.
    pub moves: Vec<PlayedMove>,
    /// Final result.
    pub outcome: Outcome,
}

impl SelfPlayReport {
    /// Writes a human-readable transcript.
    pub fn write_text(&self, mut out: impl Write) -> Result<()> {
        for (i, played) in self.moves.iter().enumerate() {
            writeln!(
                out,
                "{:>2}. {} {} (score {}, {} positions)",
                i + 1,
                played.mark,
                played.mv,
                played.score,
                played.nodes
            )?;
        }
        writeln!(out, "{}", self.outcome)?;
        Ok(())
    }
}

/// Plays a full game with the engine choosing every move.
#[instrument]
pub fn self_play(first: Mark) -> Result<SelfPlayReport> {
    let mut game = Game::new(first);
    let mut moves = Vec::new();

    let outcome = loop {
        let mark = game.to_move();
        let analysis = analyze(game.board(), mark)?;
        moves.push(PlayedMove {
            mark,
            mv: *analysis.best_move(),
            score: *analysis.score(),
            nodes: analysis.stats().nodes,
        });
        if let GameStatus::Over(outcome) = game.make_move(*analysis.best_move())? {
            break outcome;
        }
    };

    info!(%outcome, moves = moves.len(), "Self-play finished");
    Ok(SelfPlayReport {
        first,
        moves,
        outcome,
    })
}
