//! Analysis of a board given on the command line.

use anyhow::{Result, bail};
use std::io::Write;
use tictactoe_engine::{Board, Mark, analyze, outcome};
use tracing::{info, instrument};

/// Writes `board` followed by the best move for `mark`.
///
/// A finished board gets its result instead of a move. Boards whose mark
/// counts differ by more than one cannot come from alternating turns and
/// are rejected.
#[instrument(skip(board, out), fields(mark = %mark))]
pub fn write_best_move(board: &Board, mark: Mark, mut out: impl Write) -> Result<()> {
    let (x, o) = (board.count(Mark::Player), board.count(Mark::Opponent));
    if x.abs_diff(o) > 1 {
        bail!("Unreachable board: {x} X marks and {o} O marks");
    }

    write!(out, "{board}")?;

    if let Some(result) = outcome(board) {
        info!(%result, "Board is already finished");
        writeln!(out, "{result}")?;
        return Ok(());
    }

    let analysis = analyze(board, mark)?;
    writeln!(
        out,
        "Best move: {} (score {}, {} positions, {} cutoffs)",
        analysis.best_move(),
        analysis.score(),
        analysis.stats().nodes,
        analysis.stats().cutoffs
    )?;
    Ok(())
}
