//! Interactive console game: the human against the minimax opponent.

use crate::config::GameConfig;
use crate::input::parse_move;
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tictactoe_engine::{Board, Game, GameStatus, Mark, Move, Outcome, analyze};
use tracing::{debug, info, instrument, warn};

/// Prompt shown before reading the human's move.
pub const PROMPT: &str = "Enter your move (row col): ";

/// A game played over a line-based reader and a writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given input and output.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console and returns its output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays one game to completion and returns its outcome.
    ///
    /// Fails if input ends before the game does.
    #[instrument(skip(self))]
    pub fn play(&mut self, config: &GameConfig) -> Result<Outcome> {
        let mut game = Game::new(config.first_player().mark());
        info!(first = %game.to_move(), "Starting game");

        loop {
            self.render(game.board())?;

            let mv = match game.to_move() {
                Mark::Player => self.read_move(game.board())?,
                Mark::Opponent => self.computer_move(game.board(), *config.show_stats())?,
            };

            if let GameStatus::Over(outcome) = game.make_move(mv)? {
                self.render(game.board())?;
                writeln!(self.output, "{outcome}")?;
                info!(%outcome, moves = game.history().len(), "Game finished");
                return Ok(outcome);
            }
        }
    }

    /// Prompts until the human enters a legal move.
    fn read_move(&mut self, board: &Board) -> Result<Move> {
        let mut line = String::new();
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?;
            if read == 0 {
                bail!("Input closed before the game finished");
            }

            match parse_move(&line, board) {
                Ok(mv) => {
                    debug!(%mv, "Human move");
                    return Ok(mv);
                }
                Err(e) => {
                    warn!(input = line.trim(), error = %e, "Rejected move");
                    writeln!(self.output, "{e}")?;
                }
            }
        }
    }

    /// Asks the engine for the opponent's move.
    fn computer_move(&mut self, board: &Board, show_stats: bool) -> Result<Move> {
        writeln!(self.output, "AI is making a move...")?;
        let analysis = analyze(board, Mark::Opponent)?;
        if show_stats {
            writeln!(
                self.output,
                "Searched {} positions ({} cutoffs), score {}",
                analysis.stats().nodes,
                analysis.stats().cutoffs,
                analysis.score()
            )?;
        }
        Ok(*analysis.best_move())
    }

    fn render(&mut self, board: &Board) -> Result<()> {
        write!(self.output, "{board}")?;
        Ok(())
    }
}
