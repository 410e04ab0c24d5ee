//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// One of the two marks that can be placed on the board.
///
/// The human plays [`Mark::Player`] (`X`) and the search engine plays
/// [`Mark::Opponent`] (`O`). These identities are fixed: the engine always
/// maximizes for the opponent, whichever side happens to be moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(strum::EnumIter))]
pub enum Mark {
    /// The human player (`X`).
    Player,
    /// The automated opponent (`O`).
    Opponent,
}

impl Mark {
    /// Returns the other mark.
    pub fn other(self) -> Self {
        match self {
            Mark::Player => Mark::Opponent,
            Mark::Opponent => Mark::Player,
        }
    }

    /// Returns the character used to render this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::Player => 'X',
            Mark::Opponent => 'O',
        }
    }

    /// Parses a rendered mark (case-insensitive).
    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'X' => Some(Mark::Player),
            'O' => Some(Mark::Opponent),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Character used when rendering the board (space for empty).
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(mark) => mark.symbol(),
        }
    }
}
