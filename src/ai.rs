//! Move selection for computer-controlled players
//!
//! A [`MoveSelector`] looks at a board and names the cell to play. Two
//! selectors ship with the crate:
//!
//! - [`FirstAvailable`]: plays the lowest empty cell (easy)
//! - [`Minimax`]: full-depth game-tree search with alpha-beta pruning (hard)
//!
//! The game picks between them through [`Difficulty`].

pub mod easy;
pub mod minimax;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub use easy::FirstAvailable;
pub use minimax::{
    LOSS_SCORE, Minimax, SEARCH_CEILING, SEARCH_FLOOR, SearchResult, TIE_SCORE, WIN_SCORE,
};

use crate::{
    Result,
    tictactoe::{Board, Player},
};

/// Interface shared by every computer opponent.
///
/// Selectors are stateless between calls; everything they need arrives as
/// arguments, and the board is never modified.
pub trait MoveSelector {
    /// Choose a cell for `current` to play, with `opponent` moving next.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoValidMoves`] if the board leaves nothing to
    /// play.
    fn select_move(&self, board: &Board, current: &Player, opponent: &Player) -> Result<usize>;

    /// Human-readable name, used in logs and CLI output.
    fn name(&self) -> &str;
}

/// How strong the computer player is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    /// First open cell
    Easy,
    /// Minimax with alpha-beta pruning
    #[default]
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Hard => "Hard",
        };
        f.write_str(label)
    }
}

impl FromStr for Difficulty {
    type Err = crate::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "easy" | "0" => Ok(Difficulty::Easy),
            "hard" | "1" => Ok(Difficulty::Hard),
            _ => Err(crate::Error::ParseDifficulty {
                input: s.to_string(),
                expected: "easy/0, hard/1".to_string(),
            }),
        }
    }
}
