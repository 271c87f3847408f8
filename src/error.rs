//! Error types for the noughts crate

use thiserror::Error;

/// Main error type for the noughts crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("invalid move: position {position} is already occupied")]
    OccupiedCell { position: usize },

    #[error("game already over, reset the board to play again")]
    GameOver,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("automated move requested on a human turn ({player})")]
    NotAutomated { player: String },

    #[error("automated move requested after the game is over")]
    AutomatedMoveAfterGameOver,

    #[error("board string has the wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid difficulty '{input}'. Expected one of: {expected}")]
    ParseDifficulty { input: String, expected: String },

    #[error("invalid game mode '{input}'. Expected one of: {expected}")]
    ParseGameMode { input: String, expected: String },
}

/// Broad classification of an [`Error`].
///
/// Callers that only care about how to react (re-prompt, abort, fix the
/// calling code) can branch on this instead of on individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The move was rejected; nothing changed and the caller may pick again.
    InvalidMove,
    /// A search was asked to move on a board with no empty cell.
    NoMoveAvailable,
    /// An operation was called in a state where it is not allowed.
    Misuse,
    /// Textual input could not be turned into a board or setting.
    Parse,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidPosition { .. } | Error::OccupiedCell { .. } | Error::GameOver => {
                ErrorKind::InvalidMove
            }
            Error::NoValidMoves => ErrorKind::NoMoveAvailable,
            Error::NotAutomated { .. } | Error::AutomatedMoveAfterGameOver => ErrorKind::Misuse,
            Error::InvalidBoardLength { .. }
            | Error::InvalidCellCharacter { .. }
            | Error::ParseDifficulty { .. }
            | Error::ParseGameMode { .. } => ErrorKind::Parse,
        }
    }

    /// Shorthand for `self.kind() == ErrorKind::InvalidMove`.
    pub fn is_invalid_move(&self) -> bool {
        self.kind() == ErrorKind::InvalidMove
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_rejections_share_a_kind() {
        assert_eq!(
            Error::InvalidPosition { position: 9 }.kind(),
            ErrorKind::InvalidMove
        );
        assert_eq!(
            Error::OccupiedCell { position: 4 }.kind(),
            ErrorKind::InvalidMove
        );
        assert!(Error::GameOver.is_invalid_move());
    }

    #[test]
    fn misuse_is_not_an_invalid_move() {
        let err = Error::NotAutomated {
            player: "Human Player: 'O'".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Misuse);
        assert!(!err.is_invalid_move());
        assert_eq!(Error::AutomatedMoveAfterGameOver.kind(), ErrorKind::Misuse);
    }

    #[test]
    fn messages_name_the_position() {
        let msg = Error::OccupiedCell { position: 7 }.to_string();
        assert!(msg.contains('7'), "unexpected message: {msg}");
    }
}
