//! Error type shared by every fallible chess_core operation.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A piece-placement string (or color token) could not be decoded.
    /// Nothing is installed when this is returned.
    #[error("malformed position '{placement}': {reason}")]
    MalformedPosition { placement: String, reason: String },

    /// The move is off the board or not in the current legal-move set.
    /// The board is left untouched.
    #[error("illegal move {mv}: {reason}")]
    IllegalMove { mv: String, reason: String },

    /// The caller broke an operation's contract, e.g. asked for a best move
    /// in a finished game.
    #[error("precondition violated: {0}")]
    Precondition(String),
}

impl ChessError {
    pub(crate) fn malformed(placement: &str, reason: impl Into<String>) -> Self {
        ChessError::MalformedPosition {
            placement: placement.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn illegal(mv: impl ToString, reason: impl Into<String>) -> Self {
        ChessError::IllegalMove {
            mv: mv.to_string(),
            reason: reason.into(),
        }
    }
}
