//! Error types for the rules engine

use crate::types::{Color, Square};

/// Errors surfaced by the rules engine and the notation processor.
///
/// All of them are validation failures: nothing is retried and no board state
/// is changed before one is returned.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Rank or file outside 0-7
    #[error("Illegal position: rank={rank}, file={file}")]
    IllegalPosition { rank: i32, file: i32 },

    /// Square does not hold the piece the notation names for it
    #[error("Illegal square: {0}")]
    IllegalSquare(String),

    /// Query or move on a piece that does not belong to the side to move
    #[error("{square} does not hold a piece of the side to move ({active:?})")]
    ActiveColor { square: Square, active: Color },

    /// Destination not in the legal-move set, or bad promotion
    #[error("Illegal move {uci}: {reason}")]
    IllegalMove { uci: String, reason: String },

    /// Square expected to hold a piece is empty
    #[error("No piece on {0}")]
    PieceNotFound(Square),

    /// SAN matched no source square
    #[error("No piece can play {0}")]
    ImpossibleMove(String),

    /// SAN matched several source squares
    #[error("Ambiguous move {san}: candidates {candidates:?}")]
    AmbiguousAlgebraicMove { san: String, candidates: Vec<Square> },

    /// Malformed SAN/UCI text
    #[error("Invalid notation: {0}")]
    InvalidNotation(String),
}

impl ChessError {
    pub(crate) fn illegal_move(uci: impl Into<String>, reason: impl Into<String>) -> Self {
        ChessError::IllegalMove {
            uci: uci.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ChessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ChessError::IllegalPosition { rank: 8, file: 0 };
        assert_eq!(err.to_string(), "Illegal position: rank=8, file=0");

        let sq: Square = "e4".parse().unwrap();
        assert_eq!(ChessError::PieceNotFound(sq).to_string(), "No piece on e4");

        let err = ChessError::illegal_move("e2e5", "destination not reachable");
        assert_eq!(err.to_string(), "Illegal move e2e5: destination not reachable");
    }
}
