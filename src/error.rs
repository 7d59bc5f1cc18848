use thiserror::Error;

use crate::types::Position;

/// Errors raised by the board, rules and search layers.
///
/// Every variant is a precondition failure on the caller's side; nothing in
/// the crate recovers from them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("position ({column}, {row}) is out of range [0, 2]")]
    OutOfRange { column: u8, row: u8 },

    #[error("cell {0} is already occupied")]
    OccupiedCell(Position),

    #[error("invalid board state: {0}")]
    InvalidState(&'static str),

    #[error("unsupported difficulty '{0}'")]
    UnsupportedDifficulty(String),

    #[error("'{0}' is not a valid position")]
    InvalidCoordinate(String),

    #[error("malformed board layout: {0}")]
    MalformedBoard(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
