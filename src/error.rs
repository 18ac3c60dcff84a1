//! Error types for wall construction and rule enforcement.

use crate::core::{Move, Side};

/// A wall could not be constructed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidWallError {
    #[error("wall anchor ({row}, {col}) is outside 1..=8")]
    OutOfBounds { row: u8, col: u8 },

    #[error("unknown wall orientation {0:?}, expected \"H\" or \"V\"")]
    UnknownOrientation(String),
}

/// Errors raised by the rules engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The move is not in `legal_moves` for the state it was applied to.
    #[error("illegal move {mv} for {side}")]
    IllegalMove { mv: Move, side: Side },

    /// Move generation came back empty in a non-terminal state.
    #[error("no legal moves for {0} in a non-terminal state")]
    NoLegalMoves(Side),

    #[error("game is already over")]
    GameOver,

    #[error(transparent)]
    InvalidWall(#[from] InvalidWallError),

    #[error("invalid setup: {0}")]
    InvalidSetup(&'static str),
}

pub type EngineResult<T> = Result<T, EngineError>;
