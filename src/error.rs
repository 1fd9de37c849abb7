//! Error types.
//!
//! Illegal clicks are not errors: the turn state machine reports them as activations
//! that changed nothing. What remains here are programmer errors (bad coordinates),
//! registry lookups and record decoding.

use thiserror::Error;

use crate::record::FORMAT_VERSION;
use crate::registry::MatchId;

/// Structural board errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A coordinate outside `1..=8`.
    #[error("coordinate ({x}, {y}) is outside the 8x8 board")]
    OutOfRange { x: i8, y: i8 },
    /// A write addressed to a light square.
    #[error("({x}, {y}) is a light square and cannot hold a piece")]
    LightSquare { x: i8, y: i8 },
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("no match with id {0}")]
    UnknownMatch(MatchId),
    #[error("registry is full ({limit} matches)")]
    RegistryFull { limit: usize },
    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },
    #[error("match record is not valid json: {0}")]
    Record(#[from] serde_json::Error),
    #[error("unsupported record format version {found} (expected {})", FORMAT_VERSION)]
    UnsupportedFormat { found: u32 },
}
