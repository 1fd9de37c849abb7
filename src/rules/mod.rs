//! Move generation and game-ending rules.

pub mod capture;
pub mod movegen;
pub mod outcome;

pub use capture::{is_among_mandatory, mandatory_capture_pieces};
pub use movegen::{possible_moves, Move};
pub use outcome::determine_winner;
