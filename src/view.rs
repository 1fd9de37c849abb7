use serde::{Deserialize, Serialize};

use crate::core::board::Board;
use crate::core::coord::Coord;
use crate::core::piece::Side;
use crate::game::{Match, Phase};

/// The part of a match that is safe to send to either player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicView {
    pub board: Board,
    pub turn_owner: Side,
    pub phase: Phase,
    pub selected_piece: Option<Coord>,
    /// Landing squares of the selected piece, in generation order.
    pub destinations: Vec<Coord>,
    pub mandatory_capture_pieces: Vec<Coord>,
    pub winner: Option<Side>,
    pub version: u64,
}

impl PublicView {
    pub fn of(m: &Match) -> Self {
        Self {
            board: m.board().clone(),
            turn_owner: m.turn_owner(),
            phase: m.phase(),
            selected_piece: m.selected_piece(),
            destinations: m.destinations(),
            mandatory_capture_pieces: m.mandatory_capture_pieces().to_vec(),
            winner: m.winner(),
            version: m.version(),
        }
    }
}
