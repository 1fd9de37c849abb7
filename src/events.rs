//! What a transition reports back to its caller.
//!
//! The engine never broadcasts. Each call to
//! [`Match::handle_cell_activation`](crate::game::Match::handle_cell_activation) returns an
//! [`Activation`] listing the events it produced, in order, and the transport layer decides
//! what to push to clients or persist.

use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;
use crate::core::piece::Side;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchEvent {
    /// A piece was picked up; `destinations` are its legal landing squares.
    PieceSelected { at: Coord, destinations: Vec<Coord> },
    PieceMoved {
        from: Coord,
        to: Coord,
        captured: Option<Coord>,
        promoted: bool,
    },
    /// The capturing piece must keep jumping; the turn stays put.
    ChainContinues { at: Coord, destinations: Vec<Coord> },
    /// `mandatory` is the new turn owner's forced-capture set.
    TurnPassed { to: Side, mandatory: Vec<Coord> },
    MatchFinished { winner: Side },
}

/// Outcome of one cell activation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Activation {
    events: Vec<MatchEvent>,
}

impl Activation {
    pub(crate) fn ignored() -> Self {
        Self::default()
    }

    pub(crate) fn from_events(events: Vec<MatchEvent>) -> Self {
        Self { events }
    }

    /// True when the match state changed and should be broadcast / persisted.
    #[inline]
    pub fn changed(&self) -> bool {
        !self.events.is_empty()
    }

    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<MatchEvent> {
        self.events
    }
}
