use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::board::Board;
use crate::core::coord::Coord;
use crate::core::piece::{Piece, Side};
use crate::error::BoardError;
use crate::events::{Activation, MatchEvent};
use crate::rules::capture::{is_among_mandatory, mandatory_capture_pieces};
use crate::rules::movegen::{moves_for, Move};
use crate::rules::outcome::determine_winner;
use crate::view::PublicView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Waiting for the turn owner to pick a piece.
    Idle,
    /// A piece is held together with its legal destinations.
    Selected,
    /// A winner is set; nothing changes any more.
    Finished,
}

/// One checkers match.
///
/// The only way to change a match is [`Match::handle_cell_activation`]. Callers that share
/// a match between threads must serialize those calls (see
/// [`MatchRegistry`](crate::registry::MatchRegistry)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    board: Board,
    turn_owner: Side,
    selected_piece: Option<Coord>,
    selected_piece_moves: Vec<Move>,
    mandatory_capture_pieces: Vec<Coord>,
    winner: Option<Side>,
    /// Bumped on every transition that changes something.
    version: u64,
}

impl Match {
    /// Standard layout, white to move.
    pub fn new() -> Self {
        Self::from_board(Board::initial(), Side::White)
    }

    /// A match starting from an arbitrary position.
    ///
    /// The forced-capture set and the winner are derived from the board.
    pub fn from_board(board: Board, turn_owner: Side) -> Self {
        let mandatory_capture_pieces = mandatory_capture_pieces(&board, turn_owner);
        let winner = determine_winner(&board);
        Self {
            board,
            turn_owner,
            selected_piece: None,
            selected_piece_moves: Vec::new(),
            mandatory_capture_pieces,
            winner,
            version: 0,
        }
    }

    /// Replace this match with a fresh one. The version keeps counting up.
    pub fn reset(&mut self) {
        let version = self.version + 1;
        *self = Self::new();
        self.version = version;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn_owner(&self) -> Side {
        self.turn_owner
    }

    pub fn selected_piece(&self) -> Option<Coord> {
        self.selected_piece
    }

    pub fn selected_piece_moves(&self) -> &[Move] {
        &self.selected_piece_moves
    }

    pub fn destinations(&self) -> Vec<Coord> {
        self.selected_piece_moves.iter().map(|m| m.to).collect()
    }

    pub fn mandatory_capture_pieces(&self) -> &[Coord] {
        &self.mandatory_capture_pieces
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn phase(&self) -> Phase {
        if self.winner.is_some() {
            Phase::Finished
        } else if self.selected_piece.is_some() {
            Phase::Selected
        } else {
            Phase::Idle
        }
    }

    pub fn public_view(&self) -> PublicView {
        PublicView::of(self)
    }

    /// `actor` clicked the square `at`.
    ///
    /// Out-of-range coordinates are an error. Every other rejected click (wrong player,
    /// finished match, forbidden piece, not a legal destination) is ignored and reported
    /// as an activation that changed nothing.
    pub fn handle_cell_activation(
        &mut self,
        at: Coord,
        actor: Side,
    ) -> Result<Activation, BoardError> {
        let cell = self.board.at(at)?;

        if self.winner.is_some() {
            debug!("ignoring {actor} click at {at}: match is finished");
            return Ok(Activation::ignored());
        }
        if actor != self.turn_owner {
            debug!("ignoring {actor} click at {at}: it is {}'s turn", self.turn_owner);
            return Ok(Activation::ignored());
        }

        let events = if self.selected_piece.is_some() {
            self.play_selected(at)?
        } else {
            self.select(at, cell)
        };

        if events.is_empty() {
            return Ok(Activation::ignored());
        }
        self.version += 1;
        Ok(Activation::from_events(events))
    }

    fn select(&mut self, at: Coord, cell: Option<Piece>) -> Vec<MatchEvent> {
        if !self.mandatory_capture_pieces.is_empty()
            && !is_among_mandatory(at, &self.mandatory_capture_pieces)
        {
            debug!("ignoring selection at {at}: another piece has a forced capture");
            return Vec::new();
        }
        let Some(piece) = cell.filter(|p| p.is_owned_by(self.turn_owner)) else {
            return Vec::new();
        };
        let moves = moves_for(&self.board, at, piece, false);
        if moves.is_empty() {
            debug!("ignoring selection at {at}: piece has no legal move");
            return Vec::new();
        }

        let destinations = moves.iter().map(|m| m.to).collect();
        self.selected_piece = Some(at);
        self.selected_piece_moves = moves;
        vec![MatchEvent::PieceSelected { at, destinations }]
    }

    /// Play the offered move landing on `at`, if there is one.
    ///
    /// The next state is built in locals and committed at the end, so an error leaves
    /// the match untouched.
    fn play_selected(&mut self, at: Coord) -> Result<Vec<MatchEvent>, BoardError> {
        let Some(mv) = self.selected_piece_moves.iter().find(|m| m.to == at).cloned() else {
            return Ok(Vec::new());
        };

        let board = self.board.apply_changes(&mv.changes)?;
        let before = self.board.at(mv.from)?;
        let Some(after) = board.at(mv.to)? else {
            return Ok(Vec::new());
        };
        let promoted = before.is_some_and(|p| !p.is_king()) && after.is_king();

        info!(
            "{} moves {} -> {}{}",
            self.turn_owner,
            mv.from,
            mv.to,
            if mv.is_capture() { " (capture)" } else { "" }
        );
        let mut events = vec![MatchEvent::PieceMoved {
            from: mv.from,
            to: mv.to,
            captured: mv.captured,
            promoted,
        }];

        let continuation = if mv.is_capture() {
            moves_for(&board, mv.to, after, true)
        } else {
            Vec::new()
        };

        let mut turn_owner = self.turn_owner;
        let mut selected_piece = None;
        let mut selected_piece_moves = Vec::new();
        let mut mandatory = self.mandatory_capture_pieces.clone();

        if continuation.is_empty() {
            turn_owner = turn_owner.other();
            mandatory = mandatory_capture_pieces(&board, turn_owner);
            events.push(MatchEvent::TurnPassed {
                to: turn_owner,
                mandatory: mandatory.clone(),
            });
        } else {
            events.push(MatchEvent::ChainContinues {
                at: mv.to,
                destinations: continuation.iter().map(|m| m.to).collect(),
            });
            selected_piece = Some(mv.to);
            selected_piece_moves = continuation;
        }

        let winner = determine_winner(&board);
        if let Some(w) = winner {
            info!("{w} wins");
            selected_piece = None;
            selected_piece_moves.clear();
            events.push(MatchEvent::MatchFinished { winner: w });
        }

        self.board = board;
        self.turn_owner = turn_owner;
        self.selected_piece = selected_piece;
        self.selected_piece_moves = selected_piece_moves;
        self.mandatory_capture_pieces = mandatory;
        self.winner = winner;
        Ok(events)
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}
