use serde::{Deserialize, Serialize};

use crate::core::board::{Board, ChangeSet, Probe};
use crate::core::coord::{Coord, BOARD_SIZE};
use crate::core::piece::Piece;
use crate::error::BoardError;

/// A candidate move together with the exact cell writes it implies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
    /// The jumped square, for captures.
    pub captured: Option<Coord>,
    pub changes: ChangeSet,
}

impl Move {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    fn step(from: Coord, to: Coord, piece: Piece) -> Self {
        let changes = ChangeSet::new()
            .set(from, None)
            .set(to, Some(piece.landed_on(to.y)));
        Self {
            from,
            to,
            captured: None,
            changes,
        }
    }

    fn jump(from: Coord, over: Coord, to: Coord, piece: Piece) -> Self {
        let changes = ChangeSet::new()
            .set(from, None)
            .set(to, Some(piece.landed_on(to.y)))
            .set(over, None);
        Self {
            from,
            to,
            captured: Some(over),
            changes,
        }
    }
}

/// Legal moves for the piece at `at` (at most four).
///
/// Empty squares yield nothing. If any capture exists, only captures are returned.
/// With `jumps_only`, simple steps are never produced.
pub fn possible_moves(
    board: &Board,
    at: Coord,
    jumps_only: bool,
) -> Result<Vec<Move>, BoardError> {
    match board.at(at)? {
        Some(piece) => Ok(moves_for(board, at, piece, jumps_only)),
        None => Ok(Vec::new()),
    }
}

/// Same as [`possible_moves`] for a coordinate already known to hold `piece`.
pub(crate) fn moves_for(board: &Board, at: Coord, piece: Piece, jumps_only: bool) -> Vec<Move> {
    let mut steps: Vec<Move> = Vec::new();
    let mut captures: Vec<Move> = Vec::new();

    for dy in [-1i8, 1] {
        if !piece.can_move_direction(dy) {
            continue;
        }
        let row = at.y + dy;
        let landing_row = at.y + 2 * dy;

        for nx in step_columns(at.x) {
            let neighbor = Coord::new(nx, row);
            match board.probe(neighbor) {
                Probe::Empty if !jumps_only => steps.push(Move::step(at, neighbor, piece)),
                // An enemy on the edge column cannot be jumped: there is no square behind it.
                Probe::Occupied(other)
                    if other.owner != piece.owner && nx > 1 && nx < BOARD_SIZE =>
                {
                    let Some(lx) = closest_candidate(nx, jump_columns(at.x)) else {
                        continue;
                    };
                    let landing = Coord::new(lx, landing_row);
                    if board.probe(landing) == Probe::Empty {
                        captures.push(Move::jump(at, neighbor, landing, piece));
                    }
                }
                _ => {}
            }
        }
    }

    if captures.is_empty() {
        steps
    } else {
        captures
    }
}

/// Columns one diagonal step away.
fn step_columns(x: i8) -> impl Iterator<Item = i8> {
    let cols = match x {
        1 => [Some(2), None],
        BOARD_SIZE => [Some(BOARD_SIZE - 1), None],
        _ => [Some(x - 1), Some(x + 1)],
    };
    cols.into_iter().flatten()
}

/// Columns two diagonal steps away.
fn jump_columns(x: i8) -> impl Iterator<Item = i8> {
    let cols = if x < 3 {
        [Some(x + 2), None]
    } else if x > BOARD_SIZE - 2 {
        [Some(x - 2), None]
    } else {
        [Some(x - 2), Some(x + 2)]
    };
    cols.into_iter().flatten()
}

/// The candidate nearest to `target`; the first one wins ties.
fn closest_candidate(target: i8, candidates: impl IntoIterator<Item = i8>) -> Option<i8> {
    let mut best: Option<(i8, i8)> = None;
    for c in candidates {
        let diff = (target - c).abs();
        if best.map_or(true, |(_, d)| diff < d) {
            best = Some((c, diff));
        }
    }
    best.map(|(c, _)| c)
}
