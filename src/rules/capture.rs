use crate::core::board::Board;
use crate::core::coord::Coord;
use crate::core::piece::Side;

use super::movegen::moves_for;

/// Squares of `side`'s pieces that have at least one capture, in row-major order.
///
/// When this is non-empty, `side` may only select one of these pieces.
pub fn mandatory_capture_pieces(board: &Board, side: Side) -> Vec<Coord> {
    board
        .pieces()
        .filter(|(_, p)| p.is_owned_by(side))
        .filter(|&(c, p)| !moves_for(board, c, p, true).is_empty())
        .map(|(c, _)| c)
        .collect()
}

#[inline]
pub fn is_among_mandatory(point: Coord, mandatory: &[Coord]) -> bool {
    mandatory.contains(&point)
}
