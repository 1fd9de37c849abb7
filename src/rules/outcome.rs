use crate::core::board::Board;
use crate::core::piece::Side;

/// The winner by material: a side with no pieces left has lost.
///
/// A side that still has pieces but no legal move is not a loser here.
pub fn determine_winner(board: &Board) -> Option<Side> {
    if board.count(Side::White) == 0 {
        Some(Side::Black)
    } else if board.count(Side::Black) == 0 {
        Some(Side::White)
    } else {
        None
    }
}
