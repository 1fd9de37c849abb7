use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row delta of a forward step: white heads for row 1, black for row 8.
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// The row on which this side's men are crowned.
    #[inline]
    pub fn promotion_row(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => 8,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => f.write_str("white"),
            Side::Black => f.write_str("black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Man,
    King,
}

/// A piece on the board.
///
/// Serialized as a single tag (`"white_man"`, `"black_king"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "PieceTag", into = "PieceTag")]
pub struct Piece {
    pub owner: Side,
    pub rank: Rank,
}

impl Piece {
    pub const WHITE_MAN: Piece = Piece::new(Side::White, Rank::Man);
    pub const WHITE_KING: Piece = Piece::new(Side::White, Rank::King);
    pub const BLACK_MAN: Piece = Piece::new(Side::Black, Rank::Man);
    pub const BLACK_KING: Piece = Piece::new(Side::Black, Rank::King);

    #[inline]
    pub const fn new(owner: Side, rank: Rank) -> Self {
        Self { owner, rank }
    }

    #[inline]
    pub fn is_owned_by(self, side: Side) -> bool {
        self.owner == side
    }

    #[inline]
    pub fn is_king(self) -> bool {
        self.rank == Rank::King
    }

    /// Men only step toward the opponent's back rank; kings go both ways.
    #[inline]
    pub fn can_move_direction(self, dy: i8) -> bool {
        self.is_king() || dy == self.owner.forward()
    }

    /// The piece as it stands after landing on `row`.
    #[inline]
    pub fn landed_on(self, row: i8) -> Piece {
        if row == self.owner.promotion_row() {
            Piece::new(self.owner, Rank::King)
        } else {
            self
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum PieceTag {
    WhiteMan,
    WhiteKing,
    BlackMan,
    BlackKing,
}

impl From<PieceTag> for Piece {
    fn from(tag: PieceTag) -> Self {
        match tag {
            PieceTag::WhiteMan => Piece::WHITE_MAN,
            PieceTag::WhiteKing => Piece::WHITE_KING,
            PieceTag::BlackMan => Piece::BLACK_MAN,
            PieceTag::BlackKing => Piece::BLACK_KING,
        }
    }
}

impl From<Piece> for PieceTag {
    fn from(p: Piece) -> Self {
        match (p.owner, p.rank) {
            (Side::White, Rank::Man) => PieceTag::WhiteMan,
            (Side::White, Rank::King) => PieceTag::WhiteKing,
            (Side::Black, Rank::Man) => PieceTag::BlackMan,
            (Side::Black, Rank::King) => PieceTag::BlackKing,
        }
    }
}
