use std::fmt;

use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const BOARD_SIZE: i8 = 8;

/// A board coordinate: `x` is the column, `y` the row, both 1-based.
///
/// Construction is unchecked so callers can build off-board probes (row 0, row 9)
/// during move generation; [`Coord::in_range`] and [`Coord::is_dark`] tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i8,
    pub y: i8,
}

impl Coord {
    #[inline]
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Both components lie in `1..=8`.
    #[inline]
    pub fn in_range(self) -> bool {
        (1..=BOARD_SIZE).contains(&self.x) && (1..=BOARD_SIZE).contains(&self.y)
    }

    /// In range and on a dark square (odd rows hold odd columns, even rows even columns).
    #[inline]
    pub fn is_dark(self) -> bool {
        self.in_range() && (self.x + self.y) % 2 == 0
    }

    /// Zero-based `(row, column)` index into the board grid. Only valid when `in_range`.
    #[inline]
    pub(crate) fn index(self) -> (usize, usize) {
        debug_assert!(self.in_range());
        ((self.y - 1) as usize, (self.x - 1) as usize)
    }

    /// All 32 dark squares in row-major order.
    pub fn dark_squares() -> impl Iterator<Item = Coord> {
        (1..=BOARD_SIZE).flat_map(|y| {
            (1..=BOARD_SIZE)
                .map(move |x| Coord::new(x, y))
                .filter(|c| c.is_dark())
        })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
