use std::collections::BTreeMap;
use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::coord::{Coord, BOARD_SIZE};
use crate::core::piece::{Piece, Side};
use crate::error::BoardError;

const N: usize = BOARD_SIZE as usize;

/// One write of a change set: put `cell` at `at` (`None` clears it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    pub at: Coord,
    pub cell: Option<Piece>,
}

/// An ordered overlay of cell writes. Later writes to the same square win.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeSet(Vec<Change>);

impl ChangeSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn set(mut self, at: Coord, cell: Option<Piece>) -> Self {
        self.0.push(Change { at, cell });
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Change> + '_ {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// What move generation finds when it looks at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// Off the board, or a light square.
    Absent,
    Empty,
    Occupied(Piece),
}

/// The 8x8 grid. Light squares are masked out and always hold `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; N]; N],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[None; N]; N],
        }
    }

    /// Black men on rows 1-3, white men on rows 6-8.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for c in Coord::dark_squares() {
            let piece = match c.y {
                1..=3 => Some(Piece::BLACK_MAN),
                6..=8 => Some(Piece::WHITE_MAN),
                _ => None,
            };
            board.write(c, piece);
        }
        board
    }

    /// An otherwise empty board holding `pieces`.
    pub fn with_pieces(pieces: &[(Coord, Piece)]) -> Result<Self, BoardError> {
        let changes = pieces
            .iter()
            .fold(ChangeSet::new(), |cs, &(at, p)| cs.set(at, Some(p)));
        Self::empty().apply_changes(&changes)
    }

    /// Cell at `(row, col)`.
    ///
    /// Fails only when a coordinate is outside `1..=8`; light squares read as empty.
    pub fn get(&self, row: i8, col: i8) -> Result<Option<Piece>, BoardError> {
        self.at(Coord::new(col, row))
    }

    pub fn at(&self, c: Coord) -> Result<Option<Piece>, BoardError> {
        check_range(c)?;
        let (r, k) = c.index();
        Ok(self.cells[r][k])
    }

    #[inline]
    pub fn probe(&self, c: Coord) -> Probe {
        if !c.is_dark() {
            return Probe::Absent;
        }
        let (r, k) = c.index();
        match self.cells[r][k] {
            Some(p) => Probe::Occupied(p),
            None => Probe::Empty,
        }
    }

    /// A new board with `changes` overlaid; `self` is left untouched.
    ///
    /// Only the addressing is checked. Whether the writes make a legal move is the
    /// move generator's business.
    pub fn apply_changes(&self, changes: &ChangeSet) -> Result<Board, BoardError> {
        let mut next = self.clone();
        for ch in changes.iter() {
            check_range(ch.at)?;
            if !ch.at.is_dark() {
                return Err(BoardError::LightSquare {
                    x: ch.at.x,
                    y: ch.at.y,
                });
            }
            next.write(ch.at, ch.cell);
        }
        Ok(next)
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::dark_squares().filter_map(move |c| match self.probe(c) {
            Probe::Occupied(p) => Some((c, p)),
            _ => None,
        })
    }

    pub fn count(&self, side: Side) -> usize {
        self.pieces().filter(|(_, p)| p.is_owned_by(side)).count()
    }

    #[inline]
    fn write(&mut self, c: Coord, cell: Option<Piece>) {
        let (r, k) = c.index();
        self.cells[r][k] = cell;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

#[inline]
fn check_range(c: Coord) -> Result<(), BoardError> {
    if c.in_range() {
        Ok(())
    } else {
        Err(BoardError::OutOfRange { x: c.x, y: c.y })
    }
}

type RowMap = BTreeMap<i8, BTreeMap<i8, Option<Piece>>>;

// Persisted as `{row: {col: cell}}` over exactly the dark squares. Empty dark squares
// are `null`; light squares are absent.
impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut rows: RowMap = BTreeMap::new();
        for c in Coord::dark_squares() {
            let (r, k) = c.index();
            rows.entry(c.y).or_default().insert(c.x, self.cells[r][k]);
        }
        rows.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = RowMap::deserialize(deserializer)?;
        let mut board = Board::empty();
        let mut seen = 0usize;
        for (&y, cols) in &rows {
            for (&x, &cell) in cols {
                let c = Coord::new(x, y);
                if !c.is_dark() {
                    return Err(D::Error::custom(format!(
                        "row {y} column {x} is not a dark square"
                    )));
                }
                board.write(c, cell);
                seen += 1;
            }
        }
        let expected = Coord::dark_squares().count();
        if seen != expected {
            return Err(D::Error::custom(format!(
                "board lists {seen} dark squares, expected {expected}"
            )));
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for x in 1..=BOARD_SIZE {
            write!(f, " {x}")?;
        }
        writeln!(f)?;
        for y in 1..=BOARD_SIZE {
            write!(f, "{y:>2} ")?;
            for x in 1..=BOARD_SIZE {
                let ch = match self.probe(Coord::new(x, y)) {
                    Probe::Absent => ' ',
                    Probe::Empty => '.',
                    Probe::Occupied(p) => piece_char(p),
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub fn piece_char(p: Piece) -> char {
    match (p.owner, p.is_king()) {
        (Side::White, false) => 'w',
        (Side::White, true) => 'W',
        (Side::Black, false) => 'b',
        (Side::Black, true) => 'B',
    }
}
