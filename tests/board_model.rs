use checkers_core::core::board::Probe;
use checkers_core::{Board, BoardError, ChangeSet, Coord, Piece, Side};

#[test]
fn initial_layout_fills_dark_squares_of_outer_rows() {
    let board = Board::initial();
    assert_eq!(board.count(Side::White), 12);
    assert_eq!(board.count(Side::Black), 12);

    // get takes (row, col)
    assert_eq!(board.get(1, 1).unwrap(), Some(Piece::BLACK_MAN));
    assert_eq!(board.get(3, 7).unwrap(), Some(Piece::BLACK_MAN));
    assert_eq!(board.get(6, 2).unwrap(), Some(Piece::WHITE_MAN));
    assert_eq!(board.get(8, 8).unwrap(), Some(Piece::WHITE_MAN));
    assert_eq!(board.get(4, 2).unwrap(), None);
    assert_eq!(board.get(5, 5).unwrap(), None);
}

#[test]
fn reads_outside_the_board_fail() {
    let board = Board::initial();
    assert_eq!(board.get(0, 1), Err(BoardError::OutOfRange { x: 1, y: 0 }));
    assert_eq!(board.get(3, 9), Err(BoardError::OutOfRange { x: 9, y: 3 }));
    assert!(board.at(Coord::new(-1, 4)).is_err());
}

#[test]
fn light_squares_read_empty_but_probe_absent() {
    let board = Board::initial();
    assert_eq!(board.get(1, 2).unwrap(), None);
    assert_eq!(board.probe(Coord::new(2, 1)), Probe::Absent);
    assert_eq!(board.probe(Coord::new(1, 0)), Probe::Absent);
    assert_eq!(board.probe(Coord::new(1, 5)), Probe::Empty);
    assert_eq!(
        board.probe(Coord::new(2, 6)),
        Probe::Occupied(Piece::WHITE_MAN)
    );
}

#[test]
fn apply_changes_returns_a_new_board() {
    let board = Board::initial();
    let changes = ChangeSet::new()
        .set(Coord::new(2, 6), None)
        .set(Coord::new(3, 5), Some(Piece::WHITE_MAN));

    let next = board.apply_changes(&changes).unwrap();

    assert_eq!(next.at(Coord::new(2, 6)).unwrap(), None);
    assert_eq!(next.at(Coord::new(3, 5)).unwrap(), Some(Piece::WHITE_MAN));
    // input untouched
    assert_eq!(board, Board::initial());
}

#[test]
fn apply_changes_does_not_judge_legality() {
    // Teleporting a black king onto the white back rank is fine for the overlay.
    let changes = ChangeSet::new().set(Coord::new(2, 8), Some(Piece::BLACK_KING));
    let next = Board::initial().apply_changes(&changes).unwrap();
    assert_eq!(next.get(8, 2).unwrap(), Some(Piece::BLACK_KING));
    assert_eq!(next.count(Side::Black), 13);
}

#[test]
fn apply_changes_rejects_bad_addresses() {
    let board = Board::empty();

    let off = ChangeSet::new().set(Coord::new(9, 1), Some(Piece::WHITE_MAN));
    assert_eq!(
        board.apply_changes(&off),
        Err(BoardError::OutOfRange { x: 9, y: 1 })
    );

    let light = ChangeSet::new().set(Coord::new(2, 1), Some(Piece::WHITE_MAN));
    assert_eq!(
        board.apply_changes(&light),
        Err(BoardError::LightSquare { x: 2, y: 1 })
    );
}

#[test]
fn later_writes_win() {
    let changes = ChangeSet::new()
        .set(Coord::new(3, 3), Some(Piece::WHITE_MAN))
        .set(Coord::new(3, 3), None);
    assert_eq!(changes.len(), 2);
    let next = Board::empty().apply_changes(&changes).unwrap();
    assert_eq!(next, Board::empty());
}

#[test]
fn pieces_iterate_row_major() {
    let board = Board::with_pieces(&[
        (Coord::new(6, 6), Piece::WHITE_KING),
        (Coord::new(1, 1), Piece::BLACK_MAN),
        (Coord::new(4, 2), Piece::WHITE_MAN),
    ])
    .unwrap();
    let squares: Vec<Coord> = board.pieces().map(|(c, _)| c).collect();
    assert_eq!(
        squares,
        vec![Coord::new(1, 1), Coord::new(4, 2), Coord::new(6, 6)]
    );
}

#[test]
fn display_marks_pieces_and_empty_dark_squares() {
    let board = Board::with_pieces(&[(Coord::new(1, 1), Piece::BLACK_KING)]).unwrap();
    let text = board.to_string();
    let row1 = text.lines().nth(1).unwrap();
    assert!(row1.starts_with(" 1  B"));
    assert_eq!(text.matches('.').count(), 31);
}
