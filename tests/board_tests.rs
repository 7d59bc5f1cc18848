use noughts::{apply_move, make_move, whose_turn, Board, Cell, Error, Player, Position};

fn pos(column: u8, row: u8) -> Position {
    Position::new(column, row).expect("in range")
}

#[test]
fn new_board_is_empty_and_records_first_mover() {
    let board = Board::new(Player::O);
    assert_eq!(board.first_player(), Player::O);
    assert_eq!(board.cells().len(), 9);
    assert!(board.cells().iter().all(|c| *c == Cell::Empty));
    assert_eq!(board.filled_count(), 0);
    assert!(!board.is_full());
}

#[test]
fn position_index_is_row_major() {
    assert_eq!(pos(0, 0).index(), 0);
    assert_eq!(pos(2, 0).index(), 2);
    assert_eq!(pos(0, 1).index(), 3);
    assert_eq!(pos(1, 1).index(), 4);
    assert_eq!(pos(2, 2).index(), 8);

    for idx in 0u8..9 {
        let p = Position::from_index(idx).expect("index in range");
        assert_eq!(p.index(), idx as usize);
        assert_eq!(p.column(), idx % 3);
        assert_eq!(p.row(), idx / 3);
    }
}

#[test]
fn out_of_range_positions_are_rejected() {
    assert_eq!(Position::new(3, 0), Err(Error::OutOfRange { column: 3, row: 0 }));
    assert_eq!(Position::new(0, 3), Err(Error::OutOfRange { column: 0, row: 3 }));
    assert!(matches!(Position::from_index(9), Err(Error::OutOfRange { .. })));

    let board = Board::new(Player::X);
    assert_eq!(board.at(1, 1), Ok(Cell::Empty));
    assert!(matches!(board.at(5, 1), Err(Error::OutOfRange { column: 5, row: 1 })));
}

#[test]
fn placing_on_an_occupied_cell_fails_and_leaves_board_alone() {
    let mut board = Board::new(Player::X);
    make_move(&mut board, pos(1, 1)).expect("empty cell");
    let before = board;

    let err = make_move(&mut board, pos(1, 1)).unwrap_err();
    assert_eq!(err, Error::OccupiedCell(pos(1, 1)));
    assert_eq!(board, before);
    assert_eq!(board.get(pos(1, 1)), Cell::X);
}

#[test]
fn copies_do_not_share_cells() {
    let mut original = Board::new(Player::X);
    make_move(&mut original, pos(0, 0)).unwrap();

    let mut copy = original;
    make_move(&mut copy, pos(2, 2)).unwrap();

    assert_eq!(original.get(pos(2, 2)), Cell::Empty);
    assert_eq!(copy.get(pos(2, 2)), Cell::O);
    assert_eq!(copy.get(pos(0, 0)), Cell::X);
    assert_eq!(copy.first_player(), original.first_player());
}

#[test]
fn iter_walks_cells_row_major() {
    let board = Board::from_layout(Player::X, "X.O/.X./..O").expect("layout");
    let seen: Vec<(Position, Cell)> = board.iter().collect();
    assert_eq!(seen.len(), 9);
    assert_eq!(seen[0], (pos(0, 0), Cell::X));
    assert_eq!(seen[2], (pos(2, 0), Cell::O));
    assert_eq!(seen[4], (pos(1, 1), Cell::X));
    assert_eq!(seen[8], (pos(2, 2), Cell::O));
    assert_eq!(board.count(Player::X), 2);
    assert_eq!(board.count(Player::O), 2);
}

#[test]
fn layout_parsing_checks_length_symbols_and_counts() {
    assert!(Board::from_layout(Player::X, ".........").is_ok());
    assert!(Board::from_layout(Player::X, "x........").is_ok());

    assert!(matches!(
        Board::from_layout(Player::X, "........"),
        Err(Error::MalformedBoard(_))
    ));
    assert!(matches!(
        Board::from_layout(Player::X, ".........."),
        Err(Error::MalformedBoard(_))
    ));
    assert!(matches!(
        Board::from_layout(Player::X, "....Z...."),
        Err(Error::MalformedBoard(_))
    ));
    // O cannot lead when X moved first
    assert!(matches!(
        Board::from_layout(Player::X, "O........"),
        Err(Error::MalformedBoard(_))
    ));
    // first mover cannot be two marks ahead
    assert!(matches!(
        Board::from_layout(Player::O, "OO......."),
        Err(Error::MalformedBoard(_))
    ));
    assert!(Board::from_layout(Player::O, "O........").is_ok());
}

#[test]
fn marks_always_follow_turn_order() {
    // every placement goes through the mover's mark, so the first mover
    // can never fall behind or get two marks ahead
    for first in Player::both() {
        let mut board = Board::new(first);
        for (ply, p) in [pos(0, 0), pos(1, 0), pos(2, 0), pos(0, 1)].into_iter().enumerate() {
            let mover = whose_turn(&board);
            let undo = make_move(&mut board, p).expect("empty cell");
            assert_eq!(undo.player, mover);
            assert_eq!(board.get(p), mover.mark());
            let lead = i32::from(board.count(first)) - i32::from(board.count(first.opponent()));
            assert_eq!(lead, i32::from(ply % 2 == 0));
        }
        assert_eq!(board.count(first), 2);
        assert_eq!(board.count(first.opponent()), 2);
    }

    let after = apply_move(&Board::new(Player::X), pos(1, 1)).expect("empty cell");
    assert_eq!(after.get(pos(1, 1)), Cell::X);
    assert_eq!(whose_turn(&after), Player::O);
}

#[test]
fn layouts_with_two_winners_are_rejected() {
    assert!(matches!(
        Board::from_layout(Player::X, "XXXOOO..."),
        Err(Error::MalformedBoard(_))
    ));
    assert!(matches!(
        Board::from_layout(Player::O, "XO.XO.XO."),
        Err(Error::MalformedBoard(_))
    ));
    // one line is fine
    assert!(Board::from_layout(Player::X, "XXXOO....").is_ok());
}
