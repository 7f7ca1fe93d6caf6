use super::*;

#[test]
fn test_color_opposite() {
    assert_eq!(Color::Black.opposite(), Color::White);
    assert_eq!(Color::White.opposite(), Color::Black);
    // Involution
    assert_eq!(Color::Black.opposite().opposite(), Color::Black);
    assert_eq!(Color::White.opposite().opposite(), Color::White);
}

#[test]
fn test_color_cell() {
    assert_eq!(Color::Black.cell(), Cell::Black);
    assert_eq!(Color::White.cell(), Cell::White);
}

#[test]
fn test_coord_conversion() {
    let at = Coord::new(3, 4);
    assert_eq!(at.to_index(), 3 + 4 * 8);
    assert_eq!(at.to_index(), 35);

    let back = Coord::from_index(35);
    assert_eq!(back.x, 3);
    assert_eq!(back.y, 4);
}

#[test]
fn test_coord_corner_indices() {
    assert_eq!(Coord::new(0, 0).to_index(), 0);
    assert_eq!(Coord::new(7, 0).to_index(), 7);
    assert_eq!(Coord::new(0, 7).to_index(), 56);
    assert_eq!(Coord::new(7, 7).to_index(), 63);
}

#[test]
fn test_coord_validity() {
    assert!(Coord::is_valid(0, 0));
    assert!(Coord::is_valid(7, 7));
    assert!(Coord::is_valid(3, 4));
    assert!(!Coord::is_valid(-1, 0));
    assert!(!Coord::is_valid(0, -1));
    assert!(!Coord::is_valid(8, 0));
    assert!(!Coord::is_valid(0, 8));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 8);
    assert_eq!(TOTAL_CELLS, 64);
}

#[test]
fn test_direction_order_and_deltas() {
    let deltas: Vec<(i32, i32)> = Direction::ALL.iter().map(|d| d.delta()).collect();
    assert_eq!(
        deltas,
        vec![
            (0, -1),
            (0, 1),
            (-1, 0),
            (1, 0),
            (-1, -1),
            (1, -1),
            (-1, 1),
            (1, 1),
        ]
    );
}

#[test]
fn test_try_get_out_of_range() {
    let board = Board::new();
    assert_eq!(board.try_get(-1, 0), None);
    assert_eq!(board.try_get(0, -1), None);
    assert_eq!(board.try_get(8, 0), None);
    assert_eq!(board.try_get(0, 8), None);
    // Every in-range probe succeeds
    for y in 0..8 {
        for x in 0..8 {
            assert!(board.try_get(x, y).is_some());
        }
    }
}

#[test]
fn test_get_set_round_trip() {
    let mut board = Board::empty();
    let at = Coord::new(5, 2);
    assert_eq!(board.get(at), Cell::Empty);

    board.set(at, Cell::Black);
    assert_eq!(board.get(at), Cell::Black);
    assert_eq!(board.try_get(5, 2), Some(Cell::Black));

    board.set(at, Cell::White);
    assert_eq!(board.get(at), Cell::White);
}

#[test]
fn test_standard_opening() {
    let board = Board::new();
    assert_eq!(board.get(Coord::new(3, 3)), Cell::White);
    assert_eq!(board.get(Coord::new(4, 3)), Cell::Black);
    assert_eq!(board.get(Coord::new(3, 4)), Cell::Black);
    assert_eq!(board.get(Coord::new(4, 4)), Cell::White);
    assert_eq!(board.count(), (2, 2));
}

#[test]
fn test_cells_of_scan_order() {
    let board = Board::new();
    // Scan order is by linear index: (4,3) at 28 before (3,4) at 35
    let black: Vec<Coord> = board.cells_of(Color::Black).collect();
    assert_eq!(black, vec![Coord::new(4, 3), Coord::new(3, 4)]);

    let white: Vec<Coord> = board.cells_of(Color::White).collect();
    assert_eq!(white, vec![Coord::new(3, 3), Coord::new(4, 4)]);
}

#[test]
fn test_count_empty_board() {
    assert_eq!(Board::empty().count(), (0, 0));
}

#[test]
fn test_diff_count() {
    let a = Board::new();
    let mut b = a;
    assert_eq!(a.diff_count(&b), 0);

    b.set(Coord::new(0, 0), Cell::Black);
    assert_eq!(a.diff_count(&b), 1);

    b.set(Coord::new(3, 3), Cell::Black); // recolor an occupied cell
    assert_eq!(a.diff_count(&b), 2);
}

#[test]
fn test_move_sentinel() {
    assert!(Move::NONE.is_none());
    assert_eq!(Move::NONE.coord(), None);
    assert!(!Move::new(0, 0).is_none());
    assert_eq!(Move::new(6, 2).coord(), Some(Coord::new(6, 2)));
    assert_eq!(Move::from_coord(Coord::new(6, 2)), Move::new(6, 2));
}

#[test]
fn test_move_display() {
    assert_eq!(Move::new(3, 2).to_string(), "3,2");
    assert_eq!(Move::NONE.to_string(), "-1,-1");
}
