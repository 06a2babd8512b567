use blockfall::core::{collides, Board, ShapeMatrix};
use blockfall::types::{Color, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.occupied_count(), 0);
    assert_eq!(board.rows().count(), 20);
}

#[test]
fn test_get_and_set_respect_bounds() {
    let mut board = Board::new();
    assert!(board.set(9, 19, Some(Color::Green)));
    assert!(!board.set(10, 0, Some(Color::Green)));
    assert!(!board.set(0, -1, Some(Color::Green)));
    assert_eq!(board.get(9, 19), Some(Some(Color::Green)));
    assert_eq!(board.get(-1, 0), None);
    assert!(board.is_occupied(9, 19));
    assert!(!board.is_occupied(9, 20));
}

#[test]
fn test_horizontal_i_fits_exactly_against_right_wall() {
    let board = Board::new();
    let i = ShapeMatrix::template(PieceKind::I);
    assert!(!collides(&i, 6, 0, &board));
    assert!(collides(&i, 7, 0, &board));
    assert!(!collides(&i, 0, 0, &board));
    assert!(collides(&i, -1, 0, &board));
}

#[test]
fn test_floor_and_occupied_cells_block() {
    let mut board = Board::new();
    let o = ShapeMatrix::template(PieceKind::O);
    assert!(!collides(&o, 4, 18, &board));
    assert!(collides(&o, 4, 19, &board));

    board.set(5, 10, Some(Color::Red));
    assert!(collides(&o, 4, 9, &board));
    assert!(collides(&o, 5, 10, &board));
    assert!(!collides(&o, 6, 9, &board));
    assert_eq!(board.is_blocked(&o, 4, 9), collides(&o, 4, 9, &board));
}

#[test]
fn test_rows_above_the_top_are_not_rejected() {
    let board = Board::new();
    let o = ShapeMatrix::template(PieceKind::O);
    assert!(!collides(&o, 4, -1, &board));
    assert!(!collides(&o, 4, -5, &board));
}

#[test]
fn test_lock_writes_only_the_shape_cells() {
    let mut board = Board::new();
    board.set(0, 19, Some(Color::Red));
    let t = ShapeMatrix::template(PieceKind::T);

    board.lock(&t, 3, 18, Color::Magenta);

    assert_eq!(board.occupied_count(), 5);
    for (x, y) in [(3, 18), (4, 18), (5, 18), (4, 19)] {
        assert_eq!(board.get(x, y), Some(Some(Color::Magenta)));
    }
    assert_eq!(board.get(3, 19), Some(None));
    assert_eq!(board.get(5, 19), Some(None));
    assert_eq!(board.get(0, 19), Some(Some(Color::Red)));
}

#[test]
fn test_clear_rows_two_and_five() {
    let mut board = Board::new();
    board.fill_row(2, Color::Red);
    board.fill_row(5, Color::Blue);
    board.set(0, 0, Some(Color::Green));
    board.set(1, 3, Some(Color::Cyan));
    board.set(2, 4, Some(Color::Magenta));
    board.set(3, 6, Some(Color::Yellow));
    board.set(9, 19, Some(Color::Orange));

    assert_eq!(board.clear_full_lines(), 2);
    assert_eq!(board.rows().count(), 20);

    // Top two rows enter empty.
    assert!(board.rows().take(2).all(|row| row.iter().all(|c| c.is_none())));
    // Rows above the cleared ones sink, keeping their order.
    assert_eq!(board.get(0, 2), Some(Some(Color::Green)));
    assert_eq!(board.get(1, 4), Some(Some(Color::Cyan)));
    assert_eq!(board.get(2, 5), Some(Some(Color::Magenta)));
    // Rows below the lowest cleared row stay put.
    assert_eq!(board.get(3, 6), Some(Some(Color::Yellow)));
    assert_eq!(board.get(9, 19), Some(Some(Color::Orange)));
    assert_eq!(board.occupied_count(), 5);
    assert!(!(0..20).any(|y| board.is_row_full(y)));
}

#[test]
fn test_clear_reports_rows_bottom_to_top() {
    let mut board = Board::new();
    for y in [10, 17, 18, 19] {
        board.fill_row(y, Color::Cyan);
    }

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[19, 18, 17, 10]);
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_partial_rows_are_not_cleared() {
    let mut board = Board::new();
    for x in 0..9 {
        board.set(x, 19, Some(Color::Red));
    }
    assert_eq!(board.clear_full_lines(), 0);
    assert_eq!(board.occupied_count(), 9);
}
