//! Collision rule shared by gravity, horizontal moves, soft drop and rotation.

use crate::board::Board;
use crate::shapes::ShapeMatrix;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Whether `shape` anchored at (x, y) overlaps the board or leaves its bounds.
///
/// A filled cell is rejected when its column is outside `[0, W)`, its row is
/// at or below `H`, or it lands on an occupied cell. Rows above the top
/// (`row < 0`) are not rejected and count as empty: pieces spawn at row 0 and
/// only move down or sideways, so nothing reaches them in normal play.
pub fn collides(shape: &ShapeMatrix, x: i8, y: i8, board: &Board) -> bool {
    shape.filled_cells().any(|(dx, dy)| {
        let col = x as i16 + dx as i16;
        let row = y as i16 + dy as i16;
        col < 0
            || col >= BOARD_WIDTH as i16
            || row >= BOARD_HEIGHT as i16
            || (row >= 0 && board.is_occupied(col as i8, row as i8))
    })
}
