//! Piece module - the actively falling shape
//!
//! A piece only proposes changes. Callers validate the proposal against the
//! board and restore the previous value when it is rejected.

use crate::shapes::ShapeMatrix;
use crate::types::{Color, PieceKind, BOARD_WIDTH};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: ShapeMatrix,
    pub color: Color,
    /// Column of the bounding box's top-left corner.
    pub x: i8,
    /// Row of the bounding box's top-left corner (0 is the top row).
    pub y: i8,
}

impl Piece {
    /// Create a piece at its spawn position: horizontally centered, top row.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = ShapeMatrix::template(kind);
        Self {
            kind,
            shape,
            color: kind.color(),
            x: (BOARD_WIDTH / 2) as i8 - (shape.cols() / 2) as i8,
            y: 0,
        }
    }

    /// Shape rotated 90° clockwise. The piece itself is left untouched.
    pub fn rotated_cw(&self) -> ShapeMatrix {
        self.shape.rotated_cw()
    }

    /// Shift the origin by (dx, dy).
    pub fn translate(&mut self, dx: i8, dy: i8) {
        self.x += dx;
        self.y += dy;
    }

    /// Board coordinates of every filled cell.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled_cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}
