//! Shapes module - shape templates and the rotatable shape matrix
//!
//! Every piece is a small boolean matrix inside its bounding box. The seven
//! templates below are stored in their spawn orientation; rotation produces a
//! new matrix with rows and columns swapped, so non-square boxes (I, T, L, J,
//! S, Z) change dimensions as they turn.

use crate::types::PieceKind;

/// Largest bounding box side of any template (the I piece is 1x4).
pub const MAX_SHAPE_DIM: usize = 4;

/// Spawn-orientation templates, indexed like [`PieceKind::ALL`].
const TEMPLATES: [&[&[u8]]; 7] = [
    // I
    &[&[1, 1, 1, 1]],
    // O
    &[&[1, 1], &[1, 1]],
    // T
    &[&[1, 1, 1], &[0, 1, 0]],
    // L
    &[&[1, 1, 1], &[1, 0, 0]],
    // J
    &[&[1, 1, 1], &[0, 0, 1]],
    // S
    &[&[1, 1, 0], &[0, 1, 1]],
    // Z
    &[&[0, 1, 1], &[1, 1, 0]],
];

/// A rows x cols boolean matrix, at most 4x4.
///
/// Cells outside `rows x cols` are always `false`, which keeps the derived
/// equality cell-for-cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl ShapeMatrix {
    /// Build a matrix from 0/1 rows. Every row must have the same length.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is empty, ragged, larger than 4x4, or holds a
    /// value other than 0 or 1.
    pub(crate) fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(!rows.is_empty() && rows.len() <= MAX_SHAPE_DIM, "bad row count");
        let cols = rows[0].len();
        assert!(cols > 0 && cols <= MAX_SHAPE_DIM, "bad column count");

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), cols, "ragged shape row {}", i);
            for (j, &v) in row.iter().enumerate() {
                assert!(v <= 1, "shape values must be 0 or 1");
                cells[i][j] = v == 1;
            }
        }

        Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            cells,
        }
    }

    /// Spawn-orientation template for a piece kind.
    pub fn template(kind: PieceKind) -> Self {
        Self::from_rows(TEMPLATES[kind.index()])
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the cell at (row, col) is filled. Out-of-box cells are empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col]
    }

    /// Offsets `(col, row)` of every filled cell relative to the box's top-left.
    pub fn filled_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows as usize).flat_map(move |i| {
            (0..self.cols as usize)
                .filter(move |&j| self.cells[i][j])
                .map(move |j| (j as i8, i as i8))
        })
    }

    /// A copy rotated 90° clockwise: `new[j][rows - 1 - i] = old[i][j]`.
    ///
    /// The result has `cols` rows and `rows` columns.
    pub fn rotated_cw(&self) -> Self {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (i, row) in self.cells.iter().enumerate().take(rows) {
            for (j, &filled) in row.iter().enumerate().take(cols) {
                cells[j][rows - 1 - i] = filled;
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}
