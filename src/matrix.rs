//! FenceMatrix: the rails x length grid a cipher operation works on.
//!
//! Cells live in a single row-major `Vec` and are addressed by `(row, col)`.
//! Only cells on the zigzag path are ever activated; every other cell stays
//! [`Cell::Inert`] for the life of the matrix.

use crate::error::RailFenceError;
use crate::path::ZigzagPath;

/// Largest number of cells a matrix may hold.
///
/// An empty text still counts one column per rail, since the rendered grid
/// carries one line per rail.
pub const MAX_CELLS: usize = 1 << 24;

/// State of a single matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Not on the zigzag path. Never read or written.
    Inert,
    /// On the path, waiting for a character.
    Marked,
    /// On the path and holding a character.
    Filled(char),
}

impl Cell {
    /// Returns `true` for cells on the zigzag path.
    pub fn is_active(self) -> bool {
        !matches!(self, Cell::Inert)
    }

    /// Character held by the cell, if any.
    pub fn char(self) -> Option<char> {
        match self {
            Cell::Filled(c) => Some(c),
            _ => None,
        }
    }
}

/// Grid of `rails` rows by `cols` columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl FenceMatrix {
    /// Creates a matrix with the cells of `path` marked active.
    ///
    /// # Parameters
    /// - `path`: Zigzag path; its rail count and length give the dimensions.
    ///
    /// # Errors
    /// Returns [`RailFenceError::MatrixTooLarge`] if the grid would exceed
    /// [`MAX_CELLS`].
    pub fn marked(path: &ZigzagPath) -> Result<Self, RailFenceError> {
        let rows = path.rails().get();
        let cols = path.len();
        match rows.checked_mul(cols.max(1)) {
            Some(n) if n <= MAX_CELLS => {}
            _ => {
                return Err(RailFenceError::MatrixTooLarge {
                    rails: rows,
                    length: cols,
                    limit: MAX_CELLS,
                })
            }
        }
        let mut matrix = FenceMatrix {
            rows,
            cols,
            cells: vec![Cell::Inert; rows * cols],
        };
        for (row, col) in path.cells() {
            matrix.cells[row * cols + col] = Cell::Marked;
        }
        Ok(matrix)
    }

    /// Number of rows (rails).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (text length).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the cell at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Writes `c` into an active cell.
    ///
    /// Inert and out-of-range cells are left untouched.
    ///
    /// # Returns
    /// `true` if the character was stored.
    pub fn fill(&mut self, row: usize, col: usize, c: char) -> bool {
        match self.get(row, col) {
            Some(cell) if cell.is_active() => {
                self.cells[row * self.cols + col] = Cell::Filled(c);
                true
            }
            _ => false,
        }
    }

    /// Cells of one row, left to right.
    ///
    /// # Panics
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Iterates all rows, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// Active cells in row-major scan order as `(row, col)` pairs.
    pub fn active_row_major(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_active())
            .map(move |(i, _)| (i / self.cols, i % self.cols))
    }

    /// Characters of the filled cells, rows top to bottom, columns left to
    /// right.
    pub fn read_rows(&self) -> impl Iterator<Item = char> + '_ {
        self.cells.iter().filter_map(|cell| cell.char())
    }
}
