//! Zigzag path generation.
//!
//! The path assigns a rail (row) to every character position. A cursor starts
//! on rail 0 moving down, and bounces whenever it reaches the top or bottom
//! rail. Both the encoder and the decoder walk the same path, which is what
//! makes them inverses of each other.

use crate::error::RailFenceError;

/// A validated rail count (always at least 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rails(usize);

impl Rails {
    /// Rail count used when none is specified.
    pub const DEFAULT: Rails = Rails(3);

    /// Validates a signed rail count.
    ///
    /// # Errors
    /// Returns [`RailFenceError::InvalidRailCount`] if `rails <= 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use railfence::Rails;
    ///
    /// assert_eq!(Rails::new(3).unwrap().get(), 3);
    /// assert!(Rails::new(0).is_err());
    /// ```
    pub fn new(rails: i64) -> Result<Self, RailFenceError> {
        if rails <= 0 {
            return Err(RailFenceError::InvalidRailCount(rails));
        }
        usize::try_from(rails)
            .map(Rails)
            .map_err(|_| RailFenceError::InvalidRailCount(rails))
    }

    /// Returns the rail count.
    pub fn get(self) -> usize {
        self.0
    }

    /// Index of the bottom rail.
    pub fn last(self) -> usize {
        self.0 - 1
    }
}

impl Default for Rails {
    fn default() -> Self {
        Rails::DEFAULT
    }
}

impl TryFrom<i64> for Rails {
    type Error = RailFenceError;

    fn try_from(rails: i64) -> Result<Self, Self::Error> {
        Rails::new(rails)
    }
}

/// Row index for every character position of a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZigzagPath {
    rails: Rails,
    rows: Vec<usize>,
}

impl ZigzagPath {
    /// Rail count the path was generated for.
    pub fn rails(&self) -> Rails {
        self.rails
    }

    /// Row indices, one per position.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the path covers no positions.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row of column `col`, if in range.
    pub fn row_at(&self, col: usize) -> Option<usize> {
        self.rows.get(col).copied()
    }

    /// Iterates `(row, col)` pairs in column order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().map(|(col, &row)| (row, col))
    }

    /// Length of one full down-and-up cycle: `2 * (rails - 1)`, or 1 for a
    /// single rail.
    pub fn period(&self) -> usize {
        match self.rails.get() {
            1 => 1,
            n => 2 * (n - 1),
        }
    }

    /// Number of positions that land on each rail.
    pub fn row_lengths(&self) -> Vec<usize> {
        let mut lengths = vec![0usize; self.rails.get()];
        for &row in &self.rows {
            lengths[row] += 1;
        }
        lengths
    }
}

/// Generates the zigzag path for a text of `length` characters.
///
/// The cursor starts at row 0 moving down. On row 0 the direction becomes
/// down, on the bottom rail it becomes up. With a single rail every position
/// maps to row 0.
///
/// # Examples
///
/// ```
/// use railfence::{generate_path, Rails};
///
/// let path = generate_path(5, Rails::new(3).unwrap());
/// assert_eq!(path.rows(), &[0, 1, 2, 1, 0]);
/// ```
pub fn generate_path(length: usize, rails: Rails) -> ZigzagPath {
    let last = rails.last();
    let mut rows = Vec::with_capacity(length);
    let mut row = 0usize;
    let mut down = true;

    for _ in 0..length {
        rows.push(row);
        if last == 0 {
            continue;
        }
        if row == 0 {
            down = true;
        } else if row == last {
            down = false;
        }
        if down {
            row += 1;
        } else {
            row -= 1;
        }
    }

    log::trace!("zigzag path for {} rails: {:?}", rails.get(), rows);
    ZigzagPath { rails, rows }
}
