//! Board coordinate type.

use derive_more::Display;

/// A cell coordinate on a board.
///
/// Positions order row-major: `(0, 0)` is the top-left cell, `(0, 1)` the cell
/// to its right. The derived [`Ord`] follows the same order, which makes
/// iteration over ordered collections of positions deterministic.
///
/// # Examples
///
/// ```
/// use numforge_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row, 4);
/// assert_eq!(pos.col, 7);
/// assert_eq!(pos.to_string(), "(4, 7)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("({row}, {col})")]
pub struct Position {
    /// Row index (0-based, top to bottom).
    pub row: usize,
    /// Column index (0-based, left to right).
    pub col: usize,
}

impl Position {
    /// Creates a position from row and column indices.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the `(box_row, box_col)` coordinates of the box containing this
    /// position, for the given box side length.
    ///
    /// # Examples
    ///
    /// ```
    /// use numforge_core::Position;
    ///
    /// assert_eq!(Position::new(4, 7).box_coords(3), (1, 2));
    /// ```
    #[must_use]
    pub const fn box_coords(self, box_size: usize) -> (usize, usize) {
        (self.row / box_size, self.col / box_size)
    }

    /// Returns `true` if `self` and `other` share a row, column, or box.
    ///
    /// A position shares a house with itself.
    #[must_use]
    pub const fn shares_house(self, other: Self, box_size: usize) -> bool {
        self.row == other.row
            || self.col == other.col
            || (self.row / box_size == other.row / box_size
                && self.col / box_size == other.col / box_size)
    }
}
