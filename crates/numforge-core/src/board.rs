//! The Sudoku board grid.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};

use crate::{position::Position, value_set::ValueSet};

/// A square Sudoku board of side `S`, where `S` is the square of the box size.
///
/// Cells are stored row-major as `u8` values; `0` denotes an empty cell and
/// `1..=S` a filled one. The structural invariant of a valid board is that no
/// non-zero value repeats within a row, column, or box, but `Board` itself does
/// not enforce it; validity checking belongs to the solver.
///
/// # Examples
///
/// ```
/// use numforge_core::{Board, Position};
///
/// let mut board = Board::empty(3);
/// assert_eq!(board.size(), 9);
/// assert_eq!(board.filled_count(), 0);
///
/// board.set(Position::new(0, 0), 5);
/// assert_eq!(board.get(Position::new(0, 0)), 5);
/// assert_eq!(board.filled_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    box_size: usize,
    size: usize,
    cells: Vec<u8>,
}

/// The largest supported box side length (a 25x25 board).
///
/// Bounded by [`ValueSet`]'s bitmask width.
pub const MAX_BOX_SIZE: usize = 5;

impl Board {
    /// Creates an empty board with the given box side length.
    ///
    /// A box size of `3` yields the canonical 9x9 board.
    ///
    /// # Panics
    ///
    /// Panics if `box_size` is `0` or greater than [`MAX_BOX_SIZE`].
    #[must_use]
    pub fn empty(box_size: usize) -> Self {
        assert!(
            (1..=MAX_BOX_SIZE).contains(&box_size),
            "box size must be between 1 and {MAX_BOX_SIZE}, got {box_size}"
        );
        let size = box_size * box_size;
        Self {
            box_size,
            size,
            cells: vec![0; size * size],
        }
    }

    /// Creates a board from a slice of rows.
    ///
    /// # Panics
    ///
    /// Panics if the number of rows is not a perfect square, if any row has a
    /// different length than the number of rows, or if any cell value exceeds
    /// the board size.
    ///
    /// # Examples
    ///
    /// ```
    /// use numforge_core::{Board, Position};
    ///
    /// let board = Board::from_rows(&[
    ///     [1, 2, 3, 4],
    ///     [3, 4, 1, 2],
    ///     [2, 1, 4, 3],
    ///     [4, 3, 2, 1],
    /// ]);
    /// assert_eq!(board.size(), 4);
    /// assert_eq!(board.get(Position::new(1, 0)), 3);
    /// ```
    #[must_use]
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Self {
        let size = rows.len();
        let box_size = size.isqrt();
        assert!(
            box_size * box_size == size,
            "row count {size} is not a perfect square"
        );
        let mut board = Self::empty(box_size);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            assert!(
                values.len() == size,
                "row {row} has {} cells, expected {size}",
                values.len()
            );
            for (col, &value) in values.iter().enumerate() {
                board.set(Position::new(row, col), value);
            }
        }
        board
    }

    /// Returns the side length of the board.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the side length of a box.
    #[must_use]
    pub const fn box_size(&self) -> usize {
        self.box_size
    }

    fn index(&self, pos: Position) -> usize {
        assert!(
            pos.row < self.size && pos.col < self.size,
            "position {pos} out of bounds for a {0}x{0} board",
            self.size
        );
        pos.row * self.size + pos.col
    }

    /// Returns the value at `pos`, or `0` if the cell is empty.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> u8 {
        self.cells[self.index(pos)]
    }

    /// Sets the value at `pos`. A value of `0` clears the cell.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds or `value` exceeds the board size.
    pub fn set(&mut self, pos: Position, value: u8) {
        assert!(
            usize::from(value) <= self.size,
            "value {value} exceeds board size {}",
            self.size
        );
        let index = self.index(pos);
        self.cells[index] = value;
    }

    /// Returns the number of filled (non-zero) cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&value| value != 0).count()
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|&value| value != 0)
    }

    /// Returns the first empty cell in row-major order, if any.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        self.positions().find(|&pos| self.get(pos) == 0)
    }

    /// Returns an iterator over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Returns an iterator over the positions of a row.
    pub fn row_positions(&self, row: usize) -> impl Iterator<Item = Position> + use<> {
        (0..self.size).map(move |col| Position::new(row, col))
    }

    /// Returns an iterator over the positions of a column.
    pub fn col_positions(&self, col: usize) -> impl Iterator<Item = Position> + use<> {
        (0..self.size).map(move |row| Position::new(row, col))
    }

    /// Returns an iterator over the positions of the box at `(box_row, box_col)`.
    ///
    /// Box coordinates range over `0..box_size()` in each dimension.
    pub fn box_positions(
        &self,
        box_row: usize,
        box_col: usize,
    ) -> impl Iterator<Item = Position> + use<> {
        let box_size = self.box_size;
        let (start_row, start_col) = (box_row * box_size, box_col * box_size);
        (start_row..start_row + box_size).flat_map(move |row| {
            (start_col..start_col + box_size).map(move |col| Position::new(row, col))
        })
    }

    /// Returns the set of values that could legally occupy the cell at `pos`:
    /// every value `1..=S` not already used in the cell's row, column, or box.
    ///
    /// The cell's own value, if any, counts as used, so the candidate set of a
    /// filled cell never contains its current value.
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> ValueSet {
        let mut used = ValueSet::EMPTY;
        let (box_row, box_col) = pos.box_coords(self.box_size);
        let peers = self
            .row_positions(pos.row)
            .chain(self.col_positions(pos.col))
            .chain(self.box_positions(box_row, box_col));
        for peer in peers {
            let value = self.get(peer);
            if value != 0 {
                used.insert(value);
            }
        }
        ValueSet::full(self.size).difference(used)
    }
}

/// Error returned when parsing a [`Board`] from a string fails.
#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum ParseBoardError {
    /// The string length does not correspond to a supported board.
    #[display("board string length {len} is not a supported board size")]
    InvalidLength {
        /// Length of the offending string.
        len: usize,
    },
    /// A character other than `.`, `0`, or a digit was encountered.
    #[display("invalid cell character {character:?}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
    /// A digit exceeds the board size.
    #[display("cell value {value} exceeds board size {size}")]
    ValueOutOfRange {
        /// The offending value.
        value: u8,
        /// Side length of the board being parsed.
        size: usize,
    },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses a board from a compact single-line form, e.g. 81 characters for
    /// a 9x9 board. `.` and `0` denote empty cells. Only boards up to size 9
    /// can be written this way, one character per cell.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        let size = len.isqrt();
        let box_size = size.isqrt();
        if size * size != len || box_size * box_size != size || box_size == 0 || size > 9 {
            return Err(ParseBoardError::InvalidLength { len });
        }

        let mut board = Self::empty(box_size);
        let mut positions = board.positions();
        for character in s.chars() {
            let value = match character {
                '.' | '0' => 0,
                _ => {
                    let digit = character
                        .to_digit(10)
                        .ok_or(ParseBoardError::InvalidCharacter { character })?;
                    u8::try_from(digit).map_err(|_| ParseBoardError::InvalidCharacter { character })?
                }
            };
            if usize::from(value) > size {
                return Err(ParseBoardError::ValueOutOfRange { value, size });
            }
            if let Some(pos) = positions.next() {
                board.set(pos, value);
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = if self.size > 9 { 2 } else { 1 };
        let line_len = (width + 1) * self.size + 2 * (self.box_size - 1);
        for row in 0..self.size {
            if row % self.box_size == 0 && row != 0 {
                writeln!(f, "{}", "-".repeat(line_len))?;
            }
            for col in 0..self.size {
                if col % self.box_size == 0 && col != 0 {
                    write!(f, "| ")?;
                }
                let value = self.get(Position::new(row, col));
                if value == 0 {
                    write!(f, "{:>width$} ", ".")?;
                } else {
                    write!(f, "{value:>width$} ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::empty(3);
        assert_eq!(board.size(), 9);
        assert_eq!(board.box_size(), 3);
        assert_eq!(board.filled_count(), 0);
        assert!(!board.is_complete());
        assert_eq!(board.first_empty(), Some(Position::new(0, 0)));
    }

    #[test]
    #[should_panic(expected = "box size must be")]
    fn test_empty_rejects_oversized_box() {
        let _ = Board::empty(6);
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::empty(2);
        board.set(Position::new(3, 3), 4);
        assert_eq!(board.get(Position::new(3, 3)), 4);
        board.set(Position::new(3, 3), 0);
        assert_eq!(board.get(Position::new(3, 3)), 0);
    }

    #[test]
    #[should_panic(expected = "exceeds board size")]
    fn test_set_rejects_oversized_value() {
        let mut board = Board::empty(2);
        board.set(Position::new(0, 0), 5);
    }

    #[test]
    fn test_from_rows() {
        let board = Board::from_rows(&[[1, 2, 3, 4], [3, 4, 1, 2], [2, 1, 4, 3], [4, 3, 2, 1]]);
        assert_eq!(board.size(), 4);
        assert!(board.is_complete());
        assert_eq!(board.get(Position::new(2, 1)), 1);
    }

    #[test]
    fn test_parse_round_trip() {
        let line = "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
        let board: Board = line.parse().unwrap();
        assert_eq!(board.size(), 9);
        assert_eq!(board.filled_count(), 30);
        assert_eq!(board.get(Position::new(0, 0)), 5);
        assert_eq!(board.get(Position::new(8, 8)), 9);
    }

    #[test]
    fn test_parse_accepts_dots() {
        let board: Board = "12343412....4321".parse().unwrap();
        assert_eq!(board.size(), 4);
        assert_eq!(board.filled_count(), 12);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "123".parse::<Board>(),
            Err(ParseBoardError::InvalidLength { len: 3 })
        );
        assert_eq!(
            "123x4321....4321".parse::<Board>(),
            Err(ParseBoardError::InvalidCharacter { character: 'x' })
        );
        assert_eq!(
            "1235432123414321".parse::<Board>(),
            Err(ParseBoardError::ValueOutOfRange { value: 5, size: 4 })
        );
    }

    #[test]
    fn test_box_positions() {
        let board = Board::empty(3);
        let positions: Vec<_> = board.box_positions(1, 2).collect();
        assert_eq!(positions.len(), 9);
        assert_eq!(positions[0], Position::new(3, 6));
        assert_eq!(positions[8], Position::new(5, 8));
    }

    #[test]
    fn test_candidates_at() {
        let mut board = Board::empty(3);
        board.set(Position::new(0, 0), 5); // same row
        board.set(Position::new(8, 4), 7); // same column
        board.set(Position::new(1, 3), 2); // same box

        let candidates = board.candidates_at(Position::new(0, 4));
        assert!(!candidates.contains(5));
        assert!(!candidates.contains(7));
        assert!(!candidates.contains(2));
        assert_eq!(candidates.len(), 6);
    }

    #[test]
    fn test_display_marks_empty_cells() {
        let board: Board = "12343412....4321".parse().unwrap();
        let rendered = board.to_string();
        assert!(rendered.contains('.'));
        assert!(rendered.contains('|'));
    }

    proptest! {
        #[test]
        fn prop_candidates_exclude_peer_values(
            placements in proptest::collection::vec((0usize..9, 0usize..9, 1u8..=9), 0..20)
        ) {
            let mut board = Board::empty(3);
            for &(row, col, value) in &placements {
                board.set(Position::new(row, col), value);
            }
            for pos in board.positions() {
                let candidates = board.candidates_at(pos);
                let (box_row, box_col) = pos.box_coords(3);
                let peers = board
                    .row_positions(pos.row)
                    .chain(board.col_positions(pos.col))
                    .chain(board.box_positions(box_row, box_col));
                for peer in peers {
                    let value = board.get(peer);
                    if value != 0 {
                        prop_assert!(!candidates.contains(value));
                    }
                }
            }
        }
    }
}
