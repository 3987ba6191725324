//! The 9x9 board of placed digits.
//!
//! [`DigitGrid`] holds exactly 9x9 cells, each empty or holding a [`Digit`].
//! It does not check sudoku legality; duplicate digits in a row are accepted.
//!
//! # Text format
//!
//! Parsing reads 81 cell characters: `1`-`9` are placed digits, `.`, `_`
//! and `0` are empty cells, whitespace is ignored.
//!
//! ```
//! use numchoice_core::{Digit, DigitGrid, Position};
//!
//! let grid: DigitGrid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
//! assert_eq!(grid[Position::new(2, 0)], None);
//! # Ok::<(), numchoice_core::GridError>(())
//! ```

use std::{
    fmt::{self, Display, Write as _},
    ops::Index,
    str::FromStr,
};

use crate::{Digit, Position};

/// Errors raised when building a [`DigitGrid`] from untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The input does not have exactly 9 rows.
    #[display("grid must have 9 rows, got {rows}")]
    InvalidRowCount {
        /// Number of rows supplied.
        rows: usize,
    },
    /// A row does not have exactly 9 columns.
    #[display("grid row {row} must have 9 columns, got {columns}")]
    InvalidColumnCount {
        /// 0-based index of the offending row.
        row: usize,
        /// Number of columns in that row.
        columns: usize,
    },
    /// A cell holds a value outside 0-9.
    #[display("cell at row {row}, column {column} must be 0-9, got {value}")]
    InvalidCellValue {
        /// 0-based row of the cell.
        row: usize,
        /// 0-based column of the cell.
        column: usize,
        /// The rejected value.
        value: u8,
    },
    /// The text form contains a character that is neither a cell nor whitespace.
    #[display("invalid grid character: {ch:?}")]
    InvalidCharacter {
        /// The rejected character.
        ch: char,
    },
    /// The text form does not contain exactly 81 cells.
    #[display("grid must have 81 cells, got {len}")]
    InvalidLength {
        /// Number of cells read.
        len: usize,
    },
}

/// A 9x9 sudoku board.
///
/// Cells are `None` when empty. Values are copied in and out; the grid owns
/// no heap data and is cheap to pass by value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitGrid {
    /// `cells[y][x]`
    cells: [[Option<Digit>; 9]; 9],
}

impl DigitGrid {
    /// Creates a grid with every cell empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a grid from rows of cells.
    #[must_use]
    pub const fn from_cells(cells: [[Option<Digit>; 9]; 9]) -> Self {
        Self { cells }
    }

    /// Creates a grid from rows of raw values, where `0` is an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidRowCount`] or [`GridError::InvalidColumnCount`]
    /// if the input is not 9x9, and [`GridError::InvalidCellValue`] for values above 9.
    ///
    /// ```
    /// use numchoice_core::{DigitGrid, GridError};
    ///
    /// let rows = vec![vec![0u8; 9]; 8];
    /// assert_eq!(DigitGrid::try_from_rows(&rows), Err(GridError::InvalidRowCount { rows: 8 }));
    /// ```
    pub fn try_from_rows<R>(rows: &[R]) -> Result<Self, GridError>
    where
        R: AsRef<[u8]>,
    {
        if rows.len() != 9 {
            return Err(GridError::InvalidRowCount { rows: rows.len() });
        }
        let mut cells = [[None; 9]; 9];
        for (y, (row, cells_row)) in rows.iter().zip(&mut cells).enumerate() {
            let row = row.as_ref();
            if row.len() != 9 {
                return Err(GridError::InvalidColumnCount {
                    row: y,
                    columns: row.len(),
                });
            }
            for (x, (&value, cell)) in row.iter().zip(cells_row).enumerate() {
                *cell = match value {
                    0 => None,
                    _ => Some(Digit::try_from_value(value).ok_or(GridError::InvalidCellValue {
                        row: y,
                        column: x,
                        value,
                    })?),
                };
            }
        }
        Ok(Self { cells })
    }

    /// Returns the cell at `pos`.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self[pos]
    }

    /// Sets the cell at `pos`.
    pub fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[usize::from(pos.y())][usize::from(pos.x())] = digit;
    }

    /// Returns the cells as rows.
    #[must_use]
    pub const fn rows(&self) -> &[[Option<Digit>; 9]; 9] {
        &self.cells
    }

    /// Returns the cells of row `y` (0-8), left to right.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not in the range 0-8.
    #[must_use]
    pub fn row(&self, y: u8) -> [Option<Digit>; 9] {
        self.cells[usize::from(y)]
    }

    /// Returns the cells of column `x` (0-8), top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `x` is not in the range 0-8.
    #[must_use]
    pub fn column(&self, x: u8) -> [Option<Digit>; 9] {
        self.cells.map(|row| row[usize::from(x)])
    }

    /// Returns the cells as rows of raw values, `0` for empty cells.
    #[must_use]
    pub fn to_rows(&self) -> [[u8; 9]; 9] {
        self.cells
            .map(|row| row.map(|cell| cell.map_or(0, |digit| digit.value())))
    }

    /// Returns an iterator over the empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.get(pos).is_none())
    }

    /// Returns the number of placed digits.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.as_flattened().iter().flatten().count()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[usize::from(pos.y())][usize::from(pos.x())]
    }
}

impl FromStr for DigitGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [[None; 9]; 9];
        let mut len = 0;
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            let cell = match ch {
                '.' | '_' | '0' => None,
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = ch as u8 - b'0';
                    Some(Digit::from_value(value))
                }
                _ => return Err(GridError::InvalidCharacter { ch }),
            };
            if len < 81 {
                cells[len / 9][len % 9] = cell;
            }
            len += 1;
        }
        if len != 81 {
            return Err(GridError::InvalidLength { len });
        }
        Ok(Self { cells })
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in self.cells.as_flattened() {
            match cell {
                Some(digit) => Display::fmt(digit, f)?,
                None => f.write_char('.')?,
            }
        }
        Ok(())
    }
}

impl From<[[Option<Digit>; 9]; 9]> for DigitGrid {
    fn from(cells: [[Option<Digit>; 9]; 9]) -> Self {
        Self::from_cells(cells)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const SAMPLE: &str = "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
    ";

    #[test]
    fn test_parse_and_display() {
        let grid: DigitGrid = SAMPLE.parse().unwrap();
        assert_eq!(grid.filled_count(), 30);
        assert_eq!(grid.row(0)[0], Some(Digit::D5));
        assert_eq!(grid.column(0)[1], Some(Digit::D6));
        let text = grid.to_string();
        assert_eq!(text.len(), 81);
        assert!(text.starts_with("53..7...."));
        assert_eq!(text.parse::<DigitGrid>().unwrap(), grid);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "x".repeat(81).parse::<DigitGrid>(),
            Err(GridError::InvalidCharacter { ch: 'x' })
        );
        assert_eq!(
            ".".repeat(80).parse::<DigitGrid>(),
            Err(GridError::InvalidLength { len: 80 })
        );
        assert_eq!(
            ".".repeat(82).parse::<DigitGrid>(),
            Err(GridError::InvalidLength { len: 82 })
        );
    }

    #[test]
    fn test_try_from_rows_validates_shape() {
        let mut rows = vec![vec![0u8; 9]; 9];
        assert_eq!(DigitGrid::try_from_rows(&rows), Ok(DigitGrid::new()));

        rows[3].pop();
        assert_eq!(
            DigitGrid::try_from_rows(&rows),
            Err(GridError::InvalidColumnCount { row: 3, columns: 8 })
        );

        rows.pop();
        assert_eq!(
            DigitGrid::try_from_rows(&rows),
            Err(GridError::InvalidRowCount { rows: 8 })
        );
    }

    #[test]
    fn test_try_from_rows_validates_values() {
        let mut rows = [[0u8; 9]; 9];
        rows[2][7] = 10;
        assert_eq!(
            DigitGrid::try_from_rows(&rows),
            Err(GridError::InvalidCellValue {
                row: 2,
                column: 7,
                value: 10
            })
        );
    }

    #[test]
    fn test_empty_positions() {
        let grid: DigitGrid = SAMPLE.parse().unwrap();
        assert_eq!(grid.empty_positions().count(), 81 - 30);
        assert_eq!(grid.empty_positions().next(), Some(Position::new(2, 0)));
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = DigitGrid::new();
        let pos = Position::new(6, 2);
        grid.set(pos, Some(Digit::D3));
        assert_eq!(grid.get(pos), Some(Digit::D3));
        assert_eq!(grid[pos], Some(Digit::D3));
        assert_eq!(grid.to_rows()[2][6], 3);
    }

    proptest! {
        #[test]
        fn test_rows_round_trip(rows in prop::array::uniform9(prop::array::uniform9(0u8..=9))) {
            let grid = DigitGrid::try_from_rows(&rows).unwrap();
            prop_assert_eq!(grid.to_rows(), rows);
        }
    }
}
