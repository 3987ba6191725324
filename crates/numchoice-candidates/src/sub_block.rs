use numchoice_core::{Digit, DigitGrid, DigitSet, Position};

use crate::{Axis, CandidateError, IndexBase};

/// A copy of one 3x3 box of a [`DigitGrid`].
///
/// # Examples
///
/// ```
/// use numchoice_candidates::extract_sub_block;
/// use numchoice_core::{Digit, DigitGrid, Position};
///
/// let mut grid = DigitGrid::new();
/// grid.set(Position::new(4, 4), Some(Digit::D7));
///
/// let block = extract_sub_block(&grid, 3, 5)?;
/// assert_eq!(block.origin(), Position::new(3, 3));
/// assert_eq!(block.get(1, 1), Some(Digit::D7));
/// # Ok::<(), numchoice_candidates::CandidateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubBlock {
    origin: Position,
    /// `cells[dy][dx]`, relative to `origin`
    cells: [[Option<Digit>; 3]; 3],
}

impl SubBlock {
    /// Copies the box of `grid` that contains `pos`.
    #[must_use]
    pub fn containing(grid: &DigitGrid, pos: Position) -> Self {
        let origin = pos.box_origin();
        let (x0, y0) = (usize::from(origin.x()), usize::from(origin.y()));
        let rows = grid.rows();
        let cells = [0, 1, 2].map(|dy| [0, 1, 2].map(|dx| rows[y0 + dy][x0 + dx]));
        Self { origin, cells }
    }

    /// Returns the top-left position of the box.
    #[must_use]
    pub const fn origin(&self) -> Position {
        self.origin
    }

    /// Returns the index of the box (0-8, left to right, top to bottom).
    #[must_use]
    pub const fn box_index(&self) -> u8 {
        self.origin.box_index()
    }

    /// Returns the cell at row `dy` and column `dx` relative to the origin.
    ///
    /// # Panics
    ///
    /// Panics if `dy` or `dx` is not in the range 0-2.
    #[must_use]
    pub fn get(&self, dy: usize, dx: usize) -> Option<Digit> {
        self.cells[dy][dx]
    }

    /// Returns the cells as three rows of three.
    #[must_use]
    pub const fn rows(&self) -> &[[Option<Digit>; 3]; 3] {
        &self.cells
    }

    /// Returns the nine cells in row-major order, paired with their absolute positions.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Option<Digit>)> + '_ {
        (0..9).map(|i| {
            (
                Position::from_box(self.box_index(), i),
                self.cells[usize::from(i / 3)][usize::from(i % 3)],
            )
        })
    }

    /// Returns the digits placed in the box.
    #[must_use]
    pub fn digits(&self) -> DigitSet {
        self.cells.as_flattened().iter().flatten().copied().collect()
    }
}

/// Returns the 3x3 box of `grid` containing the cell at 0-based `row` and `col`.
///
/// The box's top-left corner is `(row - row % 3, col - col % 3)`, so every cell
/// of a box yields the same [`SubBlock`].
///
/// # Errors
///
/// Returns [`CandidateError::InvalidIndex`] if `row` or `col` is greater than 8.
pub fn extract_sub_block(
    grid: &DigitGrid,
    row: usize,
    col: usize,
) -> Result<SubBlock, CandidateError> {
    let pos = zero_based_position(row, col)?;
    Ok(SubBlock::containing(grid, pos))
}

pub(crate) fn zero_based_position(row: usize, col: usize) -> Result<Position, CandidateError> {
    Position::try_new(col, row).ok_or_else(|| {
        let (axis, index) = if row > 8 {
            (Axis::Row, row)
        } else {
            (Axis::Column, col)
        };
        CandidateError::InvalidIndex {
            axis,
            index,
            base: IndexBase::ZeroBased,
        }
    })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    /// A grid whose cell at row `y`, column `x` holds `(y * 3 + x) % 9 + 1`.
    fn patterned_grid() -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in Position::ALL {
            let value = (pos.y() * 3 + pos.x()) % 9 + 1;
            grid.set(pos, Some(Digit::from_value(value)));
        }
        grid
    }

    #[test]
    fn test_corner_and_center_cells() {
        let grid = patterned_grid();
        let cases = [
            ((0, 0), Position::new(0, 0)),
            ((0, 8), Position::new(6, 0)),
            ((8, 0), Position::new(0, 6)),
            ((8, 8), Position::new(6, 6)),
            ((4, 4), Position::new(3, 3)),
        ];
        for ((row, col), origin) in cases {
            let block = extract_sub_block(&grid, row, col).unwrap();
            assert_eq!(block.origin(), origin, "cell ({row}, {col})");
            for (pos, cell) in block.cells() {
                assert_eq!(cell, grid[pos]);
                assert_eq!(pos.box_origin(), origin);
            }
        }
    }

    #[test]
    fn test_every_cell_of_a_box_yields_the_same_block() {
        let grid = patterned_grid();
        for box_index in 0..9 {
            let expected = SubBlock::containing(&grid, Position::from_box(box_index, 0));
            assert_eq!(expected.box_index(), box_index);
            for i in 0..9 {
                let pos = Position::from_box(box_index, i);
                let block =
                    extract_sub_block(&grid, usize::from(pos.y()), usize::from(pos.x())).unwrap();
                assert_eq!(block, expected);
            }
        }
    }

    #[test]
    fn test_rows_and_get_are_relative_to_origin() {
        let grid = patterned_grid();
        let block = extract_sub_block(&grid, 7, 4).unwrap();
        assert_eq!(block.origin(), Position::new(3, 6));
        // (y * 3 + x) % 9 + 1 at y = 6, x = 3
        assert_eq!(block.get(0, 0), Some(Digit::D4));
        assert_eq!(block.rows()[2][2], grid[Position::new(5, 8)]);
    }

    #[test]
    fn test_digits() {
        let mut grid = DigitGrid::new();
        assert!(extract_sub_block(&grid, 0, 0).unwrap().digits().is_empty());

        grid.set(Position::new(0, 0), Some(Digit::D5));
        grid.set(Position::new(2, 2), Some(Digit::D8));
        grid.set(Position::new(3, 0), Some(Digit::D1));
        let digits = extract_sub_block(&grid, 1, 1).unwrap().digits();
        assert_eq!(digits.to_values(), vec![5, 8]);
    }

    #[test]
    fn test_rejects_out_of_range_indices() {
        let grid = DigitGrid::new();
        assert_eq!(
            extract_sub_block(&grid, 9, 0),
            Err(CandidateError::InvalidIndex {
                axis: Axis::Row,
                index: 9,
                base: IndexBase::ZeroBased,
            })
        );
        assert_eq!(
            extract_sub_block(&grid, 0, 9),
            Err(CandidateError::InvalidIndex {
                axis: Axis::Column,
                index: 9,
                base: IndexBase::ZeroBased,
            })
        );
        assert_eq!(
            extract_sub_block(&grid, 3, 12).unwrap_err().to_string(),
            "column index 12 is out of range 0-8"
        );
    }

    proptest! {
        #[test]
        fn test_block_matches_grid(row in 0usize..9, col in 0usize..9) {
            let grid = patterned_grid();
            let block = extract_sub_block(&grid, row, col).unwrap();
            let origin = block.origin();
            prop_assert_eq!(usize::from(origin.y()), row - row % 3);
            prop_assert_eq!(usize::from(origin.x()), col - col % 3);
            for dy in 0..3 {
                for dx in 0..3 {
                    let pos = Position::new(origin.x() + dx, origin.y() + dy);
                    prop_assert_eq!(block.get(usize::from(dy), usize::from(dx)), grid[pos]);
                }
            }
        }
    }
}
