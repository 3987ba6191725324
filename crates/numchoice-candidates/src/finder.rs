use numchoice_core::{DigitGrid, DigitSet, Position};

use crate::{Axis, CandidateError, IndexBase, SubBlock, sub_block::zero_based_position};

/// How candidate computation treats a target cell that already holds a digit.
///
/// The row scan includes the target cell, so computing candidates for a
/// filled cell removes that cell's own digit. Each policy makes the outcome
/// of that case explicit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum FilledCellPolicy {
    /// Fail with [`CandidateError::CellFilled`].
    #[default]
    Reject,
    /// Compute as for an empty cell; the cell's own digit is excluded with the
    /// rest of its row, so the result is usually empty.
    Exclude,
    /// Return the placed digit as the only candidate.
    PassThrough,
}

/// Computes candidate digits for cells of a [`DigitGrid`].
///
/// The finder is plain configuration; it holds no grid and can be shared
/// freely across threads.
///
/// # Examples
///
/// ```
/// use numchoice_candidates::{CandidateFinder, FilledCellPolicy};
/// use numchoice_core::{Digit, DigitGrid, Position};
///
/// let mut grid = DigitGrid::new();
/// grid.set(Position::new(0, 0), Some(Digit::D4));
///
/// let finder = CandidateFinder::new().with_filled_cell_policy(FilledCellPolicy::PassThrough);
/// assert_eq!(finder.find(&grid, 1, 1)?.to_values(), vec![4]);
/// assert_eq!(finder.find(&grid, 1, 2)?.len(), 8);
/// # Ok::<(), numchoice_candidates::CandidateError>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateFinder {
    filled_cell: FilledCellPolicy,
}

impl CandidateFinder {
    /// Creates a finder that rejects filled target cells.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            filled_cell: FilledCellPolicy::Reject,
        }
    }

    /// Sets the policy for filled target cells.
    #[must_use]
    pub const fn with_filled_cell_policy(mut self, policy: FilledCellPolicy) -> Self {
        self.filled_cell = policy;
        self
    }

    /// Returns the policy for filled target cells.
    #[must_use]
    pub const fn filled_cell_policy(&self) -> FilledCellPolicy {
        self.filled_cell
    }

    /// Returns the candidates of the cell at 1-based `row` and `col`.
    ///
    /// # Errors
    ///
    /// Returns [`CandidateError::InvalidIndex`] if `row` or `col` is outside 1-9,
    /// and [`CandidateError::CellFilled`] if the cell holds a digit under
    /// [`FilledCellPolicy::Reject`].
    pub fn find(
        &self,
        grid: &DigitGrid,
        row: usize,
        col: usize,
    ) -> Result<DigitSet, CandidateError> {
        let pos = one_based_position(row, col).inspect_err(|err| {
            log::debug!("rejected candidate request: {err}");
        })?;
        self.find_at(grid, pos)
    }

    /// Returns the candidates of the cell at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`CandidateError::CellFilled`] if the cell holds a digit under
    /// [`FilledCellPolicy::Reject`].
    pub fn find_at(&self, grid: &DigitGrid, pos: Position) -> Result<DigitSet, CandidateError> {
        if let Some(digit) = grid[pos] {
            match self.filled_cell {
                FilledCellPolicy::Reject => {
                    let err = CandidateError::CellFilled {
                        position: pos,
                        digit,
                    };
                    log::debug!("rejected candidate request: {err}");
                    return Err(err);
                }
                FilledCellPolicy::PassThrough => return Ok(DigitSet::from_elem(digit)),
                FilledCellPolicy::Exclude => {}
            }
        }
        Ok(remaining_digits(grid, pos))
    }

    /// Returns the candidates of a cell of a raw grid as ascending values.
    ///
    /// `rows` must be 9 rows of 9 values each, `0` marking an empty cell;
    /// `row` and `col` are 1-based.
    ///
    /// # Errors
    ///
    /// Returns [`CandidateError::Grid`] if `rows` is malformed, and otherwise
    /// fails like [`CandidateFinder::find`].
    ///
    /// ```
    /// use numchoice_candidates::CandidateFinder;
    ///
    /// let mut rows = vec![vec![0u8; 9]; 9];
    /// rows[0] = vec![0, 1, 2, 3, 0, 0, 0, 0, 0];
    /// rows[8][0] = 9;
    ///
    /// let values = CandidateFinder::new().find_in_rows(&rows, 1, 1)?;
    /// assert_eq!(values, vec![4, 5, 6, 7, 8]);
    /// # Ok::<(), numchoice_candidates::CandidateError>(())
    /// ```
    pub fn find_in_rows<R>(
        &self,
        rows: &[R],
        row: usize,
        col: usize,
    ) -> Result<Vec<u8>, CandidateError>
    where
        R: AsRef<[u8]>,
    {
        let grid = DigitGrid::try_from_rows(rows).inspect_err(|err| {
            log::debug!("rejected candidate request: {err}");
        })?;
        Ok(self.find(&grid, row, col)?.to_values())
    }

    /// Returns the candidates of every empty cell, in row-major order.
    ///
    /// An empty candidate set marks a cell that no digit can fill.
    #[must_use]
    pub fn find_all(&self, grid: &DigitGrid) -> Vec<(Position, DigitSet)> {
        grid.empty_positions()
            .map(|pos| (pos, remaining_digits(grid, pos)))
            .collect()
    }
}

/// Returns the candidates of the cell at 1-based `row` and `col`.
///
/// Starting from the digits 1-9, this removes every digit placed in the cell's
/// row, then its column, then its 3x3 box. The result iterates in ascending
/// order and may be empty.
///
/// Filled target cells are rejected; use [`CandidateFinder`] to choose another
/// [`FilledCellPolicy`].
///
/// # Errors
///
/// Returns [`CandidateError::InvalidIndex`] if `row` or `col` is outside 1-9,
/// and [`CandidateError::CellFilled`] if the cell holds a digit.
pub fn find_candidates(
    grid: &DigitGrid,
    row: usize,
    col: usize,
) -> Result<DigitSet, CandidateError> {
    CandidateFinder::new().find(grid, row, col)
}

fn one_based_position(row: usize, col: usize) -> Result<Position, CandidateError> {
    for (axis, index) in [(Axis::Row, row), (Axis::Column, col)] {
        if !(1..=9).contains(&index) {
            return Err(CandidateError::InvalidIndex {
                axis,
                index,
                base: IndexBase::OneBased,
            });
        }
    }
    zero_based_position(row - 1, col - 1)
}

fn remaining_digits(grid: &DigitGrid, pos: Position) -> DigitSet {
    let row: DigitSet = grid.row(pos.y()).into_iter().flatten().collect();
    let column: DigitSet = grid.column(pos.x()).into_iter().flatten().collect();
    let block = SubBlock::containing(grid, pos).digits();

    let candidates = DigitSet::FULL - row - column - block;
    log::trace!("candidates at {pos}: {candidates:?}");
    candidates
}
