use numchoice_core::{Digit, GridError, Position};

/// Which coordinate of a cell an index addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Axis {
    /// The row coordinate.
    #[display("row")]
    Row,
    /// The column coordinate.
    #[display("column")]
    Column,
}

/// The numbering an index was given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IndexBase {
    /// Valid indices are 0-8.
    #[display("0-8")]
    ZeroBased,
    /// Valid indices are 1-9.
    #[display("1-9")]
    OneBased,
}

/// Errors returned by candidate computation.
///
/// Every variant rejects the request before any candidate is computed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum CandidateError {
    /// A row or column index lies outside the board.
    #[display("{axis} index {index} is out of range {base}")]
    InvalidIndex {
        /// The coordinate that was out of range.
        axis: Axis,
        /// The rejected index.
        index: usize,
        /// The numbering the index was given in.
        base: IndexBase,
    },
    /// The target cell already holds a digit.
    #[display("cell {position} already holds {digit}")]
    CellFilled {
        /// The 0-based position of the cell.
        position: Position,
        /// The digit placed there.
        digit: Digit,
    },
    /// The raw grid was malformed.
    #[display("invalid grid: {_0}")]
    Grid(#[from] GridError),
}
