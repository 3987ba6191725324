//! Legal candidate digits for a single cell of a 9x9 sudoku grid.
//!
//! The crate provides two operations:
//!
//! - [`extract_sub_block`] copies the 3x3 box containing a 0-based cell.
//! - [`find_candidates`] returns the digits 1-9 absent from a cell's row,
//!   column, and box, addressing the cell with 1-based coordinates.
//!
//! Both are pure functions over a borrowed [`DigitGrid`]; they keep no state
//! between calls.
//!
//! # Examples
//!
//! ```
//! use numchoice_candidates::find_candidates;
//! use numchoice_core::DigitGrid;
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
//! let candidates = find_candidates(&grid, 1, 3)?;
//! assert_eq!(candidates.to_values(), vec![1, 2, 4]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [`DigitGrid`]: numchoice_core::DigitGrid

pub use self::{error::*, finder::*, sub_block::*};

mod error;
mod finder;
mod sub_block;
