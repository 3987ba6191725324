//! Core data structures for the numchoice candidate kernel.
//!
//! This crate provides the small, fixed-size value types that the candidate
//! computation works on.
//!
//! # Overview
//!
//! 1. **Core types**
//!    - [`digit`]: Type-safe representation of sudoku digits 1-9
//!    - [`position`]: Board position (x, y) coordinates, 0-based
//!    - [`digit_grid`]: The 9x9 board of placed digits
//!
//! 2. **Index semantics** - Define how values map to indices in containers
//!    - [`index`]: [`Index9`] together with [`DigitSemantics`] and
//!      [`CellIndexSemantics`].
//!
//! 3. **Generic containers**
//!    - [`containers`]: [`BitSet9`], parameterized by index semantics.
//!
//! 4. **Specialized types**
//!    - [`digit_set`]: A set of digits, used as a cell's candidate set
//!
//! [`Index9`]: index::Index9
//! [`DigitSemantics`]: index::DigitSemantics
//! [`CellIndexSemantics`]: index::CellIndexSemantics
//! [`BitSet9`]: containers::BitSet9
//!
//! # Examples
//!
//! ```
//! use numchoice_core::{Digit, DigitGrid, DigitSet, Position};
//!
//! let mut grid = DigitGrid::new();
//! grid.set(Position::new(4, 4), Some(Digit::D5));
//!
//! let mut candidates = DigitSet::FULL;
//! candidates.remove(Digit::D5);
//! assert_eq!(candidates.len(), 8);
//! assert_eq!(grid[Position::new(4, 4)], Some(Digit::D5));
//! ```

pub mod containers;
pub mod digit;
pub mod digit_grid;
pub mod digit_set;
pub mod index;
pub mod position;

// Re-export commonly used types
pub use self::{
    digit::Digit,
    digit_grid::{DigitGrid, GridError},
    digit_set::DigitSet,
    position::Position,
};
