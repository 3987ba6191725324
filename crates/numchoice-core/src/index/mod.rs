//! Index types and semantics for 9-element containers.
//!
//! - [`Index9`] - Index into 9-element containers (range 0-8)
//! - [`DigitSemantics`] - Maps digits 1-9 to indices 0-8
//! - [`CellIndexSemantics`] - Direct 0-8 mapping for cells within a row, column, or box
//!
//! # Examples
//!
//! ```
//! use numchoice_core::{
//!     Digit,
//!     index::{DigitSemantics, Index9, Index9Semantics},
//! };
//!
//! let idx = DigitSemantics::to_index(Digit::D5);
//! assert_eq!(idx.index(), 4);
//!
//! let indices: Vec<_> = Index9::all().collect();
//! assert_eq!(indices.len(), 9);
//! ```

pub use self::index_9::*;

mod index_9;
