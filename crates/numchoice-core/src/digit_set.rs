//! Sets of digits 1-9.
//!
//! [`DigitSet`] is the [`BitSet9`] specialization used for a cell's candidate set.
//!
//! # Examples
//!
//! ```
//! use numchoice_core::{Digit, DigitSet};
//!
//! let mut candidates = DigitSet::FULL;
//! candidates.remove(Digit::D5);
//! candidates.remove(Digit::D7);
//!
//! assert_eq!(candidates.len(), 7);
//! assert!(!candidates.contains(Digit::D5));
//! assert_eq!(candidates.to_values(), vec![1, 2, 3, 4, 6, 8, 9]);
//! ```

use crate::{containers::BitSet9, index::DigitSemantics};

/// A set of digits (1-9), iterated in ascending order.
///
/// # Set Operations
///
/// ```
/// use numchoice_core::{Digit, DigitSet};
///
/// let a = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
/// let b = DigitSet::from_iter([Digit::D2, Digit::D3, Digit::D4]);
///
/// assert_eq!(a | b, DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3, Digit::D4]));
/// assert_eq!(a & b, DigitSet::from_iter([Digit::D2, Digit::D3]));
/// assert_eq!(a - b, DigitSet::from_iter([Digit::D1]));
/// ```
pub type DigitSet = BitSet9<DigitSemantics>;

impl DigitSet {
    /// Returns the numeric values of the digits in ascending order.
    #[must_use]
    pub fn to_values(&self) -> Vec<u8> {
        self.iter().map(|digit| digit.value()).collect()
    }
}
