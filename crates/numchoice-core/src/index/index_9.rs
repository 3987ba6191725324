use crate::Digit;

/// An index in the range 0-8.
///
/// Guarantees at construction time that the index addresses one of the nine
/// slots of a 9-element container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index9 {
    index: u8,
}

impl Index9 {
    /// Creates a new index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-8.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < 9);
        Self { index }
    }

    /// Returns the underlying index value (0-8).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.index
    }

    pub(crate) const fn bit(self) -> u16 {
        1 << self.index
    }

    /// Returns an iterator over all 9 valid indices in ascending order.
    ///
    /// ```
    /// # use numchoice_core::index::Index9;
    /// let indices: Vec<_> = Index9::all().collect();
    /// assert_eq!(indices[0].index(), 0);
    /// assert_eq!(indices[8].index(), 8);
    /// ```
    pub fn all() -> impl DoubleEndedIterator<Item = Self> {
        (0..9).map(Index9::new)
    }
}

/// Defines how values map to indices in 9-element containers.
///
/// Containers like [`BitSet9`](crate::containers::BitSet9) are generic over
/// this trait so the same bit layout serves digits and in-house cell indices.
pub trait Index9Semantics {
    /// The type of values stored in the container.
    type Value;

    /// Converts a value to an index.
    ///
    /// # Panics
    ///
    /// Should panic if the value has no index in the range 0-8.
    fn to_index(value: Self::Value) -> Index9;

    /// Converts an index back to a value.
    fn from_index(index: Index9) -> Self::Value;
}

/// Semantics for digits 1-9: digit 1 maps to index 0, digit 9 to index 8.
///
/// ```
/// use numchoice_core::{
///     Digit,
///     index::{DigitSemantics, Index9, Index9Semantics},
/// };
///
/// assert_eq!(DigitSemantics::to_index(Digit::D9).index(), 8);
/// assert_eq!(DigitSemantics::from_index(Index9::new(0)), Digit::D1);
/// ```
#[derive(Debug)]
pub struct DigitSemantics;

impl Index9Semantics for DigitSemantics {
    type Value = Digit;

    fn to_index(value: Self::Value) -> Index9 {
        Index9::new(value.value() - 1)
    }

    fn from_index(index: Index9) -> Self::Value {
        Digit::from_value(index.index() + 1)
    }
}

/// Semantics for cell indices (0-8) within a row, column, or box.
///
/// # Panics
///
/// `to_index` panics if a value is 9 or greater.
#[derive(Debug)]
pub struct CellIndexSemantics;

impl Index9Semantics for CellIndexSemantics {
    type Value = u8;

    fn to_index(value: Self::Value) -> Index9 {
        assert!(value < 9, "Cell index must be 0-8, got {value}");
        Index9::new(value)
    }

    fn from_index(index: Index9) -> Self::Value {
        index.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod digit_semantics {
        use super::*;

        #[test]
        fn test_digit_to_index() {
            assert_eq!(DigitSemantics::to_index(Digit::D1).index(), 0);
            assert_eq!(DigitSemantics::to_index(Digit::D5).index(), 4);
            assert_eq!(DigitSemantics::to_index(Digit::D9).index(), 8);
        }

        #[test]
        fn test_round_trip() {
            for digit in Digit::ALL {
                let index = DigitSemantics::to_index(digit);
                assert_eq!(DigitSemantics::from_index(index), digit);
            }
        }
    }

    mod cell_index_semantics {
        use super::*;

        #[test]
        fn test_identity_mapping() {
            for i in 0..9 {
                assert_eq!(CellIndexSemantics::to_index(i).index(), i);
                assert_eq!(CellIndexSemantics::from_index(Index9::new(i)), i);
            }
        }

        #[test]
        #[should_panic(expected = "Cell index must be 0-8")]
        fn test_rejects_nine() {
            CellIndexSemantics::to_index(9);
        }
    }

    #[test]
    #[should_panic(expected = "index < 9")]
    fn test_index9_rejects_nine() {
        let _ = Index9::new(9);
    }
}
