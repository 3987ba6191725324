//! Generic containers parameterized by index semantics.
//!
//! - [`BitSet9`] - A 9-bit set, see [`DigitSet`](crate::DigitSet) for the digit specialization

pub use self::bit_set_9::*;

mod bit_set_9;
