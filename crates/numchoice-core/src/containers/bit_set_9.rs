use std::{
    fmt,
    hash::{Hash, Hasher},
    iter::FusedIterator,
    marker::PhantomData,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Sub, SubAssign},
};

use crate::index::{Index9, Index9Semantics};

const MASK: u16 = 0x1ff;

/// A set of up to nine values, stored as the low 9 bits of a `u16`.
///
/// The semantics parameter `S` decides which values the bits stand for.
/// Iteration always follows index order, which for
/// [`DigitSemantics`](crate::index::DigitSemantics) is ascending digit order.
///
/// # Examples
///
/// ```
/// use numchoice_core::{containers::BitSet9, index::CellIndexSemantics};
///
/// let mut set = BitSet9::<CellIndexSemantics>::new();
/// set.insert(0);
/// set.insert(8);
/// assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 8]);
/// ```
pub struct BitSet9<S> {
    bits: u16,
    _semantics: PhantomData<S>,
}

impl<S> BitSet9<S> {
    /// The empty set.
    pub const EMPTY: Self = Self::from_bits_unchecked(0);

    /// The set containing all nine values.
    pub const FULL: Self = Self::from_bits_unchecked(MASK);

    const fn from_bits_unchecked(bits: u16) -> Self {
        Self {
            bits,
            _semantics: PhantomData,
        }
    }

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set from raw bits, returning `None` if any bit above bit 8 is set.
    ///
    /// ```
    /// use numchoice_core::DigitSet;
    ///
    /// assert_eq!(DigitSet::try_from_bits(0x1ff), Some(DigitSet::FULL));
    /// assert_eq!(DigitSet::try_from_bits(0x200), None);
    /// ```
    #[must_use]
    pub const fn try_from_bits(bits: u16) -> Option<Self> {
        if bits & !MASK == 0 {
            Some(Self::from_bits_unchecked(bits))
        } else {
            None
        }
    }

    /// Returns the raw bit representation.
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.bits
    }

    /// Returns the number of values in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no values.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the values in either set.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self::from_bits_unchecked(self.bits | other.bits)
    }

    /// Returns the values in both sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self::from_bits_unchecked(self.bits & other.bits)
    }

    /// Returns the values in `self` but not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self::from_bits_unchecked(self.bits & !other.bits)
    }

    /// Returns `true` if every value of `self` is also in `other`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.bits & !other.bits == 0
    }

    /// Returns `true` if the sets share no value.
    #[must_use]
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.bits & other.bits == 0
    }
}

impl<S> BitSet9<S>
where
    S: Index9Semantics,
{
    /// Creates a set containing a single value.
    #[must_use]
    pub fn from_elem(value: S::Value) -> Self {
        Self::from_bits_unchecked(S::to_index(value).bit())
    }

    /// Inserts a value, returning `true` if it was not already present.
    pub fn insert(&mut self, value: S::Value) -> bool {
        let bit = S::to_index(value).bit();
        let inserted = self.bits & bit == 0;
        self.bits |= bit;
        inserted
    }

    /// Removes a value, returning `true` if it was present.
    pub fn remove(&mut self, value: S::Value) -> bool {
        let bit = S::to_index(value).bit();
        let removed = self.bits & bit != 0;
        self.bits &= !bit;
        removed
    }

    /// Returns `true` if the set contains the value.
    #[must_use]
    pub fn contains(&self, value: S::Value) -> bool {
        self.bits & S::to_index(value).bit() != 0
    }

    /// Returns the only value of the set, or `None` unless it has exactly one.
    #[must_use]
    pub fn as_single(&self) -> Option<S::Value> {
        if self.len() == 1 { self.iter().next() } else { None }
    }

    /// Returns an iterator over the values in index order.
    #[must_use]
    pub fn iter(&self) -> Iter<S> {
        Iter {
            bits: self.bits,
            _semantics: PhantomData,
        }
    }
}

impl<S> Clone for BitSet9<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for BitSet9<S> {}

impl<S> Default for BitSet9<S> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<S> PartialEq for BitSet9<S> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<S> Eq for BitSet9<S> {}

impl<S> Hash for BitSet9<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<S> fmt::Debug for BitSet9<S>
where
    S: Index9Semantics,
    S::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<S> BitOr for BitSet9<S> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<S> BitOrAssign for BitSet9<S> {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl<S> BitAnd for BitSet9<S> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<S> BitAndAssign for BitSet9<S> {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersection(rhs);
    }
}

impl<S> Sub for BitSet9<S> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs)
    }
}

impl<S> SubAssign for BitSet9<S> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.difference(rhs);
    }
}

impl<S> Not for BitSet9<S> {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::FULL.difference(self)
    }
}

impl<S> FromIterator<S::Value> for BitSet9<S>
where
    S: Index9Semantics,
{
    fn from_iter<T: IntoIterator<Item = S::Value>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S> Extend<S::Value> for BitSet9<S>
where
    S: Index9Semantics,
{
    fn extend<T: IntoIterator<Item = S::Value>>(&mut self, iter: T) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<S> IntoIterator for BitSet9<S>
where
    S: Index9Semantics,
{
    type Item = S::Value;
    type IntoIter = Iter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S> IntoIterator for &BitSet9<S>
where
    S: Index9Semantics,
{
    type Item = S::Value;
    type IntoIter = Iter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the values of a [`BitSet9`], in index order.
pub struct Iter<S> {
    bits: u16,
    _semantics: PhantomData<S>,
}

impl<S> fmt::Debug for Iter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("bits", &self.bits).finish()
    }
}

impl<S> Clone for Iter<S> {
    fn clone(&self) -> Self {
        Self {
            bits: self.bits,
            _semantics: PhantomData,
        }
    }
}

impl<S> Iterator for Iter<S>
where
    S: Index9Semantics,
{
    type Item = S::Value;

    #[expect(clippy::cast_possible_truncation)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(S::from_index(Index9::new(index)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl<S> DoubleEndedIterator for Iter<S>
where
    S: Index9Semantics,
{
    #[expect(clippy::cast_possible_truncation)]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let index = (15 - self.bits.leading_zeros()) as u8;
        self.bits &= !(1 << index);
        Some(S::from_index(Index9::new(index)))
    }
}

impl<S> ExactSizeIterator for Iter<S> where S: Index9Semantics {}
impl<S> FusedIterator for Iter<S> where S: Index9Semantics {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::CellIndexSemantics;

    type CellSet = BitSet9<CellIndexSemantics>;

    #[test]
    fn test_insert_remove() {
        let mut set = CellSet::new();
        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert!(set.contains(3));
        assert!(set.remove(3));
        assert!(!set.remove(3));
        assert!(set.is_empty());
    }

    #[test]
    fn test_iteration_both_ends() {
        let set = CellSet::from_iter([7, 0, 4]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 4, 7]);
        assert_eq!(set.iter().rev().collect::<Vec<_>>(), vec![7, 4, 0]);
        assert_eq!(set.iter().len(), 3);
    }

    #[test]
    fn test_not_stays_within_nine_bits() {
        let set = CellSet::from_iter([0, 1]);
        assert_eq!((!set).len(), 7);
        assert_eq!((!CellSet::EMPTY), CellSet::FULL);
        assert_eq!((!CellSet::FULL), CellSet::EMPTY);
    }

    #[test]
    fn test_as_single() {
        assert_eq!(CellSet::from_elem(5).as_single(), Some(5));
        assert_eq!(CellSet::EMPTY.as_single(), None);
        assert_eq!(CellSet::from_iter([1, 2]).as_single(), None);
    }

    #[test]
    fn test_subset_and_disjoint() {
        let a = CellSet::from_iter([1, 2]);
        let b = CellSet::from_iter([1, 2, 3]);
        assert!(a.is_subset(b));
        assert!(!b.is_subset(a));
        assert!(a.is_disjoint(CellSet::from_elem(8)));
        assert!(!a.is_disjoint(b));
    }
}
