//! A set of cell values, optimized for candidate tracking.

use std::iter::FusedIterator;

/// The largest cell value a [`ValueSet`] can hold.
///
/// Boards are limited to box size 5 (25x25 grids), so values never exceed 25.
pub const MAX_VALUE: u8 = 25;

/// A set of cell values in the range `1..=MAX_VALUE`, backed by a bitmask.
///
/// Used for candidate sets and duplicate detection. Iteration yields values in
/// ascending order, which fixes the candidate enumeration order during search.
///
/// # Examples
///
/// ```
/// use numforge_core::ValueSet;
///
/// let mut set = ValueSet::EMPTY;
/// set.insert(1);
/// set.insert(5);
/// set.insert(9);
///
/// assert_eq!(set.len(), 3);
/// assert!(set.contains(5));
/// assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 5, 9]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ValueSet(u32);

impl ValueSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Creates the set containing every value `1..=size`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is `0` or greater than [`MAX_VALUE`].
    #[must_use]
    pub fn full(size: usize) -> Self {
        assert!(
            (1..=MAX_VALUE as usize).contains(&size),
            "board size must be between 1 and {MAX_VALUE}, got {size}"
        );
        Self(((1 << size) - 1) << 1)
    }

    fn check(value: u8) {
        assert!(
            (1..=MAX_VALUE).contains(&value),
            "value must be between 1 and {MAX_VALUE}, got {value}"
        );
    }

    /// Adds a value to the set.
    ///
    /// # Panics
    ///
    /// Panics if `value` is outside `1..=MAX_VALUE`.
    pub fn insert(&mut self, value: u8) {
        Self::check(value);
        self.0 |= 1 << value;
    }

    /// Removes a value from the set.
    ///
    /// # Panics
    ///
    /// Panics if `value` is outside `1..=MAX_VALUE`.
    pub fn remove(&mut self, value: u8) {
        Self::check(value);
        self.0 &= !(1 << value);
    }

    /// Returns `true` if the set contains `value`.
    #[must_use]
    pub const fn contains(self, value: u8) -> bool {
        value >= 1 && value <= MAX_VALUE && self.0 & (1 << value) != 0
    }

    /// Returns the number of values in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set contains no values.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the values in `self` that are not in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use numforge_core::ValueSet;
    ///
    /// let a = ValueSet::from_iter([1, 2, 3]);
    /// let b = ValueSet::from_iter([2, 3, 4]);
    /// assert_eq!(a.difference(b), ValueSet::from_iter([1]));
    /// ```
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns the values present in both sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the values present in either set.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns an iterator over the values in ascending order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl FromIterator<u8> for ValueSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl IntoIterator for ValueSet {
    type Item = u8;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the values of a [`ValueSet`], in ascending order.
#[derive(Debug, Clone)]
pub struct Iter(u32);

impl Iterator for Iter {
    type Item = u8;

    #[expect(clippy::cast_possible_truncation)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let value = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}
