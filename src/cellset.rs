//! Compact cell set for map grids.
//!
//! Maps never exceed 16 cells, so a set of cells fits into a single `u16` word where
//! bit `i` stands for the cell at row-major index `i`. Coverage checks become plain
//! mask arithmetic.

use std::fmt;

/// A set of row-major cell indices backed by a single word.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct CellSet {
    word: u16,
}

impl CellSet {
    /// Maximum number of cells a set can hold.
    pub const CAPACITY: usize = 16;

    /// Creates an empty set.
    pub const fn empty() -> Self {
        Self { word: 0 }
    }

    /// Creates a set containing indices `0..len`.
    pub fn full(len: usize) -> Self {
        assert!(len <= Self::CAPACITY, "CellSet holds at most 16 cells");
        let word = if len == Self::CAPACITY {
            u16::MAX
        } else {
            (1u16 << len) - 1
        };
        Self { word }
    }

    /// Returns the number of cells in the set.
    #[inline]
    pub fn len(self) -> usize {
        self.word.count_ones() as usize
    }

    /// Returns true if the set has no cells.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.word == 0
    }

    /// Returns true if the cell at the given index is in the set.
    #[inline]
    pub fn contains(self, index: usize) -> bool {
        index < Self::CAPACITY && (self.word >> index) & 1 == 1
    }

    /// Adds a cell. Returns true if it was not already present.
    #[inline]
    pub fn insert(&mut self, index: usize) -> bool {
        assert!(index < Self::CAPACITY, "CellSet holds at most 16 cells");
        let mask = 1u16 << index;
        let was_clear = self.word & mask == 0;
        self.word |= mask;
        was_clear
    }

    /// Returns true if every cell of `self` is also in `other`.
    #[inline]
    pub fn is_subset(self, other: CellSet) -> bool {
        self.word & !other.word == 0
    }

    /// Returns the cells present in either set.
    #[inline]
    pub fn union(self, other: CellSet) -> CellSet {
        CellSet {
            word: self.word | other.word,
        }
    }

    /// Returns an iterator over the cell indices in ascending order.
    pub fn iter(self) -> CellSetIter {
        CellSetIter { word: self.word }
    }
}

impl FromIterator<usize> for CellSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = CellSet::empty();
        for index in iter {
            set.insert(index);
        }
        set
    }
}

impl fmt::Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the indices in a [`CellSet`].
pub struct CellSetIter {
    word: u16,
}

impl Iterator for CellSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.word == 0 {
            return None;
        }
        let index = self.word.trailing_zeros() as usize;
        self.word &= self.word - 1; // Clear lowest set bit
        Some(index)
    }
}
