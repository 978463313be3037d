//! Bad-character tables for Boyer-Moore.
//!
//! Both tables record, for every symbol, the last index at which it occurs
//! in the pattern. Symbols that never occur report `-1`, so the shift
//! `j - last_index(symbol)` moves the whole pattern past the mismatch.
//!
//! - [`BadCharTable`] works for any `Eq + Hash` symbol through an
//!   `FxHashMap`.
//! - [`ByteBadCharTable`] is a flat 256-entry array for byte alphabets.

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Last-occurrence lookup used by the bad-character rule.
pub trait LastOccurrence<T> {
    /// Highest index of `symbol` in the pattern, or `-1` if absent.
    fn last_index(&self, symbol: &T) -> isize;
}

/// Hash-map backed table for unbounded alphabets.
#[derive(Debug, Clone)]
pub struct BadCharTable<'p, T> {
    last: FxHashMap<&'p T, usize>,
}

impl<'p, T: Eq + Hash> BadCharTable<'p, T> {
    /// Builds the table with a single left-to-right pass; later occurrences
    /// overwrite earlier ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use strsearch::bad_char::{BadCharTable, LastOccurrence};
    ///
    /// let pattern = ['a', 'b', 'c', 'a', 'b', 'y'];
    /// let table = BadCharTable::build(&pattern);
    /// assert_eq!(table.last_index(&'a'), 3);
    /// assert_eq!(table.last_index(&'z'), -1);
    /// ```
    pub fn build(pattern: &'p [T]) -> Self {
        let mut last =
            FxHashMap::with_capacity_and_hasher(pattern.len(), Default::default());
        for (i, symbol) in pattern.iter().enumerate() {
            last.insert(symbol, i);
        }
        tracing::trace!(len = pattern.len(), distinct = last.len(), "built bad-character table");
        Self { last }
    }

    /// Number of distinct symbols in the pattern.
    pub fn distinct_symbols(&self) -> usize {
        self.last.len()
    }
}

impl<T: Eq + Hash> LastOccurrence<T> for BadCharTable<'_, T> {
    #[inline]
    fn last_index(&self, symbol: &T) -> isize {
        self.last.get(symbol).map_or(-1, |&i| i as isize)
    }
}

/// Array backed table for byte patterns.
#[derive(Debug, Clone)]
pub struct ByteBadCharTable {
    last: [isize; 256],
}

impl ByteBadCharTable {
    /// Builds the table; bytes not in the pattern stay at `-1`.
    pub fn build(pattern: &[u8]) -> Self {
        let mut last = [-1isize; 256];
        for (i, &b) in pattern.iter().enumerate() {
            last[b as usize] = i as isize;
        }
        Self { last }
    }
}

impl LastOccurrence<u8> for ByteBadCharTable {
    #[inline]
    fn last_index(&self, symbol: &u8) -> isize {
        self.last[*symbol as usize]
    }
}
