//! Longest proper prefix that is also a suffix (LPS) table.
//!
//! `lps[i]` is the length of the longest proper prefix of `pattern[..=i]`
//! that is also a suffix of it. KMP uses it to resume after a mismatch
//! without moving backwards in the text.

/// Failure function for a single pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LpsTable {
    values: Vec<usize>,
}

impl LpsTable {
    /// Builds the table in O(m).
    ///
    /// An empty pattern yields an empty table.
    ///
    /// # Examples
    ///
    /// ```
    /// use strsearch::lps::LpsTable;
    ///
    /// let table = LpsTable::build(b"aabaabaaa");
    /// assert_eq!(table.as_slice(), &[0, 1, 0, 1, 2, 3, 4, 5, 2]);
    /// ```
    pub fn build<T: PartialEq>(pattern: &[T]) -> Self {
        let m = pattern.len();
        let mut values = vec![0; m];

        // i: current position, j: length of the prefix matched so far
        let mut i = 1;
        let mut j = 0;

        while i < m {
            if pattern[i] == pattern[j] {
                j += 1;
                values[i] = j;
                i += 1;
            } else if j != 0 {
                // Retry with the next shorter border, keep i.
                j = values[j - 1];
            } else {
                values[i] = 0;
                i += 1;
            }
        }

        tracing::trace!(len = m, "built LPS table");
        Self { values }
    }

    /// Table length, equal to the pattern length.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true for the table of an empty pattern.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The raw LPS values.
    pub fn as_slice(&self) -> &[usize] {
        &self.values
    }

    /// Length to fall back to after `matched` symbols matched and the next
    /// one did not.
    ///
    /// `matched` must be in `1..=len()`.
    pub fn fallback(&self, matched: usize) -> usize {
        self.values[matched - 1]
    }
}
