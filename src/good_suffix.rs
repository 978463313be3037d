//! Good-suffix tables for Boyer-Moore.
//!
//! [`BorderTable`] is the simplified two-pass border array the matcher's
//! shift arithmetic (`j - borders[j + 1]`) is defined over. It only
//! approximates the classical good-suffix rule: for periodic patterns over
//! small alphabets it can suggest shifts that are not positive, or that jump
//! over a real occurrence.
//!
//! [`StrongSuffixTable`] is the classical strong good-suffix shift table.
//! The matcher caps the border shift with it so every shift is safe.

/// Suffix lengths used by the border table.
///
/// `suffixes[m - i - 1]` is the length of the longest suffix of
/// `pattern[..=i]` that is also a suffix of the whole pattern, computed by
/// comparing `pattern[j]` with `pattern[j - m + i + 1]` while walking `j`
/// down from `i`. A negative right-hand index wraps around to the end of the
/// pattern.
pub fn suffix_lengths<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    let m = pattern.len();
    let mut suffixes = vec![0; m];

    for i in (0..m).rev() {
        let offset = (m - 1 - i) as isize;
        let mut j = i as isize;
        while j >= 0 {
            let mut k = j - offset;
            if k < 0 {
                k += m as isize;
            }
            if pattern[j as usize] != pattern[k as usize] {
                break;
            }
            j -= 1;
        }
        suffixes[m - i - 1] = (i as isize - j) as usize;
    }

    suffixes
}

/// Border array of length `m + 1`; unset entries are `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderTable {
    borders: Vec<usize>,
}

impl BorderTable {
    /// Builds the table: `borders[m - suffixes[i]] = i` for `i` in `0..m`.
    ///
    /// # Examples
    ///
    /// ```
    /// use strsearch::good_suffix::BorderTable;
    ///
    /// assert_eq!(BorderTable::build(b"aaab").as_slice(), &[0, 0, 1, 3, 2]);
    /// ```
    pub fn build<T: PartialEq>(pattern: &[T]) -> Self {
        let m = pattern.len();
        let suffixes = suffix_lengths(pattern);
        let mut borders = vec![0; m + 1];

        for (i, &len) in suffixes.iter().enumerate() {
            borders[m - len] = i;
        }

        tracing::trace!(len = m, "built border table");
        Self { borders }
    }

    /// The raw border values.
    pub fn as_slice(&self) -> &[usize] {
        &self.borders
    }

    /// Good-suffix shift proposed after a mismatch at pattern index
    /// `mismatch`. May be zero or negative.
    #[inline]
    pub fn shift(&self, mismatch: usize) -> isize {
        mismatch as isize - self.borders[mismatch + 1] as isize
    }
}

/// Classical strong good-suffix shifts, length `m + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrongSuffixTable {
    shift: Vec<usize>,
}

impl StrongSuffixTable {
    /// Builds the table from the border positions of each pattern suffix.
    ///
    /// # Examples
    ///
    /// ```
    /// use strsearch::good_suffix::StrongSuffixTable;
    ///
    /// assert_eq!(StrongSuffixTable::build(b"aaab").as_slice(), &[4, 4, 4, 4, 1]);
    /// ```
    pub fn build<T: PartialEq>(pattern: &[T]) -> Self {
        let m = pattern.len();
        let mut shift = vec![0usize; m + 1];
        let mut border_pos = vec![0usize; m + 1];

        // Case 1: the matched suffix reoccurs inside the pattern preceded by
        // a different symbol.
        let mut i = m;
        let mut j = m + 1;
        border_pos[i] = j;
        while i > 0 {
            while j <= m && pattern[i - 1] != pattern[j - 1] {
                if shift[j] == 0 {
                    shift[j] = j - i;
                }
                j = border_pos[j];
            }
            i -= 1;
            j -= 1;
            border_pos[i] = j;
        }

        // Case 2: only a prefix of the pattern matches a suffix of the
        // matched part.
        j = border_pos[0];
        for (i, value) in shift.iter_mut().enumerate() {
            if *value == 0 {
                *value = j;
            }
            if i == j {
                j = border_pos[j];
            }
        }

        tracing::trace!(len = m, "built strong good-suffix table");
        Self { shift }
    }

    /// The raw shift values.
    pub fn as_slice(&self) -> &[usize] {
        &self.shift
    }

    /// Largest safe shift after a mismatch at pattern index `mismatch`.
    /// Always at least 1.
    #[inline]
    pub fn shift(&self, mismatch: usize) -> usize {
        self.shift[mismatch + 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_lengths() {
        assert_eq!(suffix_lengths(b"abcaby"), vec![6, 0, 0, 0, 0, 0]);
        assert!(suffix_lengths::<u8>(&[]).is_empty());
    }

    #[test]
    fn test_suffix_lengths_wraps_negative_index() {
        // For i = 0 in "aaab" the comparison index starts at -3, which wraps
        // to pattern[1] and matches, giving suffixes[3] = 1.
        assert_eq!(suffix_lengths(b"aaab"), vec![4, 2, 0, 1]);
        assert_eq!(suffix_lengths(b"aba"), vec![3, 0, 0]);
    }

    #[test]
    fn test_border_table_values() {
        assert_eq!(BorderTable::build(b"abcaby").as_slice(), &[0, 0, 0, 0, 0, 0, 5]);
        assert_eq!(BorderTable::build(b"aaab").as_slice(), &[0, 0, 1, 3, 2]);
        assert_eq!(
            BorderTable::build(b"aabaabaaa").as_slice(),
            &[0, 0, 0, 0, 0, 0, 6, 4, 8, 0]
        );
    }

    #[test]
    fn test_border_table_empty_pattern() {
        assert_eq!(BorderTable::build::<u8>(&[]).as_slice(), &[0]);
    }

    #[test]
    fn test_border_shift_can_be_non_positive() {
        // "aaab": mismatch at j = 2 reads borders[3] = 3, giving -1.
        let table = BorderTable::build(b"aaab");
        assert_eq!(table.shift(2), -1);
        assert_eq!(table.shift(3), 1);
    }

    #[test]
    fn test_strong_table_values() {
        assert_eq!(
            StrongSuffixTable::build(b"abcaby").as_slice(),
            &[6, 6, 6, 6, 6, 6, 1]
        );
        assert_eq!(StrongSuffixTable::build(b"aaab").as_slice(), &[4, 4, 4, 4, 1]);
    }

    #[test]
    fn test_strong_table_periodic() {
        // Period 2: after matching "ab" the pattern can only move by 2.
        let table = StrongSuffixTable::build(b"abab");
        assert_eq!(table.shift(1), 2);
        assert_eq!(table.shift(3), 1);
    }

    #[test]
    fn test_strong_shifts_positive() {
        for pattern in [&b"a"[..], b"aa", b"abcab", b"aabaabaaa", b"abacabad"] {
            let table = StrongSuffixTable::build(pattern);
            assert!(
                table.as_slice().iter().all(|&s| s >= 1),
                "non-positive shift for {:?}",
                pattern
            );
        }
    }
}
