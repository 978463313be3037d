//! Knuth-Morris-Pratt matching.
//!
//! Builds the [`LpsTable`] once and scans the text without ever moving
//! backwards in it: O(n + m).

use crate::lps::LpsTable;

/// Finds the first occurrence of `pattern` in `text`.
///
/// An empty pattern matches at offset 0 before any table is built, so the
/// scan never reads `pattern[0]` of an empty slice.
///
/// # Examples
///
/// ```
/// use strsearch::kmp;
///
/// assert_eq!(kmp::find(b"aaaaaaaaab", b"aaab"), Some(6));
/// assert_eq!(kmp::find(b"", b""), Some(0));
/// ```
pub fn find<T: PartialEq>(text: &[T], pattern: &[T]) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return Some(0);
    }
    if m > n {
        return None;
    }

    let lps = LpsTable::build(pattern);

    let mut i = 0;
    let mut j = 0;
    while i < n {
        if pattern[j] == text[i] {
            i += 1;
            j += 1;
            // Checked before pattern[j] is touched again.
            if j == m {
                return Some(i - j);
            }
        } else if j != 0 {
            j = lps.fallback(j);
        } else {
            i += 1;
        }
    }

    None
}
