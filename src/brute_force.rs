//! Naive (brute-force) matching.
//!
//! Tries every alignment from left to right and compares the pattern
//! symbol by symbol. No preprocessing, O(n·m) worst case, O(n) when
//! mismatches happen on the first symbol.

/// Finds the first occurrence of `pattern` in `text`.
///
/// Returns the zero-based offset of the leftmost match, `Some(0)` for an
/// empty pattern, and `None` when the pattern is absent or longer than the
/// text.
///
/// # Examples
///
/// ```
/// use strsearch::brute_force;
///
/// assert_eq!(brute_force::find(b"abxabcabcaby", b"abcaby"), Some(6));
/// assert_eq!(brute_force::find(b"hello", b"world"), None);
/// ```
pub fn find<T: PartialEq>(text: &[T], pattern: &[T]) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();

    if m > n {
        return None;
    }

    for i in 0..=n - m {
        let mut j = 0;
        while j < m && pattern[j] == text[i + j] {
            j += 1;
        }
        if j == m {
            return Some(i);
        }
    }

    None
}
