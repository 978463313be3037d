//! Boyer-Moore matching.
//!
//! Each alignment is compared right to left. On a mismatch at pattern index
//! `j` the pattern moves by the larger of two proposals:
//!
//! - bad character: `j - last_index(text[s + j])`
//! - good suffix: `j - borders[j + 1]` from the [`BorderTable`], capped by
//!   the [`StrongSuffixTable`] shift for the same mismatch
//!
//! and never by less than one position. The cap only fires when the border
//! table proposes a shift that could jump over an occurrence; that is logged
//! at `debug` level.
//!
//! Sub-linear on large alphabets, degrading towards O(n·m) on small
//! alphabets and highly repetitive patterns.

use crate::bad_char::{BadCharTable, ByteBadCharTable, LastOccurrence};
use crate::good_suffix::{BorderTable, StrongSuffixTable};
use std::hash::Hash;

/// Finds the first occurrence of `pattern` in `text` for any hashable
/// symbol type.
///
/// # Examples
///
/// ```
/// use strsearch::boyer_moore;
///
/// let text: Vec<char> = "abxabcabcaby".chars().collect();
/// let pattern: Vec<char> = "abcaby".chars().collect();
/// assert_eq!(boyer_moore::find(&text, &pattern), Some(6));
/// ```
pub fn find<T: Eq + Hash>(text: &[T], pattern: &[T]) -> Option<usize> {
    if pattern.is_empty() {
        return Some(0);
    }
    if pattern.len() > text.len() {
        return None;
    }

    let bad_char = BadCharTable::build(pattern);
    search_with(text, pattern, &bad_char)
}

/// Byte-alphabet variant of [`find`] using a flat 256-entry bad-character
/// table instead of a hash map.
///
/// ```
/// use strsearch::boyer_moore;
///
/// assert_eq!(boyer_moore::find_bytes(b"aaaaaaaaab", b"aaab"), Some(6));
/// ```
pub fn find_bytes(text: &[u8], pattern: &[u8]) -> Option<usize> {
    if pattern.is_empty() {
        return Some(0);
    }
    if pattern.len() > text.len() {
        return None;
    }

    let bad_char = ByteBadCharTable::build(pattern);
    search_with(text, pattern, &bad_char)
}

/// Core scan shared by both front ends. Requires `1 <= m <= n`.
fn search_with<T, B>(text: &[T], pattern: &[T], bad_char: &B) -> Option<usize>
where
    T: PartialEq,
    B: LastOccurrence<T>,
{
    let n = text.len();
    let m = pattern.len();

    let borders = BorderTable::build(pattern);
    let strong = StrongSuffixTable::build(pattern);

    let mut s = 0;
    while s <= n - m {
        let mut j = m;
        while j > 0 && pattern[j - 1] == text[s + j - 1] {
            j -= 1;
        }
        if j == 0 {
            return Some(s);
        }

        // Mismatch at pattern index j - 1.
        let mismatch = j - 1;
        let bc_shift = mismatch as isize - bad_char.last_index(&text[s + mismatch]);
        let border_shift = borders.shift(mismatch);
        let safe_shift = strong.shift(mismatch) as isize;

        if border_shift > safe_shift {
            tracing::debug!(
                alignment = s,
                mismatch,
                border_shift,
                safe_shift,
                "border table shift capped by strong good-suffix shift"
            );
        }

        let shift = bc_shift.max(border_shift.min(safe_shift)).max(1);
        s += shift as usize;
    }

    None
}
