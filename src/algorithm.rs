//! Algorithm selection and the `-1` offset convention.

use crate::error::SearchError;
use crate::{boyer_moore, brute_force, kmp};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// Offset reported when the pattern does not occur in the text.
pub const NOT_FOUND: isize = -1;

/// Converts a match result into a zero-based offset, or [`NOT_FOUND`].
///
/// ```
/// use strsearch::algorithm::{to_offset, NOT_FOUND};
///
/// assert_eq!(to_offset(Some(6)), 6);
/// assert_eq!(to_offset(None), NOT_FOUND);
/// ```
pub fn to_offset(result: Option<usize>) -> isize {
    result.map_or(NOT_FOUND, |i| i as isize)
}

/// The available matching strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Naive scan of every alignment
    BruteForce,
    /// Knuth-Morris-Pratt with an LPS failure table
    Kmp,
    /// Boyer-Moore with bad-character and good-suffix tables
    BoyerMoore,
}

impl Algorithm {
    /// Every algorithm, in the order they are reported.
    pub const ALL: [Algorithm; 3] = [Algorithm::BruteForce, Algorithm::Kmp, Algorithm::BoyerMoore];

    /// Machine-readable name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BruteForce => "brute-force",
            Algorithm::Kmp => "kmp",
            Algorithm::BoyerMoore => "boyer-moore",
        }
    }

    /// Human-readable label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::BruteForce => "Brute Force",
            Algorithm::Kmp => "KMP",
            Algorithm::BoyerMoore => "Boyer Moore",
        }
    }

    /// Finds the first occurrence of `pattern` in `text`.
    pub fn find<T: Eq + Hash>(self, text: &[T], pattern: &[T]) -> Option<usize> {
        match self {
            Algorithm::BruteForce => brute_force::find(text, pattern),
            Algorithm::Kmp => kmp::find(text, pattern),
            Algorithm::BoyerMoore => boyer_moore::find(text, pattern),
        }
    }

    /// Byte specialisation of [`Algorithm::find`].
    pub fn find_bytes(self, text: &[u8], pattern: &[u8]) -> Option<usize> {
        match self {
            Algorithm::BoyerMoore => boyer_moore::find_bytes(text, pattern),
            other => other.find(text, pattern),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "brute-force" | "bruteforce" | "naive" | "bf" => Ok(Algorithm::BruteForce),
            "kmp" | "knuth-morris-pratt" => Ok(Algorithm::Kmp),
            "boyer-moore" | "boyermoore" | "bm" => Ok(Algorithm::BoyerMoore),
            _ => Err(SearchError::InvalidAlgorithm(format!(
                "'{}' (expected brute-force, kmp or boyer-moore)",
                s
            ))),
        }
    }
}
