//! strsearch - Exact Single-Pattern String Matching
//!
//! Finds the first (leftmost) occurrence of a pattern inside a text with one
//! of three classic strategies:
//!
//! - **Brute force**: tries every alignment, no preprocessing
//! - **Knuth-Morris-Pratt**: LPS failure table, never re-reads the text
//! - **Boyer-Moore**: right-to-left comparison with bad-character and
//!   good-suffix shifts
//!
//! Matchers work on any slice of comparable symbols (`u8`, `char`, `u32`,
//! `&str` tokens, ...). A pattern that does not occur yields `None`; callers
//! that want the `-1` convention use [`algorithm::to_offset`].
//!
//! # Quick Start
//!
//! ```rust
//! use strsearch::{Algorithm, to_offset};
//!
//! let text = b"abxabcabcaby";
//! let pattern = b"abcaby";
//!
//! for algo in Algorithm::ALL {
//!     assert_eq!(algo.find_bytes(text, pattern), Some(6));
//! }
//!
//! // Empty patterns match at offset 0, absent ones report -1.
//! assert_eq!(strsearch::kmp::find(b"", b""), Some(0));
//! assert_eq!(to_offset(strsearch::boyer_moore::find_bytes(b"aaaa", b"b")), -1);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────────────────────────────────┐
//! │ brute_force  │   │ boyer_moore                              │
//! └──────────────┘   │   ├─ bad_char    (last occurrence/symbol)│
//! ┌──────────────┐   │   └─ good_suffix (border + strong shifts)│
//! │ kmp          │   └──────────────────────────────────────────┘
//! │   └─ lps     │
//! └──────────────┘
//! ```
//!
//! Every call builds its own tables and shares nothing, so matchers can be
//! called from many threads at once without locking.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Algorithm selection and offset conventions
pub mod algorithm;
pub mod bad_char;
pub mod boyer_moore;
pub mod brute_force;
/// Error types for strsearch operations
pub mod error;
pub mod good_suffix;
pub mod kmp;
pub mod lps;

// Re-exports for Rust consumers

pub use crate::algorithm::{to_offset, Algorithm, NOT_FOUND};
pub use crate::error::SearchError;

// Version information
/// Library version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_reexports() {
        assert_eq!(to_offset(Algorithm::Kmp.find_bytes(b"hello", b"llo")), 2);
        assert_eq!(NOT_FOUND, -1);
    }
}
