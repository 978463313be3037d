//! Property tests: all algorithms agree with a slice-window reference,
//! report the leftmost occurrence, and build well-formed tables.

use proptest::prelude::*;
use strsearch::good_suffix::{BorderTable, StrongSuffixTable};
use strsearch::lps::LpsTable;
use strsearch::Algorithm;

/// Leftmost offset via slice windows, independent of the matchers.
fn reference(text: &[u8], pattern: &[u8]) -> Option<usize> {
    if pattern.is_empty() {
        return Some(0);
    }
    text.windows(pattern.len()).position(|w| w == pattern)
}

/// Bytes over a small alphabet, where periodic patterns are common.
fn small_alphabet(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c']), 0..max_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    #[test]
    fn agreement_small_alphabet(text in small_alphabet(64), pattern in small_alphabet(8)) {
        let expected = reference(&text, &pattern);
        for algo in Algorithm::ALL {
            prop_assert_eq!(algo.find(&text, &pattern), expected, "{}", algo);
            prop_assert_eq!(algo.find_bytes(&text, &pattern), expected, "{} (bytes)", algo);
        }
    }

    #[test]
    fn agreement_any_bytes(text in prop::collection::vec(any::<u8>(), 0..256),
                           pattern in prop::collection::vec(any::<u8>(), 0..6)) {
        let expected = reference(&text, &pattern);
        for algo in Algorithm::ALL {
            prop_assert_eq!(algo.find_bytes(&text, &pattern), expected, "{}", algo);
        }
    }

    #[test]
    fn planted_pattern_is_found(prefix in small_alphabet(40),
                                pattern in small_alphabet(10),
                                suffix in small_alphabet(40)) {
        let mut text = prefix.clone();
        text.extend_from_slice(&pattern);
        text.extend_from_slice(&suffix);

        for algo in Algorithm::ALL {
            let found = algo.find_bytes(&text, &pattern);
            prop_assert!(found.is_some());
            let i = found.unwrap();
            // Round trip, and leftmost: never after the planted copy.
            prop_assert_eq!(&text[i..i + pattern.len()], &pattern[..]);
            prop_assert!(i <= prefix.len());
        }
    }

    #[test]
    fn longer_pattern_never_matches(text in small_alphabet(16), extra in 1usize..8) {
        let pattern = vec![b'a'; text.len() + extra];
        for algo in Algorithm::ALL {
            prop_assert_eq!(algo.find_bytes(&text, &pattern), None);
        }
    }

    #[test]
    fn lps_entries_are_proper_borders(pattern in small_alphabet(32)) {
        let lps = LpsTable::build(&pattern);
        prop_assert_eq!(lps.len(), pattern.len());
        for (i, &len) in lps.as_slice().iter().enumerate() {
            prop_assert!(len <= i);
            prop_assert_eq!(&pattern[..len], &pattern[i + 1 - len..=i]);
        }
    }

    #[test]
    fn suffix_tables_have_expected_shape(pattern in small_alphabet(32)) {
        let m = pattern.len();
        let borders = BorderTable::build(&pattern);
        prop_assert_eq!(borders.as_slice().len(), m + 1);
        prop_assert!(borders.as_slice().iter().all(|&b| b < m.max(1)));

        let strong = StrongSuffixTable::build(&pattern);
        prop_assert_eq!(strong.as_slice().len(), m + 1);
        if m > 0 {
            prop_assert!(strong.as_slice().iter().all(|&s| s >= 1 && s <= m));
        }
    }
}
