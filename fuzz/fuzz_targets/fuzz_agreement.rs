#![no_main]
use libfuzzer_sys::fuzz_target;
use strsearch::Algorithm;

fuzz_target!(|data: &[u8]| {
    // First byte picks the pattern length, the rest is pattern then text
    if data.is_empty() {
        return;
    }

    let split_point = (data[0] as usize % 16).min(data.len() - 1);
    let pattern = &data[1..1 + split_point];
    let text = &data[1 + split_point..];

    let expected = if pattern.is_empty() {
        Some(0)
    } else {
        text.windows(pattern.len()).position(|w| w == pattern)
    };

    for algo in Algorithm::ALL {
        assert_eq!(algo.find_bytes(text, pattern), expected, "{}", algo);
        assert_eq!(algo.find(text, pattern), expected, "{} (generic)", algo);
    }
});
