use rand::Rng;

/// Random text of `size` symbols drawn uniformly from `alphabet`, as UTF-8
/// bytes. Multi-byte symbols make the byte length larger than `size`.
pub fn generate_text<R: Rng>(rng: &mut R, alphabet: &[char], size: usize) -> Vec<u8> {
    let mut text = String::with_capacity(size);
    for _ in 0..size {
        text.push(alphabet[rng.random_range(0..alphabet.len())]);
    }
    text.into_bytes()
}

/// Per-size seed so each text is reproducible regardless of the order
/// (or thread) sizes are benchmarked in.
pub fn text_seed(seed: u64, size: usize) -> u64 {
    seed ^ (size as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_text_uses_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        let text = generate_text(&mut rng, &['x', 'y'], 500);
        assert_eq!(text.len(), 500);
        assert!(text.iter().all(|&b| b == b'x' || b == b'y'));
    }

    #[test]
    fn test_generate_text_reproducible() {
        let alphabet: Vec<char> = "abcdefghijklmnopqrstuvwxyz".chars().collect();
        let a = generate_text(&mut StdRng::seed_from_u64(1), &alphabet, 64);
        let b = generate_text(&mut StdRng::seed_from_u64(1), &alphabet, 64);
        assert_eq!(a, b);
    }

    #[test]
    fn test_multibyte_alphabet() {
        let mut rng = StdRng::seed_from_u64(3);
        let text = generate_text(&mut rng, &['é'], 4);
        assert_eq!(text, "éééé".as_bytes());
    }

    #[test]
    fn test_text_seed_varies_by_size() {
        assert_ne!(text_seed(42, 100), text_seed(42, 600));
        assert_eq!(text_seed(42, 0), 42);
    }
}
