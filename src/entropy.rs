//! Entropy measurement for display.

/// Empirical Shannon entropy in bits per symbol over the bytes actually
/// present in `data`. Empty input is 0.0.
pub fn shannon(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let mut freq = [0usize; 256];
    for &byte in data {
        freq[byte as usize] += 1;
    }

    let len = data.len() as f64;
    let mut entropy = 0.0;

    for &count in &freq {
        if count > 0 {
            let p = count as f64 / len;
            entropy -= p * p.log2();
        }
    }

    // a single repeated byte leaves -0.0
    if entropy <= 0.0 {
        0.0
    } else {
        entropy
    }
}

/// Upper bound in bits for `length` uniform draws from `alphabet_size` symbols.
pub fn theoretical_bits(length: usize, alphabet_size: usize) -> f64 {
    if alphabet_size == 0 {
        return 0.0;
    }
    length as f64 * (alphabet_size as f64).log2()
}

/// Strength label for a bit count.
pub fn strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}
