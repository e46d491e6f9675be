//! Entropy estimate for a uniformly sampled password.

/// Password entropy in bits.
pub fn bits(password_length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    password_length as f64 * (pool_size as f64).log2()
}

/// Strength label for an entropy value.
pub fn strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pool_has_no_entropy() {
        assert_eq!(bits(16, 0), 0.0);
    }

    #[test]
    fn digits_only() {
        let b = bits(10, 10);
        assert!((b - 33.219).abs() < 0.01);
        assert_eq!(strength(b), "Weak");
    }

    #[test]
    fn full_pool_strength() {
        // 16 * log2(86) ~= 102.8
        assert_eq!(strength(bits(16, 86)), "Strong");
        assert_eq!(strength(bits(24, 86)), "Very Strong");
    }
}
