//! Gray code mathematics for absolute position encoding.
//!
//! Consecutive positions differ in exactly one bit, so at most one track
//! can misread during a transition.

use std::collections::HashSet;

/// Convert a binary number to its Gray code equivalent.
pub fn binary_to_gray(n: u64) -> u64 {
    n ^ (n >> 1)
}

/// Convert a Gray code back to binary. Inverse of [`binary_to_gray`].
pub fn gray_to_binary(gray: u64) -> u64 {
    let mut binary = gray;
    let mut shift = gray;
    while shift != 0 {
        shift >>= 1;
        binary ^= shift;
    }
    binary
}

/// Extract the individual bits of the Gray code for `position`, LSB first.
///
/// Index 0 (LSB) changes fastest across the sequence; index `num_bits - 1`
/// (MSB) changes least. The caller must guarantee `position < 2^num_bits`.
pub fn gray_code_bits(position: u64, num_bits: u32) -> Vec<u8> {
    debug_assert!(
        num_bits >= 64 || position < (1u64 << num_bits),
        "position {} does not fit in {} bits",
        position,
        num_bits
    );
    let gray = binary_to_gray(position);
    (0..num_bits).map(|i| ((gray >> i) & 1) as u8).collect()
}

/// Lazy Gray code sequence for positions `0..num_positions`.
pub fn gray_sequence(num_positions: u32) -> impl Iterator<Item = u64> {
    (0..num_positions as u64).map(binary_to_gray)
}

/// Complete Gray code sequence for positions `0..num_positions`.
pub fn generate_gray_sequence(num_positions: u32) -> Vec<u64> {
    gray_sequence(num_positions).collect()
}

/// Check that every adjacent pair in `sequence` differs in exactly one bit
/// and that no code repeats. Returns `(is_valid, errors)` with one message
/// per violation; the sequence is treated as a non-cyclic open arc, so the
/// last and first entries are not compared.
pub fn validate_gray_sequence(sequence: &[u64]) -> (bool, Vec<String>) {
    let mut errors = Vec::new();

    if sequence.is_empty() {
        errors.push("Empty sequence".to_string());
        return (false, errors);
    }

    for i in 0..sequence.len() - 1 {
        let current = sequence[i];
        let next = sequence[i + 1];
        let bit_count = (current ^ next).count_ones();
        if bit_count != 1 {
            errors.push(format!(
                "Position {} to {}: {} bits differ (should be 1) - {:b} -> {:b}",
                i,
                i + 1,
                bit_count,
                current,
                next
            ));
        }
    }

    let distinct: HashSet<u64> = sequence.iter().copied().collect();
    if distinct.len() != sequence.len() {
        errors.push("Duplicate Gray codes found in sequence".to_string());
    }

    (errors.is_empty(), errors)
}

/// Binary pattern of a single track across all positions.
///
/// Track 0 carries the LSB (most transitions), track `num_bits - 1` the
/// MSB (fewest transitions).
pub fn extract_track_pattern(track_index: usize, num_positions: u32, num_bits: u32) -> Vec<u8> {
    (0..num_positions as u64)
        .map(|position| gray_code_bits(position, num_bits)[track_index])
        .collect()
}

/// Gray code utilization for a position count and bit width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodingEfficiency {
    pub num_positions: u32,
    pub num_bits: u32,
    pub max_positions: u64,
    pub unused_codes: u64,
    pub efficiency: f64,
}

/// Fraction of the available code space actually used.
pub fn encoding_efficiency(num_positions: u32, num_bits: u32) -> EncodingEfficiency {
    let max_positions = 1u64 << num_bits.min(63);
    let unused_codes = max_positions.saturating_sub(num_positions as u64);
    EncodingEfficiency {
        num_positions,
        num_bits,
        max_positions,
        unused_codes,
        efficiency: num_positions as f64 / max_positions as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_identity() {
        for n in 0..4096u64 {
            assert_eq!(gray_to_binary(binary_to_gray(n)), n);
        }
    }

    #[test]
    fn adjacent_codes_differ_in_one_bit() {
        for n in 0..4096u64 {
            let diff = binary_to_gray(n) ^ binary_to_gray(n + 1);
            assert_eq!(diff.count_ones(), 1, "n={}", n);
        }
    }

    #[test]
    fn known_sequences() {
        assert_eq!(generate_gray_sequence(4), vec![0, 1, 3, 2]);
        assert_eq!(generate_gray_sequence(8), vec![0, 1, 3, 2, 6, 7, 5, 4]);
    }

    #[test]
    fn validate_accepts_gray_order() {
        let (ok, errors) = validate_gray_sequence(&[0, 1, 3, 2]);
        assert!(ok);
        assert!(errors.is_empty());
    }

    #[test]
    fn validate_rejects_multi_bit_transition() {
        let (ok, errors) = validate_gray_sequence(&[0, 3, 1, 2]);
        assert!(!ok);
        assert!(errors[0].contains("2 bits differ"));
    }

    #[test]
    fn validate_rejects_duplicates_and_empty() {
        let (ok, errors) = validate_gray_sequence(&[0, 1, 3, 1]);
        assert!(!ok);
        assert!(errors.iter().any(|e| e.contains("Duplicate")));

        let (ok, errors) = validate_gray_sequence(&[]);
        assert!(!ok);
        assert_eq!(errors, vec!["Empty sequence".to_string()]);
    }

    #[test]
    fn track_patterns_for_two_bits() {
        // LSB track toggles fastest.
        assert_eq!(extract_track_pattern(0, 4, 2), vec![0, 1, 1, 0]);
        // MSB track changes once.
        assert_eq!(extract_track_pattern(1, 4, 2), vec![0, 0, 1, 1]);
    }

    #[test]
    fn efficiency_ratio() {
        let e = encoding_efficiency(32, 5);
        assert_eq!(e.max_positions, 32);
        assert_eq!(e.unused_codes, 0);
        assert_eq!(e.efficiency, 1.0);

        let e = encoding_efficiency(24, 5);
        assert_eq!(e.unused_codes, 8);
        assert_eq!(e.efficiency, 0.75);
    }
}
