//! End-to-end checks of the Gray code engine public API.

use graydisk::gray::{
    analyze_runs, analyze_transitions, binary_to_gray, encoding_efficiency, extract_track_pattern,
    generate_gray_sequence, gray_to_binary, validate_encoder_pattern, validate_gray_sequence,
};

#[test]
fn gray_conversion_round_trips_full_range() {
    for n in 0..4096u64 {
        assert_eq!(gray_to_binary(binary_to_gray(n)), n);
    }
}

#[test]
fn generated_sequences_are_valid_for_all_supported_sizes() {
    for positions in [2u32, 4, 8, 16, 32, 64, 128] {
        let sequence = generate_gray_sequence(positions);
        assert_eq!(sequence.len(), positions as usize);
        let (ok, errors) = validate_gray_sequence(&sequence);
        assert!(ok, "{} positions: {:?}", positions, errors);
    }
}

#[test]
fn corrupted_sequence_reports_the_offending_transition() {
    let mut sequence = generate_gray_sequence(8);
    sequence[3] ^= 0b110; // two extra bit flips
    let (ok, errors) = validate_gray_sequence(&sequence);
    assert!(!ok);
    assert!(errors.iter().any(|e| e.contains("Position")));
}

#[test]
fn lsb_track_changes_most_often() {
    // Track 0 carries the least significant Gray bit.
    let num_positions = 32u32;
    let num_bits = 5u32;

    let transitions_per_track: Vec<usize> = (0..num_bits as usize)
        .map(|track| {
            let pattern = extract_track_pattern(track, num_positions, num_bits);
            analyze_transitions(&pattern).transitions
        })
        .collect();

    for higher in 1..transitions_per_track.len() {
        assert!(
            transitions_per_track[0] >= transitions_per_track[higher],
            "track 0 ({}) vs track {} ({})",
            transitions_per_track[0],
            higher,
            transitions_per_track[higher]
        );
    }

    // Total transitions across tracks equal the positions minus one: each
    // adjacent pair differs in exactly one bit and the sequence does not wrap.
    let total: usize = transitions_per_track.iter().sum();
    assert_eq!(total, num_positions as usize - 1);
}

#[test]
fn runs_partition_every_track_pattern() {
    for track in 0..5 {
        let pattern = extract_track_pattern(track, 32, 5);
        let runs = analyze_runs(&pattern);
        let covered: usize = runs.iter().map(|r| r.length).sum();
        assert_eq!(covered, pattern.len());

        let mut cursor = 0;
        for run in &runs {
            assert_eq!(run.start, cursor);
            cursor += run.length;
        }
    }
}

#[test]
fn power_of_two_patterns_validate_cleanly() {
    let report = validate_encoder_pattern(32, 5);
    assert!(report.is_valid, "{:?}", report.errors);
}

#[test]
fn efficiency_drops_for_partial_sequences() {
    let full = encoding_efficiency(32, 5);
    let partial = encoding_efficiency(20, 5);
    assert_eq!(full.efficiency, 1.0);
    assert!(partial.efficiency < full.efficiency);
    assert_eq!(partial.num_positions, 20);
    assert_eq!(partial.max_positions, 32);
    assert_eq!(partial.unused_codes, 12);
}
