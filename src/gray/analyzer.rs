//! Run-length and transition analysis of track bit patterns.

use super::converter::{
    encoding_efficiency, extract_track_pattern, generate_gray_sequence, validate_gray_sequence,
};

/// Maximal stretch of identical bit values within one track pattern.
///
/// Runs partition the pattern exactly; the track is treated as an open,
/// non-cyclic arc, so a run ending at the last position never merges with
/// the run at index 0 even when the disk spans a full 360 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub value: u8,
    pub start: usize,
    pub length: usize,
}

/// Split a pattern into its constituent runs. Empty input yields no runs.
pub fn analyze_runs(pattern: &[u8]) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut iter = pattern.iter().copied().enumerate();

    let Some((_, first)) = iter.next() else {
        return runs;
    };
    let mut current = Run { value: first, start: 0, length: 1 };

    for (i, bit) in iter {
        if bit == current.value {
            current.length += 1;
        } else {
            runs.push(current);
            current = Run { value: bit, start: i, length: 1 };
        }
    }
    runs.push(current);
    runs
}

/// Transition and run-length statistics for one track pattern.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransitionStats {
    pub total_positions: usize,
    pub transitions: usize,
    pub zero_count: usize,
    pub one_count: usize,
    pub zero_runs: Vec<usize>,
    pub one_runs: Vec<usize>,
}

impl TransitionStats {
    pub fn min_run(&self, value: u8) -> usize {
        self.runs_for(value).iter().copied().min().unwrap_or(0)
    }

    pub fn max_run(&self, value: u8) -> usize {
        self.runs_for(value).iter().copied().max().unwrap_or(0)
    }

    pub fn avg_run(&self, value: u8) -> f64 {
        let runs = self.runs_for(value);
        if runs.is_empty() {
            return 0.0;
        }
        runs.iter().sum::<usize>() as f64 / runs.len() as f64
    }

    fn runs_for(&self, value: u8) -> &[usize] {
        if value == 0 {
            &self.zero_runs
        } else {
            &self.one_runs
        }
    }
}

/// Derive transition count and per-value run lengths from a pattern.
pub fn analyze_transitions(pattern: &[u8]) -> TransitionStats {
    let runs = analyze_runs(pattern);
    let mut stats = TransitionStats {
        total_positions: pattern.len(),
        transitions: runs.len().saturating_sub(1),
        ..TransitionStats::default()
    };

    for run in runs {
        if run.value == 0 {
            stats.zero_count += run.length;
            stats.zero_runs.push(run.length);
        } else {
            stats.one_count += run.length;
            stats.one_runs.push(run.length);
        }
    }
    stats
}

/// Structural validation of a full encoder pattern.
#[derive(Debug, Clone, Default)]
pub struct PatternReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Validate the complete Gray code pattern for an encoder.
///
/// Errors are single-bit-transition or duplicate-code violations in the
/// generated sequence. Warnings flag patterns that are legal but awkward
/// to manufacture or sense: single-position runs, very long runs,
/// unbalanced tracks, and poor code-space utilization.
pub fn validate_encoder_pattern(num_positions: u32, num_tracks: u32) -> PatternReport {
    let mut report = PatternReport::default();

    let sequence = generate_gray_sequence(num_positions);
    let (_, errors) = validate_gray_sequence(&sequence);
    report.errors.extend(errors);

    for track_idx in 0..num_tracks as usize {
        let pattern = extract_track_pattern(track_idx, num_positions, num_tracks);
        let stats = analyze_transitions(&pattern);
        check_track_pattern(track_idx, &stats, &mut report);
    }

    let efficiency = encoding_efficiency(num_positions, num_tracks).efficiency;
    if efficiency < 0.5 {
        report.warnings.push(format!(
            "Low encoding efficiency: {:.0}% ({}/{} codes used)",
            efficiency * 100.0,
            num_positions,
            1u64 << num_tracks.min(63)
        ));
    } else if efficiency < 0.75 {
        report
            .warnings
            .push(format!("Moderate encoding efficiency: {:.0}%", efficiency * 100.0));
    }

    report.is_valid = report.errors.is_empty();
    report
}

fn check_track_pattern(track_idx: usize, stats: &TransitionStats, report: &mut PatternReport) {
    if stats.min_run(0) == 1 {
        report.warnings.push(format!(
            "Track {}: Single-position zero runs may be hard to print",
            track_idx
        ));
    }
    if stats.min_run(1) == 1 {
        report.warnings.push(format!(
            "Track {}: Single-position one runs may be hard to print",
            track_idx
        ));
    }

    let max_run_threshold = 8.max(stats.total_positions / 4);
    if stats.max_run(0) > max_run_threshold {
        report.warnings.push(format!(
            "Track {}: Very long zero run ({} positions)",
            track_idx,
            stats.max_run(0)
        ));
    }
    if stats.max_run(1) > max_run_threshold {
        report.warnings.push(format!(
            "Track {}: Very long one run ({} positions)",
            track_idx,
            stats.max_run(1)
        ));
    }

    if stats.total_positions > 0 {
        let zero_percent = stats.zero_count as f64 / stats.total_positions as f64 * 100.0;
        if !(25.0..=75.0).contains(&zero_percent) {
            report.warnings.push(format!(
                "Track {}: Unbalanced pattern ({:.1}% zeros)",
                track_idx, zero_percent
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_of_mixed_pattern() {
        let runs = analyze_runs(&[0, 0, 1, 1, 1, 0]);
        assert_eq!(
            runs,
            vec![
                Run { value: 0, start: 0, length: 2 },
                Run { value: 1, start: 2, length: 3 },
                Run { value: 0, start: 5, length: 1 },
            ]
        );
    }

    #[test]
    fn runs_partition_any_pattern() {
        let patterns: Vec<Vec<u8>> = vec![
            vec![],
            vec![1],
            vec![0, 0, 0, 0],
            vec![0, 1, 0, 1, 0, 1],
            extract_track_pattern(0, 32, 5),
            extract_track_pattern(4, 32, 5),
        ];
        for pattern in patterns {
            let runs = analyze_runs(&pattern);
            assert_eq!(runs.iter().map(|r| r.length).sum::<usize>(), pattern.len());
            // No gaps, no overlaps.
            let mut next_start = 0;
            for run in &runs {
                assert_eq!(run.start, next_start);
                next_start += run.length;
            }
        }
    }

    #[test]
    fn transition_stats() {
        let stats = analyze_transitions(&[0, 0, 1, 1, 1, 0]);
        assert_eq!(stats.transitions, 2);
        assert_eq!(stats.zero_count, 3);
        assert_eq!(stats.one_count, 3);
        assert_eq!(stats.zero_runs, vec![2, 1]);
        assert_eq!(stats.one_runs, vec![3]);
        assert_eq!(stats.min_run(0), 1);
        assert_eq!(stats.max_run(0), 2);
        assert!((stats.avg_run(0) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn empty_pattern_yields_no_runs() {
        assert!(analyze_runs(&[]).is_empty());
        let stats = analyze_transitions(&[]);
        assert_eq!(stats.transitions, 0);
        assert_eq!(stats.total_positions, 0);
    }

    #[test]
    fn lsb_track_has_most_transitions() {
        let lsb = analyze_transitions(&extract_track_pattern(0, 32, 5));
        let msb = analyze_transitions(&extract_track_pattern(4, 32, 5));
        assert!(lsb.transitions > msb.transitions);
    }

    #[test]
    fn encoder_pattern_report() {
        // A generated sequence is structurally valid by construction.
        let report = validate_encoder_pattern(32, 5);
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
        // LSB track has single-position runs at the arc ends.
        assert!(report.warnings.iter().any(|w| w.contains("Single-position")));

        // 20 of 32 codes used: efficiency warning.
        let report = validate_encoder_pattern(20, 5);
        assert!(report.is_valid);
        assert!(report.warnings.iter().any(|w| w.contains("encoding efficiency")));
    }
}
