//! Physical feature sizes derived from track patterns.
//!
//! Maps run lengths (in position units) to arc lengths in millimetres at
//! each track's radius. Purely analytic; no solid geometry is built here.

use crate::gray::{analyze_runs, extract_track_pattern, Run};
use crate::params::EncoderParameters;

/// One run of a track pattern with its physical dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct RunFeature {
    pub value: u8,
    pub start: usize,
    pub length: usize,
    pub angle_deg: f64,
    pub size_mm: f64,
}

/// Feature sizes for a single track.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackFeatures {
    pub track_index: usize,
    pub radius_mm: f64,
    pub runs: Vec<RunFeature>,
    pub min_feature_mm: f64,
    pub max_feature_mm: f64,
}

/// Aggregate feature analysis across all tracks.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureAnalysis {
    pub tracks: Vec<TrackFeatures>,
    pub min_feature_size_mm: f64,
    pub max_feature_size_mm: f64,
    pub printability_ok: bool,
}

/// Centre radius of a track. Track 0 sits just outside the inner radius and
/// successive tracks step outward by one pitch. The fastest-changing bit
/// therefore lives at the smallest circumference, which makes track 0 the
/// binding constraint for feature sizes.
pub fn track_radius(params: &EncoderParameters, track_index: usize) -> f64 {
    params.radius_inner()
        + track_index as f64 * params.track_pitch_mm()
        + params.track_width_mm / 2.0
}

/// Runs of one track's Gray code pattern, for feature sizing and for the
/// downstream geometry emitter.
pub fn track_runs(params: &EncoderParameters, track_index: usize) -> Vec<Run> {
    let pattern = extract_track_pattern(track_index, params.num_positions, params.num_tracks);
    analyze_runs(&pattern)
}

/// Compute arc-length feature sizes for every run of every track.
///
/// `min_printable_mm` is the smallest feature the process can reproduce;
/// `printability_ok` is false when any run falls below it.
pub fn analyze_feature_sizes(params: &EncoderParameters, min_printable_mm: f64) -> FeatureAnalysis {
    let position_angle_deg = params.angular_resolution_deg();
    let mut analysis = FeatureAnalysis {
        tracks: Vec::with_capacity(params.num_tracks as usize),
        min_feature_size_mm: f64::INFINITY,
        max_feature_size_mm: 0.0,
        printability_ok: true,
    };

    for track_index in 0..params.num_tracks as usize {
        let radius_mm = track_radius(params, track_index);
        let mut track = TrackFeatures {
            track_index,
            radius_mm,
            runs: Vec::new(),
            min_feature_mm: f64::INFINITY,
            max_feature_mm: 0.0,
        };

        for run in track_runs(params, track_index) {
            let angle_deg = run.length as f64 * position_angle_deg;
            let size_mm = angle_deg * std::f64::consts::PI * radius_mm / 180.0;
            track.min_feature_mm = track.min_feature_mm.min(size_mm);
            track.max_feature_mm = track.max_feature_mm.max(size_mm);
            track.runs.push(RunFeature {
                value: run.value,
                start: run.start,
                length: run.length,
                angle_deg,
                size_mm,
            });
        }

        analysis.min_feature_size_mm = analysis.min_feature_size_mm.min(track.min_feature_mm);
        analysis.max_feature_size_mm = analysis.max_feature_size_mm.max(track.max_feature_mm);
        analysis.tracks.push(track);
    }

    if analysis.min_feature_size_mm < min_printable_mm {
        analysis.printability_ok = false;
    }
    analysis
}
