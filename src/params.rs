use serde::{Deserialize, Serialize};

/// Complete parameter set for an absolute-position encoder disk.
///
/// Distances are millimetres, angles degrees. The record is a flat value
/// object: derived quantities (radii, pitch, required bits) are computed on
/// demand and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderParameters {
    // Physical dimensions
    pub outer_diameter_mm: f64,
    pub inner_diameter_mm: f64,
    pub disk_thickness_mm: f64,

    // Arc specification
    pub arc_angle_deg: f64,

    // Encoding
    pub num_positions: u32,
    pub num_tracks: u32,

    // Track layout
    pub track_width_mm: f64,
    pub track_spacing_mm: f64,
    pub gap_width_deg: f64,

    // Limit switch bumpers
    pub bump_extension_mm: f64,
    pub bump_width_deg: f64,

    // Manufacturing minimums
    pub min_feature_size_mm: f64,
    pub min_gap_size_mm: f64,
    pub min_wall_thickness_mm: f64,
}

impl Default for EncoderParameters {
    /// Baseline parameter set found by a previous optimization run.
    fn default() -> Self {
        Self {
            outer_diameter_mm: 116.2,
            inner_diameter_mm: 35.6,
            disk_thickness_mm: 2.3,
            arc_angle_deg: 57.1,
            num_positions: 32,
            num_tracks: 5,
            track_width_mm: 3.3,
            track_spacing_mm: 1.7,
            gap_width_deg: 2.8,
            bump_extension_mm: 5.8,
            bump_width_deg: 3.0,
            min_feature_size_mm: 0.4,
            min_gap_size_mm: 0.5,
            min_wall_thickness_mm: 1.2,
        }
    }
}

impl EncoderParameters {
    /// 64 positions on 6 tracks, larger disk to make room.
    pub fn high_resolution() -> Self {
        Self {
            num_positions: 64,
            num_tracks: 6,
            outer_diameter_mm: 120.0,
            gap_width_deg: 1.5,
            ..Self::default()
        }
    }

    /// 8 positions on 3 tracks for tight installations.
    pub fn compact() -> Self {
        Self {
            num_positions: 8,
            num_tracks: 3,
            outer_diameter_mm: 70.0,
            inner_diameter_mm: 30.0,
            track_width_mm: 5.0,
            ..Self::default()
        }
    }

    /// Look up a named preset.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::default()),
            "high_resolution" => Some(Self::high_resolution()),
            "compact" => Some(Self::compact()),
            _ => None,
        }
    }

    pub fn radius_outer(&self) -> f64 {
        self.outer_diameter_mm / 2.0
    }

    pub fn radius_inner(&self) -> f64 {
        self.inner_diameter_mm / 2.0
    }

    /// Angular resolution per position in degrees.
    pub fn angular_resolution_deg(&self) -> f64 {
        self.arc_angle_deg / self.num_positions as f64
    }

    /// Distance between track centres.
    pub fn track_pitch_mm(&self) -> f64 {
        self.track_width_mm + self.track_spacing_mm
    }

    /// Bits required to encode `num_positions` distinct positions.
    pub fn required_bits(&self) -> u32 {
        match self.num_positions {
            0 | 1 => 0,
            n => (n - 1).ilog2() + 1,
        }
    }

    /// Radial space available for tracks.
    pub fn usable_radius_mm(&self) -> f64 {
        self.radius_outer() - self.radius_inner()
    }
}
