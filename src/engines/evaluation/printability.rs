//! FDM printability analysis for encoder disk designs.
//!
//! All sizes are derived analytically from the parameter record and the
//! feature size model; no geometry is constructed.

use serde::{Deserialize, Serialize};

use crate::config::traits::ConfigSection;
use crate::error::{GraydiskError, Result};
use crate::params::EncoderParameters;

use super::features::{analyze_feature_sizes, track_radius};

/// Printer process limits. Defaults describe a 0.4mm nozzle FDM machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterConstraints {
    pub nozzle_diameter_mm: f64,
    pub layer_height_mm: f64,
    pub line_width_mm: f64,
    pub min_wall_thickness_mm: f64,
    pub min_gap_width_mm: f64,
    pub min_hole_diameter_mm: f64,
    pub min_feature_mm: f64,
    pub max_overhang_angle_deg: f64,
    pub max_bridge_distance_mm: f64,
    pub perimeter_count: u32,
}

impl Default for PrinterConstraints {
    fn default() -> Self {
        Self {
            nozzle_diameter_mm: 0.4,
            layer_height_mm: 0.2,
            line_width_mm: 0.4,
            min_wall_thickness_mm: 1.2,
            min_gap_width_mm: 0.5,
            min_hole_diameter_mm: 1.0,
            min_feature_mm: 0.5,
            max_overhang_angle_deg: 45.0,
            max_bridge_distance_mm: 5.0,
            perimeter_count: 3,
        }
    }
}

impl ConfigSection for PrinterConstraints {
    fn section_name() -> &'static str {
        "printer"
    }

    fn validate(&self) -> Result<()> {
        let positive = [
            ("nozzle_diameter_mm", self.nozzle_diameter_mm),
            ("layer_height_mm", self.layer_height_mm),
            ("min_wall_thickness_mm", self.min_wall_thickness_mm),
            ("min_gap_width_mm", self.min_gap_width_mm),
            ("min_feature_mm", self.min_feature_mm),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(GraydiskError::Configuration(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Outcome of a printability analysis. Issues block printing (and zero out
/// the printability component of fitness); recommendations are advisory.
#[derive(Debug, Clone, Default)]
pub struct PrintabilityReport {
    pub is_printable: bool,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Analyze a design against printer process limits.
pub fn analyze(params: &EncoderParameters, constraints: &PrinterConstraints) -> PrintabilityReport {
    let mut report = PrintabilityReport::default();

    check_wall_thickness(params, constraints, &mut report);
    check_gap_sizes(params, constraints, &mut report);
    check_feature_sizes(params, constraints, &mut report);
    check_overhangs(params, constraints, &mut report);
    check_bridging(params, constraints, &mut report);
    add_general_recommendations(params, constraints, &mut report);

    report.is_printable = report.issues.is_empty();
    report
}

fn check_wall_thickness(
    params: &EncoderParameters,
    constraints: &PrinterConstraints,
    report: &mut PrintabilityReport,
) {
    if params.track_width_mm < constraints.min_wall_thickness_mm {
        report.issues.push(format!(
            "Track width {}mm less than minimum wall thickness {}mm",
            params.track_width_mm, constraints.min_wall_thickness_mm
        ));
    }

    let min_thickness = constraints.layer_height_mm * 3.0;
    if params.disk_thickness_mm < min_thickness {
        report.issues.push(format!(
            "Disk thickness {}mm should be at least {}mm (3 layers minimum)",
            params.disk_thickness_mm, min_thickness
        ));
    }
}

fn check_gap_sizes(
    params: &EncoderParameters,
    constraints: &PrinterConstraints,
    report: &mut PrintabilityReport,
) {
    for track_idx in 0..params.num_tracks as usize {
        let radius = track_radius(params, track_idx);
        let gap_size_mm = params.gap_width_deg * std::f64::consts::PI * radius / 180.0;
        if gap_size_mm < constraints.min_gap_width_mm {
            report.issues.push(format!(
                "Gap size {:.2}mm at track {} less than minimum {}mm",
                gap_size_mm,
                track_idx + 1,
                constraints.min_gap_width_mm
            ));
        }
    }
}

fn check_feature_sizes(
    params: &EncoderParameters,
    constraints: &PrinterConstraints,
    report: &mut PrintabilityReport,
) {
    if params.track_spacing_mm < constraints.nozzle_diameter_mm {
        report.issues.push(format!(
            "Track spacing {}mm less than nozzle diameter {}mm",
            params.track_spacing_mm, constraints.nozzle_diameter_mm
        ));
    }

    if params.inner_diameter_mm < constraints.min_hole_diameter_mm {
        report.issues.push(format!(
            "Inner diameter {}mm less than minimum hole diameter {}mm",
            params.inner_diameter_mm, constraints.min_hole_diameter_mm
        ));
    }

    // Run-level arc features from the pattern itself.
    let analysis = analyze_feature_sizes(params, constraints.min_feature_mm);
    if !analysis.printability_ok {
        for track in &analysis.tracks {
            if track.min_feature_mm < constraints.min_feature_mm {
                report.issues.push(format!(
                    "Track {}: Feature size {:.2}mm too small (minimum {}mm)",
                    track.track_index, track.min_feature_mm, constraints.min_feature_mm
                ));
            }
        }
    }
}

fn check_overhangs(
    params: &EncoderParameters,
    constraints: &PrinterConstraints,
    report: &mut PrintabilityReport,
) {
    if params.disk_thickness_mm > 0.0 {
        let bump_overhang_ratio = params.bump_extension_mm / params.disk_thickness_mm;
        if bump_overhang_ratio > 1.0 {
            report.recommendations.push(
                "Bumper extension may require supports for reliable printing".to_string(),
            );
        }
    }

    if params.disk_thickness_mm > 2.0 * constraints.layer_height_mm {
        report
            .recommendations
            .push("Consider printing with cutouts facing up to avoid overhangs".to_string());
    }
}

fn check_bridging(
    params: &EncoderParameters,
    constraints: &PrinterConstraints,
    report: &mut PrintabilityReport,
) {
    let max_gap_size_mm =
        params.gap_width_deg * std::f64::consts::PI * params.radius_outer() / 180.0;
    if max_gap_size_mm > constraints.max_bridge_distance_mm {
        report.recommendations.push(format!(
            "Large gaps ({:.1}mm) may need slower print speeds",
            max_gap_size_mm
        ));
    }
}

fn add_general_recommendations(
    params: &EncoderParameters,
    constraints: &PrinterConstraints,
    report: &mut PrintabilityReport,
) {
    report.recommendations.push(format!(
        "Set perimeter count to {} for strength",
        constraints.perimeter_count
    ));

    if params.outer_diameter_mm > 100.0 {
        report
            .recommendations
            .push("Large disk may require heated bed to prevent warping".to_string());
    }

    if params.num_tracks > 5 {
        report
            .recommendations
            .push("High track count requires excellent printer calibration".to_string());
    }
}
