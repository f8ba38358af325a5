//! Parameter record validation against geometric and encoding invariants.
//!
//! All checks run unconditionally and accumulate into the report; an early
//! failure never hides later ones.

use crate::params::EncoderParameters;

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Validate a parameter record. Malformed-but-representable input produces
/// error strings, never a panic or `Err`.
pub fn validate(params: &EncoderParameters) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_basic_geometry(params, &mut report);
    check_encoding(params, &mut report);
    check_manufacturing(params, &mut report);
    check_track_layout(params, &mut report);
    check_optical(params, &mut report);

    report.is_valid = report.errors.is_empty();
    report
}

fn check_basic_geometry(params: &EncoderParameters, report: &mut ValidationReport) {
    if params.outer_diameter_mm <= params.inner_diameter_mm {
        report
            .errors
            .push("Outer diameter must be greater than inner diameter".to_string());
    }

    if params.disk_thickness_mm < params.min_wall_thickness_mm {
        report.errors.push(format!(
            "Disk thickness {}mm less than minimum {}mm",
            params.disk_thickness_mm, params.min_wall_thickness_mm
        ));
    }

    if params.arc_angle_deg <= 0.0 || params.arc_angle_deg > 360.0 {
        report
            .errors
            .push("Arc angle must be between 0 and 360 degrees".to_string());
    }

    if params.usable_radius_mm() <= 0.0 {
        report
            .errors
            .push("No usable radius available for tracks".to_string());
    }
}

fn check_encoding(params: &EncoderParameters, report: &mut ValidationReport) {
    if params.num_positions == 0 {
        report
            .errors
            .push("Number of positions must be positive".to_string());
    }

    if params.num_tracks != params.required_bits() {
        report.errors.push(format!(
            "Track count {} doesn't match required bits {} for {} positions",
            params.num_tracks,
            params.required_bits(),
            params.num_positions
        ));
    }

    if params.num_positions > 0 && !params.num_positions.is_power_of_two() {
        report.warnings.push(format!(
            "Position count {} is not a power of 2, some Gray codes will be unused",
            params.num_positions
        ));
    }
}

fn check_manufacturing(params: &EncoderParameters, report: &mut ValidationReport) {
    let gap_size_mm =
        params.gap_width_deg * std::f64::consts::PI * params.radius_outer() / 180.0;
    if gap_size_mm < params.min_gap_size_mm {
        report.errors.push(format!(
            "Gap size {:.2}mm at outer radius less than minimum {}mm",
            gap_size_mm, params.min_gap_size_mm
        ));
    }

    if params.track_width_mm < params.min_wall_thickness_mm {
        report.errors.push(format!(
            "Track width {}mm less than minimum wall thickness {}mm",
            params.track_width_mm, params.min_wall_thickness_mm
        ));
    }

    if params.track_spacing_mm < params.min_feature_size_mm {
        report.warnings.push(format!(
            "Track spacing {}mm may be difficult to print reliably",
            params.track_spacing_mm
        ));
    }
}

fn check_track_layout(params: &EncoderParameters, report: &mut ValidationReport) {
    let tracks = params.num_tracks as f64;
    let total_track_space =
        tracks * params.track_width_mm + (tracks - 1.0).max(0.0) * params.track_spacing_mm;

    if total_track_space > params.usable_radius_mm() {
        report.errors.push(format!(
            "Total track space {:.1}mm exceeds available radius {:.1}mm",
            total_track_space,
            params.usable_radius_mm()
        ));
    }

    if params.num_tracks > 0 {
        let outermost_radius = params.radius_inner()
            + (tracks - 1.0) * params.track_pitch_mm()
            + params.track_width_mm;
        if outermost_radius > params.radius_outer() {
            report
                .errors
                .push("Outermost track extends beyond disk edge".to_string());
        }
    }
}

fn check_optical(params: &EncoderParameters, report: &mut ValidationReport) {
    if params.num_positions > 0 && params.angular_resolution_deg() < 0.5 {
        report.warnings.push(format!(
            "Angular resolution {:.2}\u{b0} may be too fine for reliable optical sensing",
            params.angular_resolution_deg()
        ));
    }

    if params.track_spacing_mm < 1.0 {
        report
            .warnings
            .push("Track spacing may be too tight for optical sensor array".to_string());
    }
}
