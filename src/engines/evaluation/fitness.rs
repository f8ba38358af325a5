//! Multi-criterion fitness scalarization.
//!
//! A genome that fails parameter validation scores exactly 0. Otherwise
//! five component scores are combined with the goal weights; a composite
//! bonus rewards designs that are simultaneously parameter-valid,
//! printable, and Gray-valid.

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

use crate::config::OptimizationGoals;
use crate::engines::generation::Genome;
use crate::gray::validate_encoder_pattern;

use super::printability::{self, PrinterConstraints};
use super::validator;

/// Named component scores behind a scalar fitness value.
///
/// `gray` is informational: it is reported but not part of the weighted
/// sum, which covers printability, resolution, efficiency, size, and
/// manufacturability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FitnessBreakdown {
    pub printability: f64,
    pub gray: f64,
    pub resolution: f64,
    pub efficiency: f64,
    pub size: f64,
    pub manufacturability: f64,
}

pub struct FitnessEvaluator {
    goals: OptimizationGoals,
    printer: PrinterConstraints,
    evaluations: AtomicUsize,
}

impl FitnessEvaluator {
    pub fn new(goals: OptimizationGoals, printer: PrinterConstraints) -> Self {
        Self {
            goals,
            printer,
            evaluations: AtomicUsize::new(0),
        }
    }

    pub fn goals(&self) -> &OptimizationGoals {
        &self.goals
    }

    /// Number of full evaluations performed (cache hits excluded).
    pub fn evaluations(&self) -> usize {
        self.evaluations.load(Ordering::Relaxed)
    }

    /// Score a genome, caching fitness and breakdown on it. A genome whose
    /// `validated` flag is set returns its cached fitness without
    /// recomputation.
    pub fn evaluate(&self, genome: &mut Genome) -> f64 {
        if genome.validated {
            return genome.fitness;
        }
        self.evaluations.fetch_add(1, Ordering::Relaxed);

        let params = &genome.params;

        let param_report = validator::validate(params);
        if !param_report.is_valid {
            genome.fitness = 0.0;
            genome.components = FitnessBreakdown::default();
            genome.validated = true;
            return 0.0;
        }

        let print_report = printability::analyze(params, &self.printer);
        let printability_score = if print_report.is_printable {
            1.0
        } else {
            (1.0 - 0.2 * print_report.issues.len() as f64).max(0.1)
        };

        let pattern_report = validate_encoder_pattern(params.num_positions, params.num_tracks);
        let mut gray_score = if pattern_report.is_valid {
            1.0
        } else {
            (1.0 - 0.3 * pattern_report.errors.len() as f64).max(0.2)
        };
        if !pattern_report.warnings.is_empty() {
            gray_score *= (1.0 - 0.1 * pattern_report.warnings.len() as f64).max(0.5);
        }

        let resolution_score = self.resolution_score(params.num_positions);

        let efficiency_score =
            params.num_positions as f64 / 2f64.powi(params.num_tracks as i32);

        let size_diff = (params.outer_diameter_mm - self.goals.target_outer_diameter).abs();
        let size_score = (1.0 - size_diff / self.goals.target_outer_diameter).max(0.3);

        let mut manufacturability_score = 1.0;
        if params.num_tracks > 6 {
            manufacturability_score *= 0.8;
        }
        if (params.arc_angle_deg - self.goals.target_arc_angle).abs() > 15.0 {
            manufacturability_score *= 0.9;
        }
        if params.track_width_mm < 4.0 || params.track_width_mm > 7.0 {
            manufacturability_score *= 0.95;
        }

        let mut total = self.goals.weight_printability * printability_score
            + self.goals.weight_resolution * resolution_score
            + self.goals.weight_efficiency * efficiency_score
            + self.goals.weight_size * size_score
            + self.goals.weight_manufacturability * manufacturability_score;

        // Composite bonus: valid in every respect at once.
        if print_report.is_printable && pattern_report.is_valid {
            total *= 1.2;
        }

        genome.fitness = total;
        genome.components = FitnessBreakdown {
            printability: printability_score,
            gray: gray_score,
            resolution: resolution_score,
            efficiency: efficiency_score,
            size: size_score,
            manufacturability: manufacturability_score,
        };
        genome.validated = true;
        total
    }

    fn resolution_score(&self, num_positions: u32) -> f64 {
        if num_positions < self.goals.min_positions {
            0.3
        } else if num_positions > self.goals.max_positions {
            0.7
        } else {
            let mid = (self.goals.min_positions + self.goals.max_positions) as f64 / 2.0;
            let distance = (num_positions as f64 - mid).abs() / mid;
            (1.0 - distance).max(0.7)
        }
    }
}
