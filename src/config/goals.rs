use serde::{Deserialize, Serialize};

use super::traits::ConfigSection;
use crate::error::{GraydiskError, Result};

/// Optimization targets, bounds, and fitness weights.
///
/// Weights scale the individual fitness components and need not sum to 1;
/// the scalarized fitness is only compared against other genomes scored
/// with the same goals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizationGoals {
    // Primary goals
    pub min_positions: u32,
    pub max_positions: u32,
    pub target_outer_diameter: f64,
    pub target_arc_angle: f64,

    // Constraints
    pub max_outer_diameter: f64,
    pub min_feature_size: f64,
    pub max_tracks: u32,

    // Fitness weights
    pub weight_printability: f64,
    pub weight_resolution: f64,
    pub weight_efficiency: f64,
    pub weight_size: f64,
    pub weight_manufacturability: f64,
}

impl Default for OptimizationGoals {
    fn default() -> Self {
        Self {
            min_positions: 16,
            max_positions: 64,
            target_outer_diameter: 100.0,
            target_arc_angle: 30.0,
            max_outer_diameter: 150.0,
            min_feature_size: 0.5,
            max_tracks: 8,
            weight_printability: 0.4,
            weight_resolution: 0.2,
            weight_efficiency: 0.2,
            weight_size: 0.1,
            weight_manufacturability: 0.1,
        }
    }
}

impl OptimizationGoals {
    fn weights(&self) -> [f64; 5] {
        [
            self.weight_printability,
            self.weight_resolution,
            self.weight_efficiency,
            self.weight_size,
            self.weight_manufacturability,
        ]
    }
}

impl ConfigSection for OptimizationGoals {
    fn section_name() -> &'static str {
        "goals"
    }

    fn validate(&self) -> Result<()> {
        if self.min_positions == 0 {
            return Err(GraydiskError::Configuration(
                "min_positions must be at least 1".to_string(),
            ));
        }
        if self.min_positions > self.max_positions {
            return Err(GraydiskError::Configuration(format!(
                "min_positions {} exceeds max_positions {}",
                self.min_positions, self.max_positions
            )));
        }
        if self.target_outer_diameter <= 0.0 {
            return Err(GraydiskError::Configuration(
                "target_outer_diameter must be positive".to_string(),
            ));
        }
        if self.weights().iter().any(|w| *w < 0.0) {
            return Err(GraydiskError::Configuration(
                "Fitness weights must be non-negative".to_string(),
            ));
        }
        if self.weights().iter().all(|w| *w == 0.0) {
            return Err(GraydiskError::Configuration(
                "At least one fitness weight must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
