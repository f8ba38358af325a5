//! Search result reporting and export.

use std::path::Path;

use log::info;
use serde::Serialize;

use crate::config::OptimizationGoals;
use crate::engines::evaluation::fitness::FitnessBreakdown;
use crate::error::Result;
use crate::params::EncoderParameters;

/// Outcome of one optimization run.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationResult {
    pub parameters: EncoderParameters,
    pub fitness: f64,
    pub components: FitnessBreakdown,
    pub generations: usize,
    pub goals: OptimizationGoals,
}

impl OptimizationResult {
    /// False only when the search never found a parameter-valid genome.
    pub fn has_solution(&self) -> bool {
        self.fitness > 0.0
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        info!("Saved optimization result to {}", path.as_ref().display());
        Ok(())
    }

    /// Human-readable summary for console output.
    pub fn summary(&self) -> String {
        let p = &self.parameters;
        format!(
            "fitness {:.4} after {} generations\n\
             disk: {:.1} mm outer / {:.1} mm inner, {:.1} mm thick\n\
             encoding: {} positions on {} tracks ({:.2} deg resolution)\n\
             tracks: {:.2} mm wide, {:.2} mm spacing, {:.2} deg gaps\n\
             components: printability {:.2}, gray {:.2}, resolution {:.2}, \
             efficiency {:.2}, size {:.2}, manufacturability {:.2}",
            self.fitness,
            self.generations,
            p.outer_diameter_mm,
            p.inner_diameter_mm,
            p.disk_thickness_mm,
            p.num_positions,
            p.num_tracks,
            p.angular_resolution_deg(),
            p.track_width_mm,
            p.track_spacing_mm,
            p.gap_width_deg,
            self.components.printability,
            self.components.gray,
            self.components.resolution,
            self.components.efficiency,
            self.components.size,
            self.components.manufacturability,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(fitness: f64) -> OptimizationResult {
        OptimizationResult {
            parameters: EncoderParameters::default(),
            fitness,
            components: FitnessBreakdown::default(),
            generations: 10,
            goals: OptimizationGoals::default(),
        }
    }

    #[test]
    fn solution_requires_positive_fitness() {
        assert!(result(0.5).has_solution());
        assert!(!result(0.0).has_solution());
    }

    #[test]
    fn json_round_trips_through_serde() {
        let json = serde_json::to_string(&result(0.8)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["fitness"], 0.8);
        assert_eq!(value["parameters"]["num_positions"], 32);
    }

    #[test]
    fn summary_mentions_key_figures() {
        let s = result(0.8).summary();
        assert!(s.contains("32 positions"));
        assert!(s.contains("5 tracks"));
    }
}
