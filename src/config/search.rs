use serde::{Deserialize, Serialize};

use super::traits::ConfigSection;
use crate::error::{GraydiskError, Result};

/// Genetic search configuration.
///
/// `early_stop` is off by default: the search runs the full generation
/// budget and only logs stagnation, so the solution space is explored
/// exhaustively. Enable it to cut off after `stagnation_limit` generations
/// without an improvement above `convergence_threshold`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub population_size: usize,
    pub generations: usize,
    pub mutation_rate: f64,
    pub tournament_size: usize,
    pub early_stop: bool,
    pub convergence_threshold: f64,
    pub stagnation_limit: usize,
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            mutation_rate: 0.1,
            tournament_size: 5,
            early_stop: false,
            convergence_threshold: 0.001,
            stagnation_limit: 20,
            seed: None,
        }
    }
}

impl ConfigSection for SearchConfig {
    fn section_name() -> &'static str {
        "search"
    }

    fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(GraydiskError::Configuration(
                "Population size must be at least 2".to_string(),
            ));
        }
        if self.generations == 0 {
            return Err(GraydiskError::Configuration(
                "Generation count must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GraydiskError::Configuration(
                "Mutation rate must be between 0 and 1".to_string(),
            ));
        }
        if self.tournament_size == 0 || self.tournament_size > self.population_size {
            return Err(GraydiskError::Configuration(format!(
                "Tournament size {} must be between 1 and the population size {}",
                self.tournament_size, self.population_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(SearchConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_rates_and_sizes() {
        let bad = SearchConfig { mutation_rate: 1.5, ..SearchConfig::default() };
        assert!(bad.validate().is_err());

        let bad = SearchConfig { population_size: 1, ..SearchConfig::default() };
        assert!(bad.validate().is_err());

        let bad = SearchConfig {
            tournament_size: 100,
            population_size: 10,
            ..SearchConfig::default()
        };
        assert!(bad.validate().is_err());
    }
}
