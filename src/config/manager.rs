use std::path::Path;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use super::{goals::OptimizationGoals, search::SearchConfig, traits::ConfigSection};
use crate::engines::evaluation::printability::PrinterConstraints;
use crate::error::{GraydiskError, Result};
use crate::params::EncoderParameters;

/// Complete application configuration.
///
/// `baseline`, when present, pins the physical and encoding parameters and
/// restricts the search to the free track layout genes. Without it the
/// search explores the full parameter space.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub goals: OptimizationGoals,
    pub search: SearchConfig,
    pub printer: PrinterConstraints,
    pub baseline: Option<EncoderParameters>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            goals: OptimizationGoals::default(),
            search: SearchConfig::default(),
            printer: PrinterConstraints::default(),
            baseline: Some(EncoderParameters::default()),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        self.goals.validate()?;
        self.search.validate()?;
        self.printer.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| GraydiskError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| GraydiskError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        *self.config.write().unwrap() = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let config = self.config.read().unwrap();
        let toml_str = toml::to_string_pretty(&*config)
            .map_err(|e| GraydiskError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| GraydiskError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.read().unwrap().clone()
    }

    /// Apply `f` to a copy of the config and commit only if the result
    /// still validates; a rejected update leaves the shared config as it
    /// was.
    pub fn update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap();
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_round_trip() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.goals, config.goals);
        assert_eq!(parsed.search, config.search);
        assert_eq!(parsed.printer, config.printer);
        assert_eq!(parsed.baseline, config.baseline);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let parsed: AppConfig = toml::from_str(
            r#"
            [search]
            population_size = 30
            generations = 50
            seed = 42
            "#,
        )
        .unwrap();
        assert_eq!(parsed.search.population_size, 30);
        assert_eq!(parsed.search.seed, Some(42));
        assert_eq!(parsed.goals, OptimizationGoals::default());
    }

    #[test]
    fn update_rejects_invalid_config() {
        let manager = ConfigManager::new();
        let result = manager.update(|c| c.search.population_size = 0);
        assert!(result.is_err());
    }

    #[test]
    fn rejected_update_leaves_config_untouched() {
        let manager = ConfigManager::new();
        let before = manager.get();

        assert!(manager.update(|c| c.search.population_size = 0).is_err());
        assert_eq!(manager.get().search, before.search);

        // A valid update still commits.
        manager.update(|c| c.search.population_size = 30).unwrap();
        assert_eq!(manager.get().search.population_size, 30);
    }
}
