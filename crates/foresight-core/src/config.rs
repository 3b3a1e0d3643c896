//! Foresight configuration
//!
//! Configuration is loaded once (typically by the CLI) and passed down
//! explicitly. Every section is optional; missing sections and fields take
//! the built-in defaults. Inside a `[simulation.<metric>]` table, an omitted
//! `mean` or `std_dev` keeps that metric's default.
//!
//! ```toml
//! [simulation]
//! default_count = 10
//! seed = 42
//!
//! [simulation.risk]
//! mean = 0.5
//! std_dev = 0.3
//!
//! [logging]
//! profile = "production"
//!
//! [[memory]]
//! scenario = "regulatory change"
//! strategy = "Engage compliance early and adapt product roadmaps"
//! ```

use crate::errors::{ForesightError, Result};
use crate::logging_facility::Profile;
use crate::model::MemoryEntry;
use crate::ops::scenario_gen::partial;
use crate::ops::{
    MemoryBank, MetricDistribution, ScenarioGenerator, ScenarioParams, DEFAULT_SCENARIO_COUNT,
    MAX_SCENARIO_COUNT,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForesightConfig {
    pub simulation: SimulationConfig,
    pub logging: LoggingConfig,
    /// Memory entries appended to the built-in bank
    pub memory: Vec<MemoryEntry>,
}

/// Scenario simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Scenarios generated when the caller names no count
    pub default_count: u32,
    /// Fixed RNG seed; `None` seeds every run from OS entropy
    pub seed: Option<u64>,
    #[serde(deserialize_with = "partial::probability")]
    pub probability: MetricDistribution,
    #[serde(deserialize_with = "partial::risk")]
    pub risk: MetricDistribution,
    #[serde(deserialize_with = "partial::opportunity")]
    pub opportunity: MetricDistribution,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let params = ScenarioParams::default();
        Self {
            default_count: DEFAULT_SCENARIO_COUNT,
            seed: None,
            probability: params.probability,
            risk: params.risk,
            opportunity: params.opportunity,
        }
    }
}

impl SimulationConfig {
    pub fn params(&self) -> ScenarioParams {
        ScenarioParams {
            probability: self.probability,
            risk: self.risk,
            opportunity: self.opportunity,
        }
    }

    /// Build a generator from the configured distributions
    ///
    /// # Errors
    ///
    /// Returns `InvalidDistribution` if a distribution cannot be sampled.
    pub fn generator(&self) -> Result<ScenarioGenerator> {
        ScenarioGenerator::new(&self.params())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub profile: Profile,
}

impl ForesightConfig {
    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns `ConfigParse` for malformed TOML or unknown keys, and
    /// `InvalidConfig` when values fail validation.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ForesightConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML configuration file
    ///
    /// # Errors
    ///
    /// Returns `ConfigRead` if the file cannot be read, otherwise the
    /// `from_toml_str` errors.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ForesightError::ConfigRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Check values that parse but cannot be used
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` describing the first offending value.
    pub fn validate(&self) -> Result<()> {
        let count = i64::from(self.simulation.default_count);
        if !(1..=MAX_SCENARIO_COUNT).contains(&count) {
            return Err(ForesightError::InvalidConfig {
                reason: format!(
                    "simulation.default_count must be between 1 and {}, got {}",
                    MAX_SCENARIO_COUNT, count
                ),
            });
        }

        self.simulation
            .generator()
            .map_err(|e| ForesightError::InvalidConfig {
                reason: e.to_string(),
            })?;

        if let Some(index) = self.memory.iter().position(|m| m.scenario.is_empty()) {
            return Err(ForesightError::InvalidConfig {
                reason: format!("memory[{}].scenario must not be empty", index),
            });
        }

        Ok(())
    }

    /// Built-in memory bank extended with the configured entries
    pub fn memory_bank(&self) -> MemoryBank {
        MemoryBank::with_entries(self.memory.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ForesightConfig::from_toml_str("").unwrap();
        assert_eq!(config, ForesightConfig::default());
        assert_eq!(config.simulation.default_count, 10);
        assert_eq!(config.simulation.params(), ScenarioParams::default());
        assert_eq!(config.logging.profile, Profile::Development);
    }

    #[test]
    fn test_full_config_parses() {
        let config = ForesightConfig::from_toml_str(
            r#"
            [simulation]
            default_count = 4
            seed = 99

            [simulation.opportunity]
            mean = 0.7
            std_dev = 0.1

            [logging]
            profile = "production"

            [[memory]]
            scenario = "regulatory change"
            strategy = "Engage compliance early"
            "#,
        )
        .unwrap();

        assert_eq!(config.simulation.default_count, 4);
        assert_eq!(config.simulation.seed, Some(99));
        assert_eq!(config.simulation.opportunity, MetricDistribution::new(0.7, 0.1));
        assert_eq!(config.simulation.risk, ScenarioParams::default().risk);
        assert_eq!(config.logging.profile, Profile::Production);
        assert_eq!(config.memory_bank().entries().len(), 4);
    }

    #[test]
    fn test_zero_default_count_rejected() {
        let err = ForesightConfig::from_toml_str("[simulation]\ndefault_count = 0").unwrap_err();
        assert!(matches!(err, ForesightError::InvalidConfig { .. }));
    }

    #[test]
    fn test_negative_std_dev_rejected() {
        let err = ForesightConfig::from_toml_str(
            "[simulation.probability]\nmean = 0.5\nstd_dev = -1.0",
        )
        .unwrap_err();
        assert!(matches!(err, ForesightError::InvalidConfig { .. }));
    }

    #[test]
    fn test_partial_distribution_table_fills_defaults() {
        let config = ForesightConfig::from_toml_str("[simulation.risk]\nmean = 0.4\n").unwrap();
        assert_eq!(config.simulation.risk, MetricDistribution::new(0.4, 0.3));
        assert_eq!(config.simulation.probability, ScenarioParams::default().probability);

        let config =
            ForesightConfig::from_toml_str("[simulation.probability]\nstd_dev = 0.1\n").unwrap();
        assert_eq!(config.simulation.probability, MetricDistribution::new(0.5, 0.1));
    }

    #[test]
    fn test_unknown_distribution_key_is_parse_error() {
        let err = ForesightConfig::from_toml_str("[simulation.risk]\nmu = 0.4\n").unwrap_err();
        assert!(matches!(err, ForesightError::ConfigParse { .. }));
    }

    #[test]
    fn test_oversized_default_count_rejected() {
        let err =
            ForesightConfig::from_toml_str("[simulation]\ndefault_count = 2000000").unwrap_err();
        assert!(matches!(err, ForesightError::InvalidConfig { .. }));
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = ForesightConfig::from_toml_str("[simulation]\ncount = 3").unwrap_err();
        assert!(matches!(err, ForesightError::ConfigParse { .. }));
    }

    #[test]
    fn test_empty_memory_keyword_rejected() {
        let err = ForesightConfig::from_toml_str(
            "[[memory]]\nscenario = \"\"\nstrategy = \"anything\"",
        )
        .unwrap_err();
        assert!(matches!(err, ForesightError::InvalidConfig { .. }));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = ForesightConfig::load(Path::new("/nonexistent/foresight.toml")).unwrap_err();
        assert!(matches!(err, ForesightError::ConfigRead { .. }));
    }
}
