//! Scenario generation
//!
//! Draws probability, risk and opportunity from independent normal
//! distributions, builds one [`Scenario`] per draw triple and ranks the
//! batch by probability. The random source is always supplied by the
//! caller, which makes generation reproducible under a seeded RNG.

use crate::errors::{ForesightError, Result};
use crate::model::{Scenario, ScenarioBatch};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Deserializer, Serialize};

/// Scenario count used when a caller does not ask for a specific number
pub const DEFAULT_SCENARIO_COUNT: u32 = 10;

/// Largest batch a single call may generate
pub const MAX_SCENARIO_COUNT: i64 = 1_000_000;

/// Mean and standard deviation of one metric's normal distribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricDistribution {
    pub mean: f64,
    pub std_dev: f64,
}

impl MetricDistribution {
    pub const fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }

    fn to_normal(self, metric: &str) -> Result<Normal<f64>> {
        if !self.mean.is_finite() || !self.std_dev.is_finite() {
            return Err(ForesightError::InvalidDistribution {
                metric: metric.to_string(),
                reason: format!(
                    "mean and std_dev must be finite, got mean={} std_dev={}",
                    self.mean, self.std_dev
                ),
            });
        }
        if self.std_dev < 0.0 {
            return Err(ForesightError::InvalidDistribution {
                metric: metric.to_string(),
                reason: format!("std_dev must not be negative, got {}", self.std_dev),
            });
        }
        Normal::new(self.mean, self.std_dev).map_err(|e| ForesightError::InvalidDistribution {
            metric: metric.to_string(),
            reason: format!("std_dev {}: {}", self.std_dev, e),
        })
    }
}

/// A distribution table in which either key may be left out
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialDistribution {
    mean: Option<f64>,
    std_dev: Option<f64>,
}

fn fill_missing<'de, D>(
    deserializer: D,
    base: MetricDistribution,
) -> std::result::Result<MetricDistribution, D::Error>
where
    D: Deserializer<'de>,
{
    let partial = PartialDistribution::deserialize(deserializer)?;
    Ok(MetricDistribution {
        mean: partial.mean.unwrap_or(base.mean),
        std_dev: partial.std_dev.unwrap_or(base.std_dev),
    })
}

/// `deserialize_with` targets that fill omitted keys from each metric's default
pub(crate) mod partial {
    use super::{fill_missing, MetricDistribution, ScenarioParams};
    use serde::Deserializer;

    pub fn probability<'de, D: Deserializer<'de>>(d: D) -> Result<MetricDistribution, D::Error> {
        fill_missing(d, ScenarioParams::default().probability)
    }

    pub fn risk<'de, D: Deserializer<'de>>(d: D) -> Result<MetricDistribution, D::Error> {
        fill_missing(d, ScenarioParams::default().risk)
    }

    pub fn opportunity<'de, D: Deserializer<'de>>(d: D) -> Result<MetricDistribution, D::Error> {
        fill_missing(d, ScenarioParams::default().opportunity)
    }
}

/// Distribution parameters for the three scenario metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioParams {
    #[serde(deserialize_with = "partial::probability")]
    pub probability: MetricDistribution,
    #[serde(deserialize_with = "partial::risk")]
    pub risk: MetricDistribution,
    #[serde(deserialize_with = "partial::opportunity")]
    pub opportunity: MetricDistribution,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            probability: MetricDistribution::new(0.5, 0.2),
            risk: MetricDistribution::new(0.5, 0.3),
            opportunity: MetricDistribution::new(0.5, 0.3),
        }
    }
}

/// Scenario generator with validated distributions
///
/// Holds no random state of its own; every call to [`generate`](Self::generate)
/// draws from the RNG it is handed.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioGenerator {
    probability: Normal<f64>,
    risk: Normal<f64>,
    opportunity: Normal<f64>,
}

impl ScenarioGenerator {
    /// Build a generator from distribution parameters
    ///
    /// # Errors
    ///
    /// Returns `InvalidDistribution` if any mean is not finite, or any
    /// standard deviation is negative or not finite.
    pub fn new(params: &ScenarioParams) -> Result<Self> {
        Ok(Self {
            probability: params.probability.to_normal("probability")?,
            risk: params.risk.to_normal("risk")?,
            opportunity: params.opportunity.to_normal("opportunity")?,
        })
    }

    /// Generate `count` scenarios ranked by probability, most likely first
    ///
    /// Draw order per scenario is probability, risk, opportunity.
    ///
    /// # Errors
    ///
    /// Returns `InvalidScenarioCount` unless `1 <= count <= MAX_SCENARIO_COUNT`.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, count: i64) -> Result<ScenarioBatch> {
        let n = Some(count)
            .filter(|c| (1..=MAX_SCENARIO_COUNT).contains(c))
            .and_then(|c| usize::try_from(c).ok())
            .ok_or(ForesightError::InvalidScenarioCount { count })?;

        let scenarios: Vec<Scenario> = (0..n)
            .map(|_| {
                let probability = self.probability.sample(rng);
                let risk = self.risk.sample(rng);
                let opportunity = self.opportunity.sample(rng);
                Scenario::new(probability, risk, opportunity)
            })
            .collect();

        tracing::debug!(scenario_count = n, "scenarios drawn");

        Ok(ScenarioBatch::rank(scenarios))
    }
}

/// Generate `count` scenarios with the default distributions
///
/// # Errors
///
/// Returns `InvalidScenarioCount` unless `1 <= count <= MAX_SCENARIO_COUNT`.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: i64) -> Result<ScenarioBatch> {
    ScenarioGenerator::new(&ScenarioParams::default())?.generate(rng, count)
}
