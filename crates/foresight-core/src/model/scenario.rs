//! Scenario domain model
//!
//! A scenario is one synthetic business outcome with three bounded metrics
//! and the action recommended for it. Scenarios are immutable: the only way
//! to build one is [`Scenario::new`], which clamps the metrics and derives the
//! action, so every instance satisfies the model invariants.

use serde::{Deserialize, Serialize};
use std::fmt;

const EXPAND_TEXT: &str = "Expand product offerings aggressively.";
const STRENGTHEN_TEXT: &str = "Reevaluate and strengthen existing safety measures.";
const MAINTAIN_TEXT: &str = "Maintain steady operations with close monitoring.";

/// Action recommended for a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RecommendedAction {
    /// High opportunity at low risk
    ExpandAggressively,
    /// High risk
    StrengthenSafety,
    MaintainSteady,
}

impl RecommendedAction {
    pub const ALL: [RecommendedAction; 3] = [
        RecommendedAction::ExpandAggressively,
        RecommendedAction::StrengthenSafety,
        RecommendedAction::MaintainSteady,
    ];

    /// Canonical recommendation text
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendedAction::ExpandAggressively => EXPAND_TEXT,
            RecommendedAction::StrengthenSafety => STRENGTHEN_TEXT,
            RecommendedAction::MaintainSteady => MAINTAIN_TEXT,
        }
    }
}

impl fmt::Display for RecommendedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RecommendedAction> for String {
    fn from(action: RecommendedAction) -> Self {
        action.as_str().to_string()
    }
}

impl TryFrom<String> for RecommendedAction {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        RecommendedAction::ALL
            .into_iter()
            .find(|a| a.as_str() == value)
            .ok_or_else(|| format!("unknown recommended action: {}", value))
    }
}

/// Derive the recommended action from risk and opportunity
///
/// Rules are evaluated in order and the first match wins:
/// 1. `opportunity > 0.6 && risk < 0.4` expands aggressively
/// 2. `risk > 0.6` strengthens safety measures
/// 3. anything else maintains steady operations
///
/// Probability plays no part in the decision.
pub fn derive_action(risk: f64, opportunity: f64) -> RecommendedAction {
    if opportunity > 0.6 && risk < 0.4 {
        RecommendedAction::ExpandAggressively
    } else if risk > 0.6 {
        RecommendedAction::StrengthenSafety
    } else {
        RecommendedAction::MaintainSteady
    }
}

/// Force a value into [0, 1]; NaN collapses to the lower bound.
pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// One synthetic decision scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scenario {
    probability: f64,
    risk: f64,
    opportunity: f64,
    recommended_action: RecommendedAction,
}

impl Scenario {
    /// Build a scenario from raw metric draws
    ///
    /// Each metric is clamped into [0, 1] before the action is derived.
    pub fn new(probability: f64, risk: f64, opportunity: f64) -> Self {
        let probability = clamp_unit(probability);
        let risk = clamp_unit(risk);
        let opportunity = clamp_unit(opportunity);

        Self {
            probability,
            risk,
            opportunity,
            recommended_action: derive_action(risk, opportunity),
        }
    }

    /// Likelihood weight of this scenario
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Estimated downside exposure
    pub fn risk(&self) -> f64 {
        self.risk
    }

    /// Estimated upside potential
    pub fn opportunity(&self) -> f64 {
        self.opportunity
    }

    pub fn recommended_action(&self) -> RecommendedAction {
        self.recommended_action
    }
}

/// Scenarios ranked by probability, most likely first
///
/// Ranking uses a stable sort, so scenarios with equal probability keep the
/// order in which they were generated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScenarioBatch {
    scenarios: Vec<Scenario>,
}

impl ScenarioBatch {
    pub(crate) fn rank(mut scenarios: Vec<Scenario>) -> Self {
        scenarios.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        Self { scenarios }
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn as_slice(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scenario> {
        self.scenarios.iter()
    }

    /// The `n` most likely scenarios (fewer if the batch is smaller)
    pub fn top(&self, n: usize) -> &[Scenario] {
        &self.scenarios[..n.min(self.scenarios.len())]
    }

    pub fn into_vec(self) -> Vec<Scenario> {
        self.scenarios
    }
}

impl<'a> IntoIterator for &'a ScenarioBatch {
    type Item = &'a Scenario;
    type IntoIter = std::slice::Iter<'a, Scenario>;

    fn into_iter(self) -> Self::IntoIter {
        self.scenarios.iter()
    }
}

impl IntoIterator for ScenarioBatch {
    type Item = Scenario;
    type IntoIter = std::vec::IntoIter<Scenario>;

    fn into_iter(self) -> Self::IntoIter {
        self.scenarios.into_iter()
    }
}
