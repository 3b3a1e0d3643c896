//! Collective memory reference data

use serde::{Deserialize, Serialize};

/// A past business scenario keyword paired with the strategy that was applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryEntry {
    /// Keyword matched as a literal substring of a scenario description
    pub scenario: String,
    pub strategy: String,
}

impl MemoryEntry {
    pub fn new(scenario: impl Into<String>, strategy: impl Into<String>) -> Self {
        Self {
            scenario: scenario.into(),
            strategy: strategy.into(),
        }
    }

    /// Whether this entry's keyword occurs in `description` (case-sensitive)
    pub fn matches(&self, description: &str) -> bool {
        description.contains(self.scenario.as_str())
    }
}
