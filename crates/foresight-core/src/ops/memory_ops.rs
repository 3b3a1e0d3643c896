//! Collective memory lookup
//!
//! A [`MemoryBank`] holds past scenario keywords and the strategies applied
//! to them. Lookup is a literal, case-sensitive substring test of each
//! keyword against the caller's description; entries come back in bank order.

use crate::model::MemoryEntry;

const DEFAULT_ENTRIES: [(&str, &str); 3] = [
    (
        "economic downturn",
        "Focus on diversification and risk reduction",
    ),
    ("rising competition", "Enhance customer loyalty programs"),
    (
        "supply chain issue",
        "Identify alternative suppliers and partners",
    ),
];

/// Read-only collection of memory entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryBank {
    entries: Vec<MemoryEntry>,
}

impl MemoryBank {
    /// Bank preloaded with the built-in entries
    pub fn new() -> Self {
        Self {
            entries: DEFAULT_ENTRIES
                .iter()
                .map(|(scenario, strategy)| MemoryEntry::new(*scenario, *strategy))
                .collect(),
        }
    }

    /// Built-in entries followed by `extra`
    pub fn with_entries(extra: impl IntoIterator<Item = MemoryEntry>) -> Self {
        let mut bank = Self::new();
        bank.entries.extend(extra);
        bank
    }

    pub fn entries(&self) -> &[MemoryEntry] {
        &self.entries
    }

    /// Every entry whose keyword occurs in `description`
    ///
    /// Never fails; an empty or unrelated description yields no entries.
    pub fn retrieve(&self, description: &str) -> Vec<&MemoryEntry> {
        let matched: Vec<&MemoryEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.matches(description))
            .collect();
        tracing::debug!(match_count = matched.len(), "memory lookup");
        matched
    }
}

impl Default for MemoryBank {
    fn default() -> Self {
        Self::new()
    }
}

/// Look `description` up in the built-in memory bank
pub fn retrieve(description: &str) -> Vec<MemoryEntry> {
    MemoryBank::new()
        .retrieve(description)
        .into_iter()
        .cloned()
        .collect()
}
