//! Domain models for Foresight

pub mod memory_entry;
pub mod scenario;
pub mod sentiment;

pub use memory_entry::MemoryEntry;
pub use scenario::{derive_action, RecommendedAction, Scenario, ScenarioBatch};
pub use sentiment::{Classification, FeedbackReport, ReputationScore, SentimentLabel};
