//! Pure operations over the Foresight domain model
//!
//! Nothing here performs I/O or keeps state between calls. Randomness and
//! classifiers are supplied by the caller.

pub mod advisor;
pub mod leadership;
pub mod memory_ops;
pub mod scenario_gen;
pub mod sentiment_ops;

pub use advisor::advise;
pub use leadership::select;
pub use memory_ops::{retrieve, MemoryBank};
pub use scenario_gen::{
    generate, MetricDistribution, ScenarioGenerator, ScenarioParams, DEFAULT_SCENARIO_COUNT,
    MAX_SCENARIO_COUNT,
};
pub use sentiment_ops::{
    assess_reputation, feedback_report, validate_feedback, ClassifierError, SentimentClassifier,
};
