//! Foresight Core - scenario engine and decision-support lookups
//!
//! This crate provides:
//! - The scenario generator: clamped normal draws, rule-derived actions,
//!   ranking by probability
//! - Collective memory lookup, leadership style selector and topic advisor
//! - Reputation safeguard and feedback reports over an injected sentiment
//!   classifier
//! - The error facility, logging facility and configuration shared by the
//!   engine and CLI crates
//!
//! All operations are synchronous and side-effect free apart from `tracing`
//! debug events.

pub mod config;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;

pub use foresight_core_types::schema;

// Re-export commonly used types
pub use config::ForesightConfig;
pub use errors::{ExError, ExErrorKind, ForesightError, Result};
pub use model::{
    derive_action, Classification, FeedbackReport, MemoryEntry, RecommendedAction,
    ReputationScore, Scenario, ScenarioBatch, SentimentLabel,
};
pub use ops::{MemoryBank, ScenarioGenerator, ScenarioParams, SentimentClassifier};
