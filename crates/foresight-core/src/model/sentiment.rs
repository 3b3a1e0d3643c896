//! Sentiment classification results and the reports built from them
//!
//! The classifier itself is an injected collaborator (see
//! `ops::sentiment_ops::SentimentClassifier`); these types only describe
//! what it returns.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Polarity label reported by a classifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SentimentLabel {
    Positive,
    Negative,
    /// Any label outside the binary polarity set (e.g. "NEUTRAL")
    Other(String),
}

impl SentimentLabel {
    pub fn as_str(&self) -> &str {
        match self {
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Negative => "NEGATIVE",
            SentimentLabel::Other(label) => label,
        }
    }
}

impl From<String> for SentimentLabel {
    fn from(label: String) -> Self {
        match label.as_str() {
            "POSITIVE" => SentimentLabel::Positive,
            "NEGATIVE" => SentimentLabel::Negative,
            _ => SentimentLabel::Other(label),
        }
    }
}

impl From<&str> for SentimentLabel {
    fn from(label: &str) -> Self {
        SentimentLabel::from(label.to_string())
    }
}

impl From<SentimentLabel> for String {
    fn from(label: SentimentLabel) -> Self {
        label.as_str().to_string()
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A label with the classifier's confidence in it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: SentimentLabel,
    pub score: f64,
}

impl Classification {
    pub fn new(label: impl Into<SentimentLabel>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Reputational impact of a decision text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReputationScore {
    High,
    Low,
}

impl ReputationScore {
    /// Only a positive polarity earns a high score
    pub fn from_label(label: &SentimentLabel) -> Self {
        match label {
            SentimentLabel::Positive => ReputationScore::High,
            _ => ReputationScore::Low,
        }
    }
}

impl fmt::Display for ReputationScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReputationScore::High => f.write_str("High"),
            ReputationScore::Low => f.write_str("Low"),
        }
    }
}

/// Feedback classifications plus the share of each label in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackReport {
    /// One classification per feedback, in input order
    pub classifications: Vec<Classification>,
    /// Label -> percentage of feedbacks carrying it
    pub label_share: BTreeMap<SentimentLabel, f64>,
}

impl FeedbackReport {
    pub fn from_classifications(classifications: Vec<Classification>) -> Self {
        let mut counts: BTreeMap<SentimentLabel, usize> = BTreeMap::new();
        for c in &classifications {
            *counts.entry(c.label.clone()).or_default() += 1;
        }

        let total = classifications.len() as f64;
        let label_share = counts
            .into_iter()
            .map(|(label, n)| (label, n as f64 / total * 100.0))
            .collect();

        Self {
            classifications,
            label_share,
        }
    }

    /// Percentage of feedbacks with `label` (0 when absent)
    pub fn share_of(&self, label: &SentimentLabel) -> f64 {
        self.label_share.get(label).copied().unwrap_or(0.0)
    }
}
