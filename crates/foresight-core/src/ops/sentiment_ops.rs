//! Reputation safeguard and feedback sentiment reports
//!
//! Both operations sit on top of an injected [`SentimentClassifier`]; no
//! model lives in this crate. Classifier failures are surfaced as
//! `ClassifierFailed` and never retried here.

use crate::errors::{ForesightError, Result};
use crate::model::{Classification, FeedbackReport, ReputationScore};
use thiserror::Error;

/// Failure reported by a classifier implementation
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ClassifierError {
    pub message: String,
}

impl ClassifierError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<ClassifierError> for ForesightError {
    fn from(err: ClassifierError) -> Self {
        ForesightError::ClassifierFailed {
            message: err.message,
        }
    }
}

/// Maps free text to a polarity label and confidence
///
/// Implemented by adapters around hosted or local models. Any
/// `Fn(&str) -> Result<Classification, ClassifierError>` is a classifier too,
/// which keeps tests and simple callers free of boilerplate.
pub trait SentimentClassifier {
    /// Classify a single text
    ///
    /// # Errors
    ///
    /// Returns `ClassifierError` if the underlying model cannot produce a label.
    fn classify(&self, text: &str) -> std::result::Result<Classification, ClassifierError>;
}

impl<F> SentimentClassifier for F
where
    F: Fn(&str) -> std::result::Result<Classification, ClassifierError>,
{
    fn classify(&self, text: &str) -> std::result::Result<Classification, ClassifierError> {
        self(text)
    }
}

/// Score the reputational impact of a decision text
///
/// `High` when the classifier reads the text as positive, `Low` otherwise.
///
/// # Errors
///
/// Returns `ClassifierFailed` if the classifier fails.
pub fn assess_reputation<C>(classifier: &C, decision_text: &str) -> Result<ReputationScore>
where
    C: SentimentClassifier + ?Sized,
{
    let classification = classifier.classify(decision_text)?;
    tracing::debug!(label = %classification.label, score = classification.score, "decision classified");
    Ok(ReputationScore::from_label(&classification.label))
}

/// Check that feedback is non-empty and contains no blank entries
///
/// # Errors
///
/// Returns `EmptyFeedback` for an empty list, or `BlankFeedback` naming the
/// first entry that is empty or whitespace-only.
pub fn validate_feedback<S: AsRef<str>>(feedbacks: &[S]) -> Result<()> {
    if feedbacks.is_empty() {
        return Err(ForesightError::EmptyFeedback);
    }
    match feedbacks.iter().position(|f| f.as_ref().trim().is_empty()) {
        Some(index) => Err(ForesightError::BlankFeedback { index }),
        None => Ok(()),
    }
}

/// Classify every feedback and summarise the label distribution
///
/// # Errors
///
/// Returns the `validate_feedback` errors, or `ClassifierFailed` on the first
/// classifier failure.
pub fn feedback_report<C, S>(classifier: &C, feedbacks: &[S]) -> Result<FeedbackReport>
where
    C: SentimentClassifier + ?Sized,
    S: AsRef<str>,
{
    validate_feedback(feedbacks)?;

    let classifications = feedbacks
        .iter()
        .map(|f| classifier.classify(f.as_ref()))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(FeedbackReport::from_classifications(classifications))
}
