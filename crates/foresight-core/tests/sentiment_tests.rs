// Reputation safeguard and feedback reports over an injected classifier.

mod common;

use common::{offline_classifier, polarity_stub};
use foresight_core::ops::{assess_reputation, feedback_report, ClassifierError};
use foresight_core::{
    Classification, ExError, ExErrorKind, ForesightError, ReputationScore, SentimentClassifier,
    SentimentLabel,
};

/// Struct-based classifier, as a model adapter would be written
struct FixedLabel(&'static str);

impl SentimentClassifier for FixedLabel {
    fn classify(&self, _text: &str) -> Result<Classification, ClassifierError> {
        Ok(Classification::new(self.0, 0.5))
    }
}

#[test]
fn test_reputation_high_for_positive_text() {
    let score = assess_reputation(&polarity_stub, "A great plan for our guests").unwrap();
    assert_eq!(score, ReputationScore::High);
}

#[test]
fn test_reputation_low_for_negative_text() {
    let score = assess_reputation(
        &polarity_stub,
        "Expand production to regions with lower labor costs",
    )
    .unwrap();
    assert_eq!(score, ReputationScore::Low);
}

#[test]
fn test_reputation_low_for_neutral_label() {
    let score = assess_reputation(&FixedLabel("NEUTRAL"), "anything").unwrap();
    assert_eq!(score, ReputationScore::Low);
}

#[test]
fn test_trait_object_classifier() {
    let classifier: Box<dyn SentimentClassifier> = Box::new(FixedLabel("POSITIVE"));
    let score = assess_reputation(&*classifier, "anything").unwrap();
    assert_eq!(score, ReputationScore::High);
}

#[test]
fn test_classifier_failure_is_external_service() {
    let err = assess_reputation(&offline_classifier, "anything").unwrap_err();
    let ex: ExError = err.into();
    assert_eq!(ex.kind(), ExErrorKind::ExternalService);
    assert!(ex.message().contains("unreachable"));
}

#[test]
fn test_feedback_report_shares_sum_to_hundred() {
    let feedbacks = [
        "Good breakfast",
        "Cold room",
        "Great staff",
        "Noisy hallway",
        "Slow check-in",
    ];
    let report = feedback_report(&polarity_stub, &feedbacks).unwrap();

    assert_eq!(report.classifications.len(), 5);
    assert_eq!(report.share_of(&SentimentLabel::Positive), 40.0);
    assert_eq!(report.share_of(&SentimentLabel::Negative), 60.0);

    let total: f64 = report.label_share.values().sum();
    assert!((total - 100.0).abs() < 1e-9);
}

#[test]
fn test_feedback_report_rejects_blank_entry() {
    let err = feedback_report(&polarity_stub, &["Good", "\t"]).unwrap_err();
    assert_eq!(err, ForesightError::BlankFeedback { index: 1 });

    let ex: ExError = err.into();
    assert_eq!(ex.kind(), ExErrorKind::InvalidInput);
}

#[test]
fn test_feedback_report_rejects_empty_list() {
    let feedbacks: Vec<String> = Vec::new();
    let err = feedback_report(&polarity_stub, &feedbacks).unwrap_err();
    assert_eq!(err, ForesightError::EmptyFeedback);
}
