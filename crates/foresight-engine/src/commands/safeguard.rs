//! Reputation safeguard and guest feedback report commands
//!
//! The sentiment classifier is injected by the caller. A classifier failure
//! is returned as `ExternalService` and is not retried.

use crate::commands::elapsed_ms;
use crate::errors::{command_error, Result};
use foresight_core::ops::sentiment_ops;
use foresight_core::{log_op_end, log_op_error, log_op_start};
use foresight_core::{FeedbackReport, ReputationScore, SentimentClassifier};
use foresight_core_types::schema::{OP_ASSESS_REPUTATION, OP_FEEDBACK_REPORT};
use foresight_core_types::RequestContext;

/// Score the reputational impact of a decision text
///
/// # Errors
///
/// - `ExternalService`: the classifier failed
pub fn assess_reputation<C>(
    ctx: &RequestContext,
    classifier: &C,
    decision_text: &str,
) -> Result<ReputationScore>
where
    C: SentimentClassifier + ?Sized,
{
    log_op_start!(OP_ASSESS_REPUTATION, ctx);
    let start = std::time::Instant::now();

    let score = sentiment_ops::assess_reputation(classifier, decision_text).map_err(|e| {
        let err = command_error(OP_ASSESS_REPUTATION, ctx, e);
        log_op_error!(
            OP_ASSESS_REPUTATION,
            ctx,
            err.clone(),
            duration_ms = elapsed_ms(start)
        );
        err
    })?;

    log_op_end!(
        OP_ASSESS_REPUTATION,
        ctx,
        duration_ms = elapsed_ms(start),
        reputation = %score
    );
    Ok(score)
}

/// Classify guest feedback and summarise the label distribution
///
/// # Errors
///
/// - `InvalidInput`: the list is empty or contains a blank entry
/// - `ExternalService`: the classifier failed
pub fn feedback_report<C, S>(
    ctx: &RequestContext,
    classifier: &C,
    feedbacks: &[S],
) -> Result<FeedbackReport>
where
    C: SentimentClassifier + ?Sized,
    S: AsRef<str>,
{
    log_op_start!(
        OP_FEEDBACK_REPORT,
        ctx,
        feedback_count = feedbacks.len() as u64
    );
    let start = std::time::Instant::now();

    let report = sentiment_ops::feedback_report(classifier, feedbacks).map_err(|e| {
        let err = command_error(OP_FEEDBACK_REPORT, ctx, e);
        log_op_error!(
            OP_FEEDBACK_REPORT,
            ctx,
            err.clone(),
            duration_ms = elapsed_ms(start)
        );
        err
    })?;

    tracing::info!(label_share = ?report.label_share, "sentiment summary");
    log_op_end!(
        OP_FEEDBACK_REPORT,
        ctx,
        duration_ms = elapsed_ms(start)
    );
    Ok(report)
}
