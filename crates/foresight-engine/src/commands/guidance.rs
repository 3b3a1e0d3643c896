//! Canned guidance commands: memory recall, leadership style, advisor
//!
//! These lookups are total, so the handlers only add boundary logging.

use crate::commands::elapsed_ms;
use foresight_core::ops::{advisor, leadership};
use foresight_core::{log_op_end, log_op_start};
use foresight_core::{MemoryBank, MemoryEntry};
use foresight_core_types::schema::{OP_ADVISE, OP_LEAD, OP_RECALL};
use foresight_core_types::RequestContext;

/// Past decisions whose keyword occurs in `description`
pub fn recall(ctx: &RequestContext, bank: &MemoryBank, description: &str) -> Vec<MemoryEntry> {
    log_op_start!(OP_RECALL, ctx);
    let start = std::time::Instant::now();

    let hits: Vec<MemoryEntry> = bank.retrieve(description).into_iter().cloned().collect();

    log_op_end!(
        OP_RECALL,
        ctx,
        duration_ms = elapsed_ms(start),
        match_count = hits.len() as u64
    );
    hits
}

/// Decision pattern for a leadership style; unknown styles get the fallback
pub fn lead(ctx: &RequestContext, style: &str) -> &'static str {
    log_op_start!(OP_LEAD, ctx, style = style);
    let start = std::time::Instant::now();

    let pattern = leadership::select(style);

    log_op_end!(
        OP_LEAD,
        ctx,
        duration_ms = elapsed_ms(start),
        fallback = pattern == leadership::DEFAULT_STRATEGY
    );
    pattern
}

/// Advice for a topic (case-insensitive); unknown topics get the fallback
pub fn advise(ctx: &RequestContext, topic: &str) -> &'static str {
    log_op_start!(OP_ADVISE, ctx, topic = topic);
    let start = std::time::Instant::now();

    let advice = advisor::advise(topic);

    log_op_end!(
        OP_ADVISE,
        ctx,
        duration_ms = elapsed_ms(start),
        fallback = advice == advisor::FALLBACK_ADVICE
    );
    advice
}
