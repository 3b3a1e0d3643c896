//! Error handling for foresight-engine
//!
//! Engine commands return the structured `ExError` with the operation name
//! and request correlation attached.

use foresight_core::errors::{ExError, ForesightError};
use foresight_core_types::RequestContext;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Convert a core error into an `ExError` tagged with `op` and the request ids
pub fn command_error(op: &str, ctx: &RequestContext, err: ForesightError) -> ExError {
    let ex = ExError::from(err)
        .with_op(op)
        .with_request_id(ctx.request_id.clone());
    match &ctx.trace_id {
        Some(trace_id) => ex.with_trace_id(trace_id.clone()),
        None => ex,
    }
}
