//! Field keys, event names and operation names shared by the logging macros,
//! the engine commands and tests that assert on captured events

// Keys present on every boundary event
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_TRACE_ID: &str = "trace_id";
pub const FIELD_DURATION_MS: &str = "duration_ms";

pub const FIELD_SCENARIO_COUNT: &str = "scenario_count";
pub const FIELD_SEED: &str = "seed";
pub const FIELD_MATCH_COUNT: &str = "match_count";
/// Set on lookup end events when the fallback answer was returned
pub const FIELD_FALLBACK: &str = "fallback";
pub const FIELD_REPUTATION: &str = "reputation";
pub const FIELD_FEEDBACK_COUNT: &str = "feedback_count";

pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

pub const OP_SIMULATE: &str = "simulate";
pub const OP_RECALL: &str = "recall";
pub const OP_LEAD: &str = "lead";
pub const OP_ADVISE: &str = "advise";
pub const OP_ASSESS_REPUTATION: &str = "assess_reputation";
pub const OP_FEEDBACK_REPORT: &str = "feedback_report";

/// Every engine operation name
pub const ALL_OPS: [&str; 6] = [
    OP_SIMULATE,
    OP_RECALL,
    OP_LEAD,
    OP_ADVISE,
    OP_ASSESS_REPUTATION,
    OP_FEEDBACK_REPORT,
];
