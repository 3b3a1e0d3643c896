//! Boundary logging macros
//!
//! Each macro takes the operation name and the caller's `RequestContext`,
//! so every boundary event carries `component`, `op`, `event`,
//! `request_id` and (when set) `trace_id`. Extra fields follow as in
//! `tracing::info!`.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_op_event {
    ($level:ident, $op:expr, $ctx:expr, $event:ident, $($field:tt)*) => {
        tracing::$level!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::$event,
            request_id = %$ctx.request_id,
            trace_id = $ctx.trace_id.as_ref().map(|t| t.as_str()),
            $($field)*
        )
    };
}

/// Log the start of an operation
///
/// ```
/// # use foresight_core::log_op_start;
/// # use foresight_core_types::RequestContext;
/// let ctx = RequestContext::new();
/// log_op_start!("simulate", ctx);
/// log_op_start!("simulate", ctx, scenario_count = 10, seed = 42u64);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr, $ctx:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(info, $op, $ctx, EVENT_START, $($($field)*)?)
    };
}

/// Log the successful end of an operation
///
/// ```
/// # use foresight_core::log_op_end;
/// # use foresight_core_types::RequestContext;
/// let ctx = RequestContext::new();
/// log_op_end!("recall", ctx, duration_ms = 3u64, match_count = 1u64);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, $ctx:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(
            info, $op, $ctx, EVENT_END,
            duration_ms = $duration, $($($field)*)?
        )
    };
}

/// Log an operation error
///
/// `$err` is anything convertible into `ExError`; its kind and stable code
/// are recorded as `err_kind` / `err_code`.
///
/// ```
/// # use foresight_core::{log_op_error, errors::ForesightError};
/// # use foresight_core_types::RequestContext;
/// let ctx = RequestContext::new();
/// let err = ForesightError::InvalidScenarioCount { count: 0 };
/// log_op_error!("simulate", ctx, err, duration_ms = 1u64);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $ctx:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__log_op_event!(
            error, $op, $ctx, EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            $($($field)*)?
        )
    }};
}
