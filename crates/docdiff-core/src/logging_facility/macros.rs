//! Operation logging macros
//!
//! Each macro emits one event tagged with the calling module, the operation
//! name and an event name from `docdiff_core_types::schema`. Extra
//! `tracing` fields may follow the required arguments. Callers need
//! `tracing` and `docdiff-core-types` in their dependencies.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_op_event {
    ($level:ident, $op:expr, $event:expr $(, $($field:tt)+)?) => {
        tracing::$level!(
            component = module_path!(),
            op = $op,
            event = $event
            $(, $($field)+)?
        )
    };
}

/// Log the start of an operation
///
/// ```
/// # use docdiff_core::log_op_start;
/// log_op_start!("aggregate_differences");
/// log_op_start!("aggregate_differences", base_len = 3);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)+)?) => {
        $crate::__log_op_event!(
            info,
            $op,
            docdiff_core_types::schema::EVENT_START
            $(, $($field)+)?
        );
    };
}

/// Log the successful end of an operation; `duration_ms` is required
///
/// ```
/// # use docdiff_core::log_op_end;
/// log_op_end!("aggregate_differences", duration_ms = 1, unique_len = 4);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)+)?) => {
        $crate::__log_op_event!(
            info,
            $op,
            docdiff_core_types::schema::EVENT_END,
            duration_ms = $duration
            $(, $($field)+)?
        );
    };
}

/// Log a failed operation with the error's kind and stable code
///
/// Accepts anything convertible into [`ExError`](crate::errors::ExError).
///
/// ```
/// # use docdiff_core::{log_op_error, errors::DocDiffError};
/// let err = DocDiffError::UnknownDifference { difference_id: "d1".to_string() };
/// log_op_error!("find_difference", err, duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)+)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__log_op_event!(
            error,
            $op,
            docdiff_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code()
            $(, $($field)+)?
        );
    }};
}
