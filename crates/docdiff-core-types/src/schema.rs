//! Canonical event names for structured logging
//!
//! Every operation logged through the `log_op_*` macros carries an `event`
//! field with one of these values, which the test capture layer matches on.

pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
