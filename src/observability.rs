//! Logging infrastructure for rowmap.
//!
//! rowmap uses `tracing` for structured logging. All events use target
//! "rowmap" and include an `event` field for filtering.
//!
//! rowmap never initializes a global subscriber. Applications configure
//! tracing via `tracing_subscriber` or similar.
//!
//! ## Conventions
//!
//! - `event`: snake_case event name (required)
//! - `component`: subsystem, either "query" or "db"
//! - Use `%` for Display, `?` for Debug formatting
//! - Never log argument values, they may carry user data

/// Target for all rowmap log events.
pub(crate) const ROWMAP_TARGET: &str = "rowmap";

/// Macro for debug-level log events.
///
/// # Example
/// ```ignore
/// log_debug!(
///     component = "query",
///     event = "statement_built",
///     table = %table,
///     args = args.len(),
/// );
/// ```
macro_rules! log_debug {
    ($($field:tt)*) => {
        ::tracing::debug!(target: $crate::observability::ROWMAP_TARGET, $($field)*)
    };
}

/// Macro for trace-level log events.
macro_rules! log_trace {
    ($($field:tt)*) => {
        ::tracing::trace!(target: $crate::observability::ROWMAP_TARGET, $($field)*)
    };
}

/// Macro for warn-level log events.
macro_rules! log_warn {
    ($($field:tt)*) => {
        ::tracing::warn!(target: $crate::observability::ROWMAP_TARGET, $($field)*)
    };
}

pub(crate) use log_debug;
pub(crate) use log_trace;
pub(crate) use log_warn;
