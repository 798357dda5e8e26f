//! Per-request trace id held in task-local storage.
//!
//! `RequestTrace` opens the scope; anything running inside the request
//! future (handlers, extractors, error rendering) can read it back.

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

/// Value used outside any request scope.
pub const UNKNOWN: &str = "unknown";

/// Trace id of the current request, or `"unknown"`.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| UNKNOWN.to_string())
}

/// Run `future` with `trace_id` visible to [`trace_id()`].
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
