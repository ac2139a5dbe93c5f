//! Request correlation identifier.
//!
//! Each HTTP request runs inside a Tokio task-local scope carrying a
//! [`TraceId`]. Errors built while the scope is active pick the identifier up
//! automatically, so log lines and error bodies can be matched to the
//! `trace-id` response header.
//!
//! Task-locals do not follow work onto spawned tasks; wrap such futures in
//! [`TraceId::scope`] to keep the correlation.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use uuid::Uuid;

/// Response header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

task_local! {
    static CURRENT_TRACE_ID: TraceId;
}

/// Per-request trace identifier.
///
/// # Examples
/// ```
/// use travel_backend::domain::TraceId;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let id: TraceId = "00000000-0000-0000-0000-000000000000".parse().expect("uuid");
/// let seen = TraceId::scope(id, async { TraceId::current() }).await;
/// assert_eq!(seen, Some(id));
/// # });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Draw a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Identifier of the enclosing request scope, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT_TRACE_ID.try_with(|id| *id).ok()
    }

    /// Run `fut` with `trace_id` installed as the current identifier.
    pub async fn scope<Fut>(trace_id: Self, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        CURRENT_TRACE_ID.scope(trace_id, fut).await
    }

    /// Run the closure `f` with `trace_id` installed as the current identifier.
    pub fn sync_scope<F, R>(trace_id: Self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        CURRENT_TRACE_ID.sync_scope(trace_id, f)
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scope_exposes_identifier_to_inner_future() {
        let expected = TraceId::generate();
        let observed = TraceId::scope(expected, async { TraceId::current() }).await;
        assert_eq!(observed, Some(expected));
    }

    #[tokio::test]
    async fn no_identifier_outside_a_scope() {
        assert!(TraceId::current().is_none());
    }

    #[test]
    fn parses_hyphenated_uuid() {
        let uuid = Uuid::new_v4();
        let parsed: TraceId = uuid.to_string().parse().expect("valid uuid");
        assert_eq!(parsed, TraceId::from_uuid(uuid));
        assert_eq!(parsed.to_string(), uuid.to_string());
    }

    #[test]
    fn rejects_garbage() {
        assert!("not-a-trace".parse::<TraceId>().is_err());
    }
}
