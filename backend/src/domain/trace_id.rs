//! Correlation identifier shared by the logs and error bodies of one request.
//!
//! The identifier lives in Tokio task-local storage for the duration of a
//! request, so [`Error`](super::Error) constructors pick it up without it
//! being passed around. Spawned tasks do not inherit it; wrap their futures
//! in [`TraceId::scope`] when correlation matters.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use uuid::Uuid;

/// Header used both to accept an upstream identifier and to echo the one in
/// use back to the client.
pub const TRACE_ID_HEADER: &str = "trace-id";

task_local! {
    static CURRENT: TraceId;
}

/// UUID naming a single request.
///
/// ```
/// use users_backend::TraceId;
///
/// let upstream = "5f0c6b8e-8d3e-4c3a-9d2b-2f6a4f1d9e10";
/// assert_eq!(TraceId::for_request(Some(upstream)).to_string(), upstream);
/// assert!(TraceId::for_request(Some("gateway-42")).to_string() != "gateway-42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Reuse a well-formed upstream identifier or mint a fresh one.
    ///
    /// Values that are not UUIDs are dropped so clients cannot inject
    /// arbitrary text into logs.
    #[must_use]
    pub fn for_request(incoming: Option<&str>) -> Self {
        incoming
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or_else(|| Self(Uuid::new_v4()))
    }

    /// Identifier of the request currently being served, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Drive `fut` with `self` as the current identifier.
    pub async fn scope<Fut: Future>(self, fut: Fut) -> Fut::Output {
        CURRENT.scope(self, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
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
    use rstest::rstest;

    const UPSTREAM: &str = "5f0c6b8e-8d3e-4c3a-9d2b-2f6a4f1d9e10";

    #[rstest]
    #[case::exact(UPSTREAM)]
    #[case::padded(" 5f0c6b8e-8d3e-4c3a-9d2b-2f6a4f1d9e10 ")]
    #[case::uppercase("5F0C6B8E-8D3E-4C3A-9D2B-2F6A4F1D9E10")]
    fn adopts_upstream_uuids(#[case] incoming: &str) {
        assert_eq!(TraceId::for_request(Some(incoming)).to_string(), UPSTREAM);
    }

    #[rstest]
    #[case::absent(None)]
    #[case::free_text(Some("gateway-42"))]
    #[case::empty(Some(""))]
    fn mints_distinct_ids_otherwise(#[case] incoming: Option<&str>) {
        let first = TraceId::for_request(incoming);
        let second = TraceId::for_request(incoming);
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn scope_sets_and_clears_the_current_id() {
        let id = TraceId::for_request(None);

        let inside = id.scope(async { TraceId::current() }).await;

        assert_eq!(inside, Some(id));
        assert_eq!(TraceId::current(), None);
    }

    #[tokio::test]
    async fn spawned_tasks_start_without_an_id() {
        let id = TraceId::for_request(None);

        let spawned = id
            .scope(async { tokio::spawn(async { TraceId::current() }).await })
            .await
            .expect("task joins");

        assert_eq!(spawned, None);
    }
}
