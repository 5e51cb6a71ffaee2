//! Correlation id for one gateway request.
//!
//! The `Trace` middleware mints a [`TraceId`] per inbound call and runs the
//! handler inside [`TraceId::scope`]. Domain errors built anywhere below the
//! handler (tenant admin mapping, provider refusals, provisioning failures)
//! pick it up through [`TraceId::current`] so the `traceId` in the error body
//! matches the `trace-id` response header and the log lines of that request.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use uuid::Uuid;

task_local! {
    static CURRENT: TraceId;
}

/// UUID v4 naming a single gateway request.
///
/// # Examples
/// ```
/// use auth_gateway::TraceId;
///
/// let id: TraceId = "6f1c2a9e-3b4d-4e5f-8a7b-9c0d1e2f3a4b".parse().unwrap();
/// assert_eq!(id.to_string(), "6f1c2a9e-3b4d-4e5f-8a7b-9c0d1e2f3a4b");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Id of the request being served by this task, if any.
    ///
    /// Spawned tasks start outside the scope; wrap them in [`TraceId::scope`]
    /// to keep errors raised there correlated.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Run `fut` as part of the request named by `trace_id`.
    ///
    /// # Examples
    /// ```
    /// use auth_gateway::TraceId;
    /// use auth_gateway::domain::Error;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let id: TraceId = "6f1c2a9e-3b4d-4e5f-8a7b-9c0d1e2f3a4b".parse().unwrap();
    /// let err = TraceId::scope(id, async { Error::unauthorized("refused") }).await;
    /// assert_eq!(err.trace_id(), Some("6f1c2a9e-3b4d-4e5f-8a7b-9c0d1e2f3a4b"));
    /// # });
    /// ```
    pub async fn scope<Fut: Future>(trace_id: TraceId, fut: Fut) -> Fut::Output {
        CURRENT.scope(trace_id, fut).await
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
