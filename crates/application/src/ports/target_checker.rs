use async_trait::async_trait;
use ripple_domain::MatchCriteria;
use std::net::SocketAddr;
use std::time::Duration;

/// One read-only, single-attempt check against one server.
///
/// Returns the matched record rendered for display, or `None` when nothing
/// matched. Network failures are "no match" for that attempt.
#[async_trait]
pub trait TargetChecker: Send + Sync {
    /// Direct non-recursive query to an authoritative server.
    async fn check_authoritative(
        &self,
        server: SocketAddr,
        domain: &str,
        criteria: &MatchCriteria,
        timeout: Duration,
    ) -> Option<String>;

    /// Recursive lookup through `resolver`, or through the system resolver
    /// when `resolver` is `None`.
    async fn check_resolver(
        &self,
        resolver: Option<SocketAddr>,
        domain: &str,
        criteria: &MatchCriteria,
        timeout: Duration,
    ) -> Option<String>;
}
