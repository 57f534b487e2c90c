use async_trait::async_trait;
use ripple_domain::{DomainError, Endpoint};
use std::net::SocketAddr;

/// Finds the authoritative nameservers for a domain by following referrals
/// down from the given root servers.
#[async_trait]
pub trait AuthoritativeDiscovery: Send + Sync {
    /// `domain` is fully qualified. Fails only when no server answered at
    /// some depth, a referral led nowhere, or the hop bound was exceeded.
    async fn discover(
        &self,
        domain: &str,
        root_servers: &[SocketAddr],
    ) -> Result<Vec<Endpoint>, DomainError>;
}
