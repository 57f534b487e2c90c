use async_trait::async_trait;
use ripple_domain::DomainError;
use std::net::IpAddr;
use std::time::Duration;

/// Forward address lookup for nameserver names that came without glue.
#[async_trait]
pub trait AddressLookup: Send + Sync {
    async fn lookup_ip(&self, host: &str) -> Result<IpAddr, DomainError>;
}

/// Uses the operating system resolver. Prefers IPv4 when both families
/// come back.
#[derive(Debug, Clone)]
pub struct SystemAddressLookup {
    timeout: Duration,
}

impl SystemAddressLookup {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl AddressLookup for SystemAddressLookup {
    async fn lookup_ip(&self, host: &str) -> Result<IpAddr, DomainError> {
        let host = host.trim_end_matches('.');
        let failed = |reason: String| DomainError::LookupFailed {
            host: host.to_string(),
            reason,
        };

        let addrs: Vec<IpAddr> = tokio::time::timeout(self.timeout, tokio::net::lookup_host((host, 0)))
            .await
            .map_err(|_| failed("timed out".into()))?
            .map_err(|e| failed(e.to_string()))?
            .map(|addr| addr.ip())
            .collect();

        addrs
            .iter()
            .find(|ip| ip.is_ipv4())
            .or_else(|| addrs.first())
            .copied()
            .ok_or_else(|| failed("no addresses".into()))
    }
}
