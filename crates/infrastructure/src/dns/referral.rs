use super::exchange::DnsExchange;
use super::forwarding::DnsResponse;
use super::lookup::AddressLookup;
use async_trait::async_trait;
use hickory_proto::rr::{Name, RecordType};
use ripple_application::ports::AuthoritativeDiscovery;
use ripple_domain::{DomainError, Endpoint, DNS_PORT};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const MAX_REFERRAL_DEPTH: usize = 10;

/// Iterative referral walk from the root servers to the zone that answers
/// authoritatively for a domain.
///
/// Candidates at each depth are tried one at a time in list order and the
/// first server that answers wins. Nameserver names are resolved from glue
/// first and only fall back to a forward lookup when no glue is present.
pub struct ReferralWalker {
    exchange: Arc<dyn DnsExchange>,
    lookup: Arc<dyn AddressLookup>,
    query_timeout: Duration,
}

impl ReferralWalker {
    pub fn new(
        exchange: Arc<dyn DnsExchange>,
        lookup: Arc<dyn AddressLookup>,
        query_timeout: Duration,
    ) -> Self {
        Self {
            exchange,
            lookup,
            query_timeout,
        }
    }

    pub async fn walk(
        &self,
        domain: &str,
        root_servers: &[SocketAddr],
    ) -> Result<Vec<Endpoint>, DomainError> {
        let mut candidates = root_servers.to_vec();

        for depth in 0..MAX_REFERRAL_DEPTH {
            let response = self
                .first_response(&candidates, domain, RecordType::A)
                .await
                .ok_or(DomainError::NoResponse { depth })?;

            if response.authoritative {
                debug!(depth, domain = %domain, "Reached authoritative zone");
                return Ok(self.enumerate_nameservers(domain, &candidates).await);
            }

            let names = response.referral_names();
            let next: Vec<SocketAddr> = self
                .resolve_names(&response, &names)
                .await
                .into_iter()
                .map(|(_, addr)| addr)
                .collect();

            if next.is_empty() {
                return Err(DomainError::NoReferral { depth });
            }

            debug!(depth, domain = %domain, servers = next.len(), "Following referral");
            candidates = next;
        }

        Err(DomainError::MaxDepthExceeded(MAX_REFERRAL_DEPTH))
    }

    /// Asks each candidate in order and returns the first reply of any kind.
    async fn first_response(
        &self,
        candidates: &[SocketAddr],
        domain: &str,
        record_type: RecordType,
    ) -> Option<DnsResponse> {
        for &server in candidates {
            match self
                .exchange
                .query(server, domain, record_type, self.query_timeout)
                .await
            {
                Ok(response) => {
                    if response.is_server_error() {
                        debug!(server = %server, rcode = ?response.rcode, "Accepting error reply from first responder");
                    }
                    return Some(response);
                }
                Err(e) if e.is_transport_error() => {
                    debug!(server = %server, record_type = %record_type, error = %e, "Nameserver did not answer");
                }
                Err(e) => {
                    warn!(server = %server, record_type = %record_type, error = %e, "Discarding malformed reply");
                }
            }
        }
        None
    }

    /// Names that cannot be resolved are skipped. Duplicates are kept.
    async fn resolve_names(&self, response: &DnsResponse, names: &[Name]) -> Vec<(Name, SocketAddr)> {
        let mut resolved = Vec::with_capacity(names.len());

        for name in names {
            if let Some(ip) = response.glue_for(name) {
                resolved.push((name.clone(), SocketAddr::new(IpAddr::V4(ip), DNS_PORT)));
                continue;
            }

            match self.lookup.lookup_ip(&name.to_utf8()).await {
                Ok(ip) => resolved.push((name.clone(), SocketAddr::new(ip, DNS_PORT))),
                Err(e) => debug!(nameserver = %name, error = %e, "Skipping unresolvable nameserver"),
            }
        }
        resolved
    }

    /// NS query against the zone's servers. When that yields nothing usable
    /// the current candidates are returned as-is; they answered for the zone
    /// but are not guaranteed to be its full authoritative set.
    async fn enumerate_nameservers(&self, domain: &str, candidates: &[SocketAddr]) -> Vec<Endpoint> {
        let endpoints: Vec<Endpoint> = match self
            .first_response(candidates, domain, RecordType::NS)
            .await
        {
            Some(response) => self
                .resolve_names(&response, &response.nameserver_names())
                .await
                .into_iter()
                .map(|(name, addr)| Endpoint::new(name.to_utf8().trim_end_matches('.'), addr))
                .collect(),
            None => Vec::new(),
        };

        if endpoints.is_empty() {
            warn!(
                domain = %domain,
                servers = candidates.len(),
                "NS enumeration failed, using responding servers as authoritative set"
            );
            return candidates.iter().copied().map(Endpoint::from_address).collect();
        }

        info!(domain = %domain, servers = endpoints.len(), "Authoritative nameservers resolved");
        endpoints
    }
}

#[async_trait]
impl AuthoritativeDiscovery for ReferralWalker {
    async fn discover(
        &self,
        domain: &str,
        root_servers: &[SocketAddr],
    ) -> Result<Vec<Endpoint>, DomainError> {
        self.walk(domain, root_servers).await
    }
}
