use super::exchange::DnsExchange;
use super::forwarding::RecordTypeMapper;
use super::matcher::RecordMatcher;
use async_trait::async_trait;
use hickory_proto::rr::Name;
use hickory_resolver::config::{NameServerConfig, ResolveHosts, ResolverConfig};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::proto::xfer::Protocol;
use hickory_resolver::{ResolveError, TokioResolver};
use ripple_application::ports::TargetChecker;
use ripple_domain::MatchCriteria;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Single-attempt checks against authoritative servers and recursive
/// resolvers. Every failure is logged at debug level and reported as no
/// match.
pub struct HickoryTargetChecker {
    exchange: Arc<dyn DnsExchange>,
}

impl HickoryTargetChecker {
    pub fn new(exchange: Arc<dyn DnsExchange>) -> Self {
        Self { exchange }
    }

    /// A fresh resolver per check so no answer is served from an earlier
    /// lookup's cache.
    fn build_resolver(
        resolver: Option<SocketAddr>,
        timeout: Duration,
    ) -> Result<TokioResolver, ResolveError> {
        let mut builder = match resolver {
            Some(addr) => {
                let mut config = ResolverConfig::new();
                config.add_name_server(NameServerConfig::new(addr, Protocol::Udp));
                config.add_name_server(NameServerConfig::new(addr, Protocol::Tcp));
                let mut builder =
                    TokioResolver::builder_with_config(config, TokioConnectionProvider::default());
                builder.options_mut().use_hosts_file = ResolveHosts::Never;
                builder
            }
            None => TokioResolver::builder_tokio()?,
        };

        let options = builder.options_mut();
        options.timeout = timeout;
        options.attempts = 1;
        Ok(builder.build())
    }
}

#[async_trait]
impl TargetChecker for HickoryTargetChecker {
    async fn check_authoritative(
        &self,
        server: SocketAddr,
        domain: &str,
        criteria: &MatchCriteria,
        timeout: Duration,
    ) -> Option<String> {
        let record_type = RecordTypeMapper::to_hickory(criteria.record_type);
        match self.exchange.query(server, domain, record_type, timeout).await {
            Ok(response) => RecordMatcher::find_match(&response.answers, criteria),
            Err(e) => {
                debug!(server = %server, domain = %domain, error = %e, "Authoritative check failed");
                None
            }
        }
    }

    async fn check_resolver(
        &self,
        resolver: Option<SocketAddr>,
        domain: &str,
        criteria: &MatchCriteria,
        timeout: Duration,
    ) -> Option<String> {
        let label = resolver.map_or_else(|| "system".to_string(), |addr| addr.to_string());

        let client = match Self::build_resolver(resolver, timeout) {
            Ok(client) => client,
            Err(e) => {
                debug!(resolver = %label, error = %e, "Could not build resolver");
                return None;
            }
        };
        let name = match Name::from_str(domain) {
            Ok(name) => name,
            Err(e) => {
                debug!(domain = %domain, error = %e, "Invalid lookup name");
                return None;
            }
        };

        let record_type = RecordTypeMapper::to_hickory(criteria.record_type);
        match tokio::time::timeout(timeout, client.lookup(name, record_type)).await {
            Ok(Ok(lookup)) => RecordMatcher::find_match(lookup.records(), criteria),
            Ok(Err(e)) => {
                debug!(resolver = %label, domain = %domain, error = %e, "Resolver lookup failed");
                None
            }
            Err(_) => {
                debug!(resolver = %label, domain = %domain, "Resolver lookup timed out");
                None
            }
        }
    }
}
