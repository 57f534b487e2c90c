#![allow(dead_code)]
use async_trait::async_trait;
use hickory_proto::rr::RecordType;
use ripple_domain::DomainError;
use ripple_infrastructure::dns::forwarding::DnsResponse;
use ripple_infrastructure::dns::{AddressLookup, DnsExchange};
use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::Mutex;
use std::time::Duration;

// ============================================================================
// Scripted DnsExchange
// ============================================================================

/// Answers by (server, question type). Anything unscripted times out.
#[derive(Default)]
pub struct ScriptedExchange {
    replies: Mutex<HashMap<(SocketAddr, RecordType), Result<DnsResponse, DomainError>>>,
    calls: Mutex<Vec<(SocketAddr, RecordType)>>,
}

impl ScriptedExchange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(self, server: SocketAddr, record_type: RecordType, response: DnsResponse) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert((server, record_type), Ok(response));
        self
    }

    pub fn failing(self, server: SocketAddr, record_type: RecordType, error: DomainError) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert((server, record_type), Err(error));
        self
    }

    pub fn calls(&self) -> Vec<(SocketAddr, RecordType)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsExchange for ScriptedExchange {
    async fn query(
        &self,
        server: SocketAddr,
        _domain: &str,
        record_type: RecordType,
        _timeout: Duration,
    ) -> Result<DnsResponse, DomainError> {
        self.calls.lock().unwrap().push((server, record_type));
        self.replies
            .lock()
            .unwrap()
            .get(&(server, record_type))
            .cloned()
            .unwrap_or(Err(DomainError::TransportTimeout { server }))
    }
}

// ============================================================================
// Counting AddressLookup
// ============================================================================

#[derive(Default)]
pub struct CountingLookup {
    hosts: HashMap<String, IpAddr>,
    calls: Mutex<Vec<String>>,
}

impl CountingLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: &str, ip: [u8; 4]) -> Self {
        self.hosts.insert(host.to_string(), IpAddr::from(ip));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AddressLookup for CountingLookup {
    async fn lookup_ip(&self, host: &str) -> Result<IpAddr, DomainError> {
        let host = host.trim_end_matches('.').to_string();
        self.calls.lock().unwrap().push(host.clone());
        self.hosts
            .get(&host)
            .copied()
            .ok_or(DomainError::LookupFailed {
                host,
                reason: "no such host".into(),
            })
    }
}
