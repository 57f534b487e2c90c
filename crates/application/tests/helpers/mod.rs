#![allow(dead_code)]

use async_trait::async_trait;
use ripple_application::ports::{AuthoritativeDiscovery, TargetChecker};
use ripple_domain::{DomainError, Endpoint, MatchCriteria, ProgressEvent, RecordType, RunConfig};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::mpsc;

// ============================================================================
// Mock AuthoritativeDiscovery
// ============================================================================

pub struct MockDiscovery {
    result: Result<Vec<Endpoint>, DomainError>,
    calls: AtomicU64,
}

impl MockDiscovery {
    pub fn returning(endpoints: Vec<Endpoint>) -> Self {
        Self {
            result: Ok(endpoints),
            calls: AtomicU64::new(0),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            result: Err(error),
            calls: AtomicU64::new(0),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl AuthoritativeDiscovery for MockDiscovery {
    async fn discover(
        &self,
        _domain: &str,
        _root_servers: &[SocketAddr],
    ) -> Result<Vec<Endpoint>, DomainError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.result.clone()
    }
}

// ============================================================================
// Scripted TargetChecker
// ============================================================================

/// How a scripted server answers each call.
#[derive(Debug, Clone)]
pub enum Reply {
    Never,
    Always(String),
    /// No match until the n-th call (1-based), then match every time.
    FromCall(u64, String),
    /// Waits before matching.
    Delayed(Duration, String),
}

/// Keyed by server address; `None` is the system resolver.
pub struct ScriptedChecker {
    replies: Mutex<HashMap<Option<SocketAddr>, Reply>>,
    calls: Mutex<HashMap<Option<SocketAddr>, u64>>,
    fallback: Reply,
}

impl ScriptedChecker {
    pub fn new(fallback: Reply) -> Self {
        Self {
            replies: Mutex::new(HashMap::new()),
            calls: Mutex::new(HashMap::new()),
            fallback,
        }
    }

    pub fn with_reply(self, server: Option<SocketAddr>, reply: Reply) -> Self {
        self.replies.lock().unwrap().insert(server, reply);
        self
    }

    pub fn calls_to(&self, server: Option<SocketAddr>) -> u64 {
        self.calls.lock().unwrap().get(&server).copied().unwrap_or(0)
    }

    async fn answer(&self, server: Option<SocketAddr>) -> Option<String> {
        let call = {
            let mut calls = self.calls.lock().unwrap();
            let count = calls.entry(server).or_insert(0);
            *count += 1;
            *count
        };
        let reply = self
            .replies
            .lock()
            .unwrap()
            .get(&server)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone());

        match reply {
            Reply::Never => None,
            Reply::Always(record) => Some(record),
            Reply::FromCall(n, record) => (call >= n).then_some(record),
            Reply::Delayed(delay, record) => {
                tokio::time::sleep(delay).await;
                Some(record)
            }
        }
    }
}

#[async_trait]
impl TargetChecker for ScriptedChecker {
    async fn check_authoritative(
        &self,
        server: SocketAddr,
        _domain: &str,
        _criteria: &MatchCriteria,
        _timeout: Duration,
    ) -> Option<String> {
        self.answer(Some(server)).await
    }

    async fn check_resolver(
        &self,
        resolver: Option<SocketAddr>,
        _domain: &str,
        _criteria: &MatchCriteria,
        _timeout: Duration,
    ) -> Option<String> {
        self.answer(resolver).await
    }
}

// ============================================================================
// Builders
// ============================================================================

pub const RECORD: &str = "A 93.184.216.34";

pub fn addr(s: &str) -> SocketAddr {
    s.parse().unwrap()
}

pub fn ns(name: &str, ip: &str) -> Endpoint {
    Endpoint::new(name, addr(ip))
}

pub fn run_config(public_resolvers: Vec<SocketAddr>) -> RunConfig {
    RunConfig::new(
        "example.com",
        MatchCriteria::new(RecordType::A, "93.184.216.34"),
    )
    .unwrap()
    .with_poll_interval(Duration::from_secs(5))
    .with_deadline(Duration::from_secs(60))
    .with_root_servers(vec![addr("198.41.0.4:53")])
    .with_public_resolvers(public_resolvers)
}

/// Collects everything left in the channel once all senders are gone.
pub async fn drain(mut rx: mpsc::Receiver<ProgressEvent>) -> Vec<ProgressEvent> {
    let mut events = Vec::new();
    while let Some(event) = rx.recv().await {
        events.push(event);
    }
    events
}

pub fn assert_single_terminal_last(events: &[ProgressEvent]) {
    let terminals = events.iter().filter(|e| e.is_terminal()).count();
    assert_eq!(terminals, 1, "expected exactly one terminal event: {:?}", events);
    assert!(
        events.last().is_some_and(|e| e.is_terminal()),
        "terminal event must be last: {:?}",
        events
    );
}

pub fn propagated_names(events: &[ProgressEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|e| match e {
            ProgressEvent::TargetPropagated { endpoint, .. } => Some(endpoint.name.clone()),
            _ => None,
        })
        .collect()
}
