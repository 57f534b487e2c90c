use std::net::SocketAddr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("no response from nameservers at depth {depth}")]
    NoResponse { depth: usize },

    #[error("no more referrals at depth {depth}")]
    NoReferral { depth: usize },

    #[error("max referral depth of {0} exceeded")]
    MaxDepthExceeded(usize),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("unsupported record type: {0}")]
    InvalidRecordType(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Timeout waiting for {server}")]
    TransportTimeout { server: SocketAddr },

    #[error("Transport error talking to {server}: {reason}")]
    TransportError { server: SocketAddr, reason: String },

    #[error("Lookup failed for {host}: {reason}")]
    LookupFailed { host: String, reason: String },

    #[error("{0}")]
    Validation(String),
}

impl DomainError {
    /// Errors raised while walking the delegation chain. These end a run.
    pub fn is_discovery_failure(&self) -> bool {
        matches!(
            self,
            DomainError::NoResponse { .. }
                | DomainError::NoReferral { .. }
                | DomainError::MaxDepthExceeded(_)
        )
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. } | DomainError::TransportError { .. }
        )
    }
}
