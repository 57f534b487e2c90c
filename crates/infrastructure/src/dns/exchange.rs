use super::forwarding::{DnsResponse, MessageBuilder, ResponseParser};
use super::transport::Protocol;
use async_trait::async_trait;
use hickory_proto::rr::RecordType;
use ripple_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;

/// Sends a single non-recursive question to one server.
#[async_trait]
pub trait DnsExchange: Send + Sync {
    async fn query(
        &self,
        server: SocketAddr,
        domain: &str,
        record_type: RecordType,
        timeout: Duration,
    ) -> Result<DnsResponse, DomainError>;
}

/// UDP first, TCP when the UDP answer comes back truncated.
#[derive(Debug, Default, Clone, Copy)]
pub struct WireExchange;

impl WireExchange {
    pub fn new() -> Self {
        Self
    }

    async fn send_and_parse(
        protocol: Protocol,
        server: SocketAddr,
        query_id: u16,
        bytes: &[u8],
        timeout: Duration,
    ) -> Result<DnsResponse, DomainError> {
        let raw = protocol.exchange(server, bytes, timeout).await?;
        let response = ResponseParser::parse(&raw)?;

        if response.id != query_id {
            debug!(
                server = %server,
                protocol = protocol.as_str(),
                expected = query_id,
                received = response.id,
                "Response ID mismatch"
            );
            return Err(DomainError::InvalidDnsResponse(format!(
                "response id {} does not match query id {}",
                response.id, query_id
            )));
        }
        Ok(response)
    }
}

#[async_trait]
impl DnsExchange for WireExchange {
    async fn query(
        &self,
        server: SocketAddr,
        domain: &str,
        record_type: RecordType,
        timeout: Duration,
    ) -> Result<DnsResponse, DomainError> {
        let (id, bytes) = MessageBuilder::build_query(domain, record_type, false)?;

        let response =
            Self::send_and_parse(Protocol::Udp, server, id, &bytes, timeout).await?;
        if !response.truncated {
            return Ok(response);
        }

        debug!(server = %server, domain = %domain, "Truncated UDP response, retrying over TCP");
        Self::send_and_parse(Protocol::Tcp, server, id, &bytes, timeout).await
    }
}
