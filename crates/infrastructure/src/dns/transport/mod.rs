//! Raw message exchange with a single nameserver.

pub mod tcp;
pub mod udp;

use ripple_domain::DomainError;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;

/// Wire protocol used for one query/reply exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Udp,
    Tcp,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Udp => "UDP",
            Protocol::Tcp => "TCP",
        }
    }

    /// Sends `message` to `server` and returns the raw reply. The timeout
    /// covers the whole exchange, connect included.
    pub async fn exchange(
        self,
        server: SocketAddr,
        message: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError> {
        let attempt = async {
            match self {
                Protocol::Udp => udp::exchange(server, message).await,
                Protocol::Tcp => tcp::exchange(server, message).await,
            }
        };

        let reply = tokio::time::timeout(timeout, attempt)
            .await
            .map_err(|_| DomainError::TransportTimeout { server })??;

        debug!(server = %server, protocol = self.as_str(), bytes = reply.len(), "Reply received");
        Ok(reply)
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn transport_error(server: SocketAddr, reason: impl fmt::Display) -> DomainError {
    DomainError::TransportError {
        server,
        reason: reason.to_string(),
    }
}
