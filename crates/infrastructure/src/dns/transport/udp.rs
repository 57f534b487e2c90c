use super::transport_error;
use ripple_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use tokio::net::UdpSocket;
use tracing::debug;

/// Queries carry no OPT record, so replies stay within 512 bytes unless a
/// server ignores that; the extra room keeps such replies intact.
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// One ephemeral socket per query. Datagrams from any address other than
/// `server` are discarded and the wait continues.
pub(super) async fn exchange(server: SocketAddr, message: &[u8]) -> Result<Vec<u8>, DomainError> {
    let local: SocketAddr = if server.is_ipv4() {
        (Ipv4Addr::UNSPECIFIED, 0).into()
    } else {
        (Ipv6Addr::UNSPECIFIED, 0).into()
    };

    let socket = UdpSocket::bind(local)
        .await
        .map_err(|e| transport_error(server, format!("bind failed: {}", e)))?;
    socket
        .send_to(message, server)
        .await
        .map_err(|e| transport_error(server, e))?;

    let mut buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
    loop {
        let (len, from) = socket
            .recv_from(&mut buf)
            .await
            .map_err(|e| transport_error(server, e))?;

        if from == server {
            buf.truncate(len);
            return Ok(buf);
        }
        debug!(expected = %server, received_from = %from, "Ignoring datagram from unexpected source");
    }
}
