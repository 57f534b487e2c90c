use super::transport_error;
use ripple_domain::DomainError;
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// DNS over TCP: each message is preceded by its length as a big-endian u16
/// (RFC 1035 4.2.2).
pub(super) async fn exchange(server: SocketAddr, message: &[u8]) -> Result<Vec<u8>, DomainError> {
    let len = u16::try_from(message.len())
        .map_err(|_| transport_error(server, "query too large for TCP framing"))?;

    let mut stream = TcpStream::connect(server)
        .await
        .map_err(|e| transport_error(server, e))?;

    let mut framed = Vec::with_capacity(message.len() + 2);
    framed.extend_from_slice(&len.to_be_bytes());
    framed.extend_from_slice(message);
    stream
        .write_all(&framed)
        .await
        .map_err(|e| transport_error(server, e))?;

    let mut len_buf = [0u8; 2];
    stream
        .read_exact(&mut len_buf)
        .await
        .map_err(|e| transport_error(server, e))?;

    let mut reply = vec![0u8; u16::from_be_bytes(len_buf) as usize];
    stream
        .read_exact(&mut reply)
        .await
        .map_err(|e| transport_error(server, e))?;

    Ok(reply)
}
