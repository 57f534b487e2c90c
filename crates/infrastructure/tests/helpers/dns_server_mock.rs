#![allow(dead_code)]
use hickory_proto::op::Message;
use ripple_infrastructure::dns::forwarding::MessageBuilder;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Via {
    Udp,
    Tcp,
}

pub enum MockReply {
    Message(Message),
    Raw(Vec<u8>),
    Silence,
}

type Handler = dyn Fn(&Message, Via) -> MockReply + Send + Sync;

/// Local DNS server on 127.0.0.1 answering UDP and TCP on the same port
/// through a caller-supplied handler.
pub struct MockDnsServer {
    addr: SocketAddr,
    udp_queries: Arc<AtomicU64>,
    tcp_queries: Arc<AtomicU64>,
    seen: Arc<Mutex<Vec<Message>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start<F>(handler: F) -> std::io::Result<Self>
    where
        F: Fn(&Message, Via) -> MockReply + Send + Sync + 'static,
    {
        let udp = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = udp.local_addr()?;
        let tcp = TcpListener::bind(addr).await?;

        let handler: Arc<Handler> = Arc::new(handler);
        let udp_queries = Arc::new(AtomicU64::new(0));
        let tcp_queries = Arc::new(AtomicU64::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        {
            let handler = handler.clone();
            let udp_queries = udp_queries.clone();
            let tcp_queries = tcp_queries.clone();
            let seen = seen.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 4096];
                loop {
                    tokio::select! {
                        _ = &mut shutdown_rx => break,
                        result = udp.recv_from(&mut buf) => {
                            let Ok((len, peer)) = result else { continue };
                            let Ok(query) = Message::from_vec(&buf[..len]) else { continue };
                            udp_queries.fetch_add(1, Ordering::SeqCst);
                            seen.lock().unwrap().push(query.clone());
                            if let Some(bytes) = render(handler(&query, Via::Udp)) {
                                let _ = udp.send_to(&bytes, peer).await;
                            }
                        }
                        accepted = tcp.accept() => {
                            let Ok((mut stream, _)) = accepted else { continue };
                            let handler = handler.clone();
                            let tcp_queries = tcp_queries.clone();
                            let seen = seen.clone();
                            tokio::spawn(async move {
                                let mut len_buf = [0u8; 2];
                                if stream.read_exact(&mut len_buf).await.is_err() {
                                    return;
                                }
                                let mut query_buf = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                                if stream.read_exact(&mut query_buf).await.is_err() {
                                    return;
                                }
                                let Ok(query) = Message::from_vec(&query_buf) else { return };
                                tcp_queries.fetch_add(1, Ordering::SeqCst);
                                seen.lock().unwrap().push(query.clone());
                                if let Some(bytes) = render(handler(&query, Via::Tcp)) {
                                    let _ = stream.write_all(&(bytes.len() as u16).to_be_bytes()).await;
                                    let _ = stream.write_all(&bytes).await;
                                }
                            });
                        }
                    }
                }
            });
        }

        Ok(Self {
            addr,
            udp_queries,
            tcp_queries,
            seen,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn udp_queries(&self) -> u64 {
        self.udp_queries.load(Ordering::SeqCst)
    }

    pub fn tcp_queries(&self) -> u64 {
        self.tcp_queries.load(Ordering::SeqCst)
    }

    /// Every query received so far, in arrival order.
    pub fn seen(&self) -> Vec<Message> {
        self.seen.lock().unwrap().clone()
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn render(reply: MockReply) -> Option<Vec<u8>> {
    match reply {
        MockReply::Message(message) => MessageBuilder::serialize_message(&message).ok(),
        MockReply::Raw(bytes) => Some(bytes),
        MockReply::Silence => None,
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
