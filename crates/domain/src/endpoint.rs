use std::fmt;
use std::net::SocketAddr;

pub const DNS_PORT: u16 = 53;

/// Name of the synthetic target that goes through the host's configured resolver.
pub const SYSTEM_RESOLVER_NAME: &str = "local";

/// A server that gets checked during a run.
///
/// `address: None` means "use the process's default resolver" rather than a
/// specific server.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub name: String,
    pub address: Option<SocketAddr>,
}

impl Endpoint {
    pub fn new(name: impl Into<String>, address: SocketAddr) -> Self {
        Self {
            name: name.into(),
            address: Some(address),
        }
    }

    /// Endpoint named after its own address, for servers known only by IP.
    pub fn from_address(address: SocketAddr) -> Self {
        let mut endpoint = Self::new(String::new(), address);
        endpoint.name = endpoint.display_address();
        endpoint
    }

    pub fn public_resolver(address: SocketAddr) -> Self {
        Self::from_address(address)
    }

    pub fn system() -> Self {
        Self {
            name: SYSTEM_RESOLVER_NAME.to_string(),
            address: None,
        }
    }

    pub fn is_system(&self) -> bool {
        self.address.is_none()
    }

    /// Address for humans: `system` for the local resolver, the bare IP when
    /// the port is the standard DNS port.
    pub fn display_address(&self) -> String {
        match self.address {
            None => "system".to_string(),
            Some(addr) if addr.port() == DNS_PORT => addr.ip().to_string(),
            Some(addr) => addr.to_string(),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.display_address())
    }
}

/// Which group of targets an endpoint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Authoritative,
    Resolver,
}

impl TargetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Authoritative => "authoritative",
            TargetKind::Resolver => "resolver",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
