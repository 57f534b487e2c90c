use crate::{DomainError, MatchCriteria, RecordType};
use serde::Deserialize;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(60);
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

const MAX_DOMAIN_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

pub fn default_root_servers() -> Vec<SocketAddr> {
    [
        Ipv4Addr::new(198, 41, 0, 4),
        Ipv4Addr::new(199, 9, 14, 201),
        Ipv4Addr::new(192, 33, 4, 12),
        Ipv4Addr::new(199, 7, 91, 13),
    ]
    .into_iter()
    .map(|ip| SocketAddr::from((ip, 53)))
    .collect()
}

pub fn default_public_resolvers() -> Vec<SocketAddr> {
    [
        Ipv4Addr::new(1, 1, 1, 1),
        Ipv4Addr::new(8, 8, 8, 8),
        Ipv4Addr::new(9, 9, 9, 9),
        Ipv4Addr::new(208, 67, 222, 222),
        Ipv4Addr::new(86, 54, 11, 100),
        Ipv4Addr::new(76, 76, 2, 0),
    ]
    .into_iter()
    .map(|ip| SocketAddr::from((ip, 53)))
    .collect()
}

/// Adds the root label once. Rejects empty names, empty labels and
/// over-long names.
pub fn normalize_domain(domain: &str) -> Result<String, DomainError> {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation("domain is required".into()));
    }

    let bare = trimmed.strip_suffix('.').unwrap_or(trimmed);
    if bare.is_empty() || bare.len() > MAX_DOMAIN_LEN {
        return Err(DomainError::InvalidDomainName(trimmed.to_string()));
    }
    if bare
        .split('.')
        .any(|label| label.is_empty() || label.len() > MAX_LABEL_LEN)
    {
        return Err(DomainError::InvalidDomainName(trimmed.to_string()));
    }

    Ok(format!("{}.", bare))
}

/// Everything one propagation run needs. `domain` is always fully qualified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub domain: String,
    pub criteria: MatchCriteria,
    pub poll_interval: Duration,
    pub deadline: Duration,
    pub query_timeout: Duration,
    pub root_servers: Vec<SocketAddr>,
    pub public_resolvers: Vec<SocketAddr>,
}

impl RunConfig {
    pub fn new(domain: &str, criteria: MatchCriteria) -> Result<Self, DomainError> {
        Ok(Self {
            domain: normalize_domain(domain)?,
            criteria,
            poll_interval: DEFAULT_POLL_INTERVAL,
            deadline: DEFAULT_DEADLINE,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
            root_servers: default_root_servers(),
            public_resolvers: default_public_resolvers(),
        })
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }

    pub fn with_root_servers(mut self, servers: Vec<SocketAddr>) -> Self {
        self.root_servers = servers;
        self
    }

    pub fn with_public_resolvers(mut self, resolvers: Vec<SocketAddr>) -> Self {
        self.public_resolvers = resolvers;
        self
    }

    /// Domain without the trailing root label, for output.
    pub fn display_domain(&self) -> &str {
        self.domain.strip_suffix('.').unwrap_or(&self.domain)
    }
}

/// Values a [`CheckRequest`] falls back on when it leaves a field out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunDefaults {
    pub record_type: RecordType,
    pub poll_interval: Duration,
    pub deadline: Duration,
    pub query_timeout: Duration,
    pub root_servers: Vec<SocketAddr>,
    pub public_resolvers: Vec<SocketAddr>,
}

impl Default for RunDefaults {
    fn default() -> Self {
        Self {
            record_type: RecordType::A,
            poll_interval: DEFAULT_POLL_INTERVAL,
            deadline: DEFAULT_DEADLINE,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
            root_servers: default_root_servers(),
            public_resolvers: default_public_resolvers(),
        }
    }
}

/// Unvalidated check parameters as they arrive from a front end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub domain: String,
    #[serde(default, rename = "type")]
    pub record_type: Option<String>,
    #[serde(default, rename = "match")]
    pub match_value: String,
    #[serde(default)]
    pub timeout: Option<String>,
    #[serde(default)]
    pub retry: Option<String>,
}

impl CheckRequest {
    pub fn into_run_config(self, defaults: &RunDefaults) -> Result<RunConfig, DomainError> {
        let deadline = parse_optional_duration(self.timeout.as_deref(), "timeout")?
            .unwrap_or(defaults.deadline);
        let poll_interval = parse_optional_duration(self.retry.as_deref(), "retry")?
            .unwrap_or(defaults.poll_interval);

        if self.domain.trim().is_empty() {
            return Err(DomainError::Validation("domain is required".into()));
        }
        if self.match_value.trim().is_empty() {
            return Err(DomainError::Validation("match is required".into()));
        }

        let record_type = match self.record_type.as_deref().map(str::trim) {
            None | Some("") => defaults.record_type,
            Some(raw) => raw.parse()?,
        };

        let criteria = MatchCriteria::new(record_type, self.match_value.trim());
        Ok(RunConfig::new(&self.domain, criteria)?
            .with_deadline(deadline)
            .with_poll_interval(poll_interval)
            .with_query_timeout(defaults.query_timeout)
            .with_root_servers(defaults.root_servers.clone())
            .with_public_resolvers(defaults.public_resolvers.clone()))
    }
}

fn parse_optional_duration(raw: Option<&str>, field: &str) -> Result<Option<Duration>, DomainError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };
    match humantime::parse_duration(raw) {
        Ok(d) if !d.is_zero() => Ok(Some(d)),
        _ => Err(DomainError::Validation(format!("invalid {} format", field))),
    }
}
