use super::defaults::default_record_type;
use super::logging::{default_log_level, LOG_LEVELS};
use super::{ConfigError, DefaultsConfig, LoggingConfig};
use crate::run_config::{default_public_resolvers, default_root_servers, RunDefaults};
use crate::RecordType;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// HTTP listen address. Empty runs a single console check instead.
    #[serde(default)]
    pub listen: String,

    #[serde(default = "default_public_resolver_strings")]
    pub public_resolvers: Vec<String>,

    #[serde(default = "default_root_server_strings")]
    pub root_servers: Vec<String>,

    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: String::new(),
            public_resolvers: default_public_resolver_strings(),
            root_servers: default_root_server_strings(),
            defaults: DefaultsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Command-line values that win over both the built-in defaults and the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub listen: Option<String>,
    pub timeout: Option<Duration>,
    pub retry: Option<Duration>,
    pub record_type: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Built-in defaults, then the file (if any), then CLI flags.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Empty lists and strings in the file keep the built-in value.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Config =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        if config.public_resolvers.is_empty() {
            config.public_resolvers = default_public_resolver_strings();
        }
        if config.root_servers.is_empty() {
            config.root_servers = default_root_server_strings();
        }
        if config.defaults.record_type.trim().is_empty() {
            config.defaults.record_type = default_record_type();
        }
        if config.logging.level.trim().is_empty() {
            config.logging.level = default_log_level();
        }
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| ConfigError::FileWrite {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(listen) = overrides.listen.filter(|s| !s.is_empty()) {
            self.listen = listen;
        }
        if let Some(timeout) = overrides.timeout {
            self.defaults.timeout = timeout;
        }
        if let Some(retry) = overrides.retry {
            self.defaults.retry = retry;
        }
        if let Some(record_type) = overrides.record_type.filter(|s| !s.is_empty()) {
            self.defaults.record_type = record_type;
        }
        if let Some(level) = overrides.log_level.filter(|s| !s.is_empty()) {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.run_defaults()?;

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "unknown log level '{}'",
                self.logging.level
            )));
        }
        if !self.listen.is_empty() && parse_listen_addr(&self.listen).is_none() {
            return Err(ConfigError::InvalidAddress(self.listen.clone()));
        }
        Ok(())
    }

    pub fn is_server_mode(&self) -> bool {
        !self.listen.trim().is_empty()
    }

    /// `":8080"` listens on all interfaces.
    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        parse_listen_addr(&self.listen).ok_or_else(|| ConfigError::InvalidAddress(self.listen.clone()))
    }

    /// Resolved per-check defaults handed to the engine.
    pub fn run_defaults(&self) -> Result<RunDefaults, ConfigError> {
        let d = &self.defaults;
        if d.timeout.is_zero() {
            return Err(ConfigError::InvalidDuration { field: "defaults.timeout" });
        }
        if d.retry.is_zero() {
            return Err(ConfigError::InvalidDuration { field: "defaults.retry" });
        }
        if d.query_timeout.is_zero() {
            return Err(ConfigError::InvalidDuration {
                field: "defaults.query_timeout",
            });
        }

        let record_type: RecordType = d
            .record_type
            .parse()
            .map_err(|e: crate::DomainError| ConfigError::Validation(e.to_string()))?;

        let root_servers = parse_server_list(&self.root_servers)?;
        if root_servers.is_empty() {
            return Err(ConfigError::Validation("at least one root server is required".into()));
        }

        Ok(RunDefaults {
            record_type,
            poll_interval: d.retry,
            deadline: d.timeout,
            query_timeout: d.query_timeout,
            root_servers,
            public_resolvers: parse_server_list(&self.public_resolvers)?,
        })
    }
}

/// Accepts `ip:port`, `[v6]:port`, a bare IPv4/IPv6 address, or `[v6]`.
/// A missing port means 53.
pub fn parse_server_addr(raw: &str) -> Result<SocketAddr, ConfigError> {
    let raw = raw.trim();
    if let Ok(addr) = raw.parse::<SocketAddr>() {
        return Ok(addr);
    }
    let bare = raw
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(raw);
    bare.parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, 53))
        .map_err(|_| ConfigError::InvalidAddress(raw.to_string()))
}

fn parse_server_list(raw: &[String]) -> Result<Vec<SocketAddr>, ConfigError> {
    raw.iter().map(|s| parse_server_addr(s)).collect()
}

fn parse_listen_addr(raw: &str) -> Option<SocketAddr> {
    let raw = raw.trim();
    match raw.strip_prefix(':') {
        Some(port) => port.parse::<u16>().ok().map(|p| SocketAddr::from(([0, 0, 0, 0], p))),
        None => raw.parse().ok(),
    }
}

fn default_public_resolver_strings() -> Vec<String> {
    default_public_resolvers().iter().map(|a| a.to_string()).collect()
}

fn default_root_server_strings() -> Vec<String> {
    default_root_servers().iter().map(|a| a.to_string()).collect()
}
