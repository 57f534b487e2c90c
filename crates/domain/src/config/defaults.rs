use crate::run_config::{DEFAULT_DEADLINE, DEFAULT_POLL_INTERVAL, DEFAULT_QUERY_TIMEOUT};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Values used when a check does not specify its own.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DefaultsConfig {
    /// Overall run deadline.
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,

    /// Poll interval between sweeps.
    #[serde(default = "default_retry", with = "humantime_serde")]
    pub retry: Duration,

    #[serde(default = "default_record_type")]
    pub record_type: String,

    /// Per-attempt network timeout for a single query.
    #[serde(default = "default_query_timeout", with = "humantime_serde")]
    pub query_timeout: Duration,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            retry: default_retry(),
            record_type: default_record_type(),
            query_timeout: default_query_timeout(),
        }
    }
}

fn default_timeout() -> Duration {
    DEFAULT_DEADLINE
}

fn default_retry() -> Duration {
    DEFAULT_POLL_INTERVAL
}

pub(crate) fn default_record_type() -> String {
    "a".to_string()
}

fn default_query_timeout() -> Duration {
    DEFAULT_QUERY_TIMEOUT
}
