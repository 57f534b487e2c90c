//! Ripple Domain Layer
pub mod config;
pub mod criteria;
pub mod endpoint;
pub mod errors;
pub mod event;
pub mod record_type;
pub mod report;
pub mod run_config;
pub mod target;

pub use config::{CliOverrides, Config, ConfigError};
pub use criteria::MatchCriteria;
pub use endpoint::{Endpoint, TargetKind, DNS_PORT, SYSTEM_RESOLVER_NAME};
pub use errors::DomainError;
pub use event::ProgressEvent;
pub use record_type::RecordType;
pub use report::{format_found_after, PropagationReport, RunOutcome, ServerStatus};
pub use run_config::{normalize_domain, CheckRequest, RunConfig, RunDefaults};
pub use target::TargetStatus;
