//! Configuration for Ripple
//!
//! - `root`: main configuration, file loading/saving and CLI overrides
//! - `defaults`: per-check defaults (deadline, poll interval, record type)
//! - `logging`: logging settings
//! - `errors`: configuration errors

pub mod defaults;
pub mod errors;
pub mod logging;
pub mod root;

pub use defaults::DefaultsConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{parse_server_addr, CliOverrides, Config};
