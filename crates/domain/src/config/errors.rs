use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {reason}")]
    FileRead { path: String, reason: String },

    #[error("Failed to write config file {path}: {reason}")]
    FileWrite { path: String, reason: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Failed to serialize config: {0}")]
    Serialize(String),

    #[error("Invalid server address: {0}")]
    InvalidAddress(String),

    #[error("Invalid duration for {field}: must be greater than zero")]
    InvalidDuration { field: &'static str },

    #[error("Invalid configuration: {0}")]
    Validation(String),
}
