use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Record types a propagation check can match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    A,
    AAAA,
    TXT,
    CNAME,
    MX,
}

impl RecordType {
    pub const ALL: [RecordType; 5] = [
        RecordType::A,
        RecordType::AAAA,
        RecordType::TXT,
        RecordType::CNAME,
        RecordType::MX,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::TXT => "TXT",
            RecordType::CNAME => "CNAME",
            RecordType::MX => "MX",
        }
    }

    /// Exact comparison for address records, substring search for the rest.
    pub fn uses_exact_match(&self) -> bool {
        matches!(self, RecordType::A | RecordType::AAAA)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(RecordType::A),
            "aaaa" => Ok(RecordType::AAAA),
            "txt" => Ok(RecordType::TXT),
            "cname" => Ok(RecordType::CNAME),
            "mx" => Ok(RecordType::MX),
            _ => Err(DomainError::InvalidRecordType(s.to_string())),
        }
    }
}
