use crate::RecordType;

/// What a check is looking for. Immutable for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCriteria {
    pub record_type: RecordType,
    pub value: String,
}

impl MatchCriteria {
    pub fn new(record_type: RecordType, value: impl Into<String>) -> Self {
        Self {
            record_type,
            value: value.into(),
        }
    }

    /// A/AAAA compare the canonical address text exactly; TXT, CNAME and MX
    /// accept any candidate containing the value.
    pub fn accepts(&self, candidate: &str) -> bool {
        if self.record_type.uses_exact_match() {
            candidate == self.value
        } else {
            candidate.contains(self.value.as_str())
        }
    }
}
