use crate::{Endpoint, TargetKind};
use std::time::Duration;

/// Propagation progress of one endpoint during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetStatus {
    pub endpoint: Endpoint,
    pub kind: TargetKind,
    pub propagated: bool,
    pub found_after: Option<Duration>,
    pub matched_record: Option<String>,
}

impl TargetStatus {
    pub fn new(endpoint: Endpoint, kind: TargetKind) -> Self {
        Self {
            endpoint,
            kind,
            propagated: false,
            found_after: None,
            matched_record: None,
        }
    }

    /// Records the first successful match. Later matches are ignored and
    /// return `false`.
    pub fn mark_propagated(&mut self, record: String, found_after: Duration) -> bool {
        if self.propagated {
            return false;
        }
        self.propagated = true;
        self.found_after = Some(found_after);
        self.matched_record = Some(record);
        true
    }
}
