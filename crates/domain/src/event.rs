use crate::{Endpoint, TargetKind};
use std::time::Duration;

/// Progress of a propagation run, in emission order.
///
/// Every run ends with exactly one terminal event (`Complete`, `Timeout`,
/// `Cancelled` or `Error`) and nothing is emitted after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Discovered {
        authoritative: Vec<Endpoint>,
    },
    ResolversInitialized {
        resolvers: Vec<Endpoint>,
    },
    TargetPropagated {
        kind: TargetKind,
        endpoint: Endpoint,
        matched_record: String,
        found_after: Duration,
    },
    Complete {
        elapsed: Duration,
    },
    Timeout {
        elapsed: Duration,
    },
    Cancelled,
    Error {
        message: String,
    },
}

impl ProgressEvent {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ProgressEvent::Complete { .. }
                | ProgressEvent::Timeout { .. }
                | ProgressEvent::Cancelled
                | ProgressEvent::Error { .. }
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            ProgressEvent::Discovered { .. } => "discovered",
            ProgressEvent::ResolversInitialized { .. } => "resolvers_initialized",
            ProgressEvent::TargetPropagated { .. } => "target_propagated",
            ProgressEvent::Complete { .. } => "complete",
            ProgressEvent::Timeout { .. } => "timeout",
            ProgressEvent::Cancelled => "cancelled",
            ProgressEvent::Error { .. } => "error",
        }
    }
}
