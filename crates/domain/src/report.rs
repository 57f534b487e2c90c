use crate::{RunConfig, TargetStatus};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How a run ended when it produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunOutcome {
    Completed,
    Timeout,
    Cancelled,
}

impl RunOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunOutcome::Completed => "completed",
            RunOutcome::Timeout => "timeout",
            RunOutcome::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerStatus {
    pub name: String,
    pub address: String,
    pub propagated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found_after: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<String>,
}

impl From<&TargetStatus> for ServerStatus {
    fn from(status: &TargetStatus) -> Self {
        Self {
            name: status.endpoint.name.clone(),
            address: status.endpoint.display_address(),
            propagated: status.propagated,
            found_after: status.found_after.map(format_found_after),
            record: status.matched_record.clone(),
        }
    }
}

/// Summary of one run, collapsed from its final target state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropagationReport {
    pub domain: String,
    pub record_type: String,
    #[serde(rename = "match")]
    pub match_value: String,
    pub authoritative: Vec<ServerStatus>,
    pub resolvers: Vec<ServerStatus>,
    pub all_propagated: bool,
    pub checked_at: String,
    pub outcome: RunOutcome,
    #[serde(with = "humantime_serde")]
    pub elapsed: Duration,
}

impl PropagationReport {
    pub fn new(
        run: &RunConfig,
        authoritative: &[TargetStatus],
        resolvers: &[TargetStatus],
        outcome: RunOutcome,
        elapsed: Duration,
    ) -> Self {
        // A run that never reached any target has nothing to vouch for.
        let checked = authoritative.len() + resolvers.len();
        let all_propagated = checked > 0
            && authoritative
                .iter()
                .chain(resolvers.iter())
                .all(|s| s.propagated);

        Self {
            domain: run.display_domain().to_string(),
            record_type: run.criteria.record_type.as_str().to_string(),
            match_value: run.criteria.value.clone(),
            authoritative: authoritative.iter().map(ServerStatus::from).collect(),
            resolvers: resolvers.iter().map(ServerStatus::from).collect(),
            all_propagated,
            checked_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            outcome,
            elapsed,
        }
    }

    pub fn propagated_count(&self) -> (usize, usize) {
        let done = self
            .authoritative
            .iter()
            .chain(self.resolvers.iter())
            .filter(|s| s.propagated)
            .count();
        (done, self.authoritative.len() + self.resolvers.len())
    }
}

/// `42s` under a minute, then `3m` or `3m12s`.
pub fn format_found_after(d: Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        return format!("{}s", secs);
    }
    let (m, s) = (secs / 60, secs % 60);
    if s == 0 {
        format!("{}m", m)
    } else {
        format!("{}m{}s", m, s)
    }
}
