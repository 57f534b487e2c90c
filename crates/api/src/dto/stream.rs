use ripple_domain::{format_found_after, Endpoint, ProgressEvent, ServerStatus, TargetKind};
use serde::Serialize;

/// One server-sent event frame.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StreamEvent {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<ServerStatus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StreamEvent {
    fn bare(kind: &'static str) -> Self {
        Self {
            kind,
            server: None,
            servers: None,
            elapsed: None,
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::bare("error")
        }
    }
}

fn pending(endpoint: &Endpoint) -> ServerStatus {
    ServerStatus {
        name: endpoint.name.clone(),
        address: endpoint.display_address(),
        propagated: false,
        found_after: None,
        record: None,
    }
}

impl From<&ProgressEvent> for StreamEvent {
    fn from(event: &ProgressEvent) -> Self {
        match event {
            ProgressEvent::Discovered { authoritative } => Self {
                servers: Some(authoritative.iter().map(pending).collect()),
                ..Self::bare("discovered")
            },
            ProgressEvent::ResolversInitialized { resolvers } => Self {
                servers: Some(resolvers.iter().map(pending).collect()),
                ..Self::bare("resolver")
            },
            ProgressEvent::TargetPropagated {
                kind,
                endpoint,
                matched_record,
                found_after,
            } => {
                let kind = match kind {
                    TargetKind::Authoritative => "auth_propagated",
                    TargetKind::Resolver => "resolver_propagated",
                };
                Self {
                    server: Some(ServerStatus {
                        name: endpoint.name.clone(),
                        address: endpoint.display_address(),
                        propagated: true,
                        found_after: Some(format_found_after(*found_after)),
                        record: Some(matched_record.clone()),
                    }),
                    ..Self::bare(kind)
                }
            }
            ProgressEvent::Complete { elapsed } => Self {
                elapsed: Some(format_found_after(*elapsed)),
                ..Self::bare("complete")
            },
            ProgressEvent::Timeout { elapsed } => Self {
                elapsed: Some(format_found_after(*elapsed)),
                ..Self::bare("timeout")
            },
            ProgressEvent::Cancelled => Self::bare("cancelled"),
            ProgressEvent::Error { message } => Self::error(message.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn test_resolver_propagated_frame() {
        let event = ProgressEvent::TargetPropagated {
            kind: TargetKind::Resolver,
            endpoint: Endpoint::public_resolver("8.8.8.8:53".parse().unwrap()),
            matched_record: "A 93.184.216.34".into(),
            found_after: Duration::from_secs(65),
        };

        let value = serde_json::to_value(StreamEvent::from(&event)).unwrap();

        assert_eq!(
            value,
            json!({
                "type": "resolver_propagated",
                "server": {
                    "name": "8.8.8.8",
                    "address": "8.8.8.8",
                    "propagated": true,
                    "found_after": "1m5s",
                    "record": "A 93.184.216.34"
                }
            })
        );
    }

    #[test]
    fn test_resolver_list_includes_system_resolver() {
        let event = ProgressEvent::ResolversInitialized {
            resolvers: vec![Endpoint::system()],
        };

        let value = serde_json::to_value(StreamEvent::from(&event)).unwrap();

        assert_eq!(
            value,
            json!({
                "type": "resolver",
                "servers": [{"name": "local", "address": "system", "propagated": false}]
            })
        );
    }

    #[test]
    fn test_terminal_frames() {
        let complete = StreamEvent::from(&ProgressEvent::Complete {
            elapsed: Duration::from_secs(12),
        });
        assert_eq!(complete.kind, "complete");
        assert_eq!(complete.elapsed.as_deref(), Some("12s"));

        assert_eq!(StreamEvent::from(&ProgressEvent::Cancelled).kind, "cancelled");

        let error = StreamEvent::from(&ProgressEvent::Error {
            message: "boom".into(),
        });
        assert_eq!(
            serde_json::to_value(error).unwrap(),
            json!({"type": "error", "error": "boom"})
        );
    }
}
