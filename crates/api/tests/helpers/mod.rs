#![allow(dead_code)]
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use ripple_api::{create_api_routes, AppState};
use ripple_application::ports::{AuthoritativeDiscovery, TargetChecker};
use ripple_application::use_cases::CheckPropagationUseCase;
use ripple_domain::{DomainError, Endpoint, MatchCriteria, RunDefaults};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

pub struct StubDiscovery {
    result: Result<Vec<Endpoint>, DomainError>,
}

impl StubDiscovery {
    pub fn returning(servers: Vec<Endpoint>) -> Self {
        Self { result: Ok(servers) }
    }

    pub fn failing(error: DomainError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl AuthoritativeDiscovery for StubDiscovery {
    async fn discover(
        &self,
        _domain: &str,
        _root_servers: &[SocketAddr],
    ) -> Result<Vec<Endpoint>, DomainError> {
        self.result.clone()
    }
}

/// Every server already carries the record being looked for.
pub struct EchoChecker;

#[async_trait]
impl TargetChecker for EchoChecker {
    async fn check_authoritative(
        &self,
        _server: SocketAddr,
        _domain: &str,
        criteria: &MatchCriteria,
        _timeout: Duration,
    ) -> Option<String> {
        Some(format!("{} {}", criteria.record_type, criteria.value))
    }

    async fn check_resolver(
        &self,
        _resolver: Option<SocketAddr>,
        _domain: &str,
        criteria: &MatchCriteria,
        _timeout: Duration,
    ) -> Option<String> {
        Some(format!("{} {}", criteria.record_type, criteria.value))
    }
}

pub fn ns1() -> Endpoint {
    Endpoint::new("ns1.example.com", "10.0.0.1:53".parse().unwrap())
}

pub fn app(discovery: StubDiscovery) -> Router {
    let defaults = RunDefaults {
        poll_interval: Duration::from_millis(50),
        deadline: Duration::from_secs(5),
        query_timeout: Duration::from_millis(100),
        root_servers: vec!["198.41.0.4:53".parse().unwrap()],
        public_resolvers: vec!["8.8.8.8:53".parse().unwrap()],
        ..RunDefaults::default()
    };
    let use_case = CheckPropagationUseCase::new(Arc::new(discovery), Arc::new(EchoChecker));
    create_api_routes(AppState {
        check_propagation: Arc::new(use_case),
        defaults: Arc::new(defaults),
    })
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// JSON payloads of every `data:` line in an event-stream body.
pub fn sse_frames(body: &str) -> Vec<serde_json::Value> {
    body.lines()
        .filter_map(|line| line.strip_prefix("data:"))
        .map(|data| serde_json::from_str(data.trim()).unwrap())
        .collect()
}
