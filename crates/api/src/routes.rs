use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route("/check", get(handlers::check_query))
        .route("/check", post(handlers::check_body))
        .route("/check/stream", get(handlers::check_stream))
        .with_state(state)
}
