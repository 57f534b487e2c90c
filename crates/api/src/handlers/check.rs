use crate::{dto::ErrorResponse, state::AppState};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use ripple_domain::{CheckRequest, PropagationReport};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument};

type CheckResult = Result<Json<PropagationReport>, (StatusCode, Json<ErrorResponse>)>;

fn bad_request(message: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
}

#[instrument(skip_all, name = "api_check_query")]
pub async fn check_query(
    State(state): State<AppState>,
    query: Result<Query<CheckRequest>, QueryRejection>,
) -> CheckResult {
    let Query(request) = query.map_err(|e| {
        debug!(error = %e, "Rejected query string");
        bad_request("invalid query string")
    })?;
    run_check(&state, request).await
}

#[instrument(skip_all, name = "api_check_body")]
pub async fn check_body(
    State(state): State<AppState>,
    body: Result<Json<CheckRequest>, JsonRejection>,
) -> CheckResult {
    let Json(request) = body.map_err(|e| {
        debug!(error = %e, "Rejected JSON body");
        bad_request("invalid JSON body")
    })?;
    run_check(&state, request).await
}

/// Runs to completion. Dropping the request future (client gone) cancels the
/// run through the token's drop guard.
async fn run_check(state: &AppState, request: CheckRequest) -> CheckResult {
    let run = request
        .into_run_config(&state.defaults)
        .map_err(|e| bad_request(e.to_string()))?;

    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();

    match state.check_propagation.run_to_completion(&run, &cancel).await {
        Ok(report) => {
            let (done, total) = report.propagated_count();
            info!(
                domain = %report.domain,
                outcome = report.outcome.as_str(),
                propagated = done,
                total,
                "Check finished"
            );
            Ok(Json(report))
        }
        Err(e) => {
            error!(domain = %run.domain, error = %e, "Check failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(format!(
                    "failed to find authoritative servers: {}",
                    e
                ))),
            ))
        }
    }
}
