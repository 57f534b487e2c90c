use crate::{dto::StreamEvent, state::AppState};
use axum::{
    extract::{Query, State},
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::{self, Stream};
use ripple_application::events::ProgressEmitter;
use ripple_domain::{CheckRequest, ProgressEvent};
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{debug, instrument};

/// Streams a run's progress as server-sent events.
///
/// The run lives in its own task; the response stream owns a drop guard for
/// the run's cancellation token, so a client that disconnects cancels the run.
/// A request that fails validation gets a single `error` frame.
#[instrument(skip_all, name = "api_check_stream")]
pub async fn check_stream(
    State(state): State<AppState>,
    Query(request): Query<CheckRequest>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let (emitter, receiver) = ProgressEmitter::new_enabled(ProgressEmitter::DEFAULT_CAPACITY);
    let cancel = CancellationToken::new();
    let guard = cancel.clone().drop_guard();

    match request.into_run_config(&state.defaults) {
        Ok(run) => {
            let use_case = state.check_propagation.clone();
            tokio::spawn(async move {
                if let Err(e) = use_case.execute(&run, &emitter, &cancel).await {
                    debug!(domain = %run.domain, error = %e, "Streamed check failed");
                }
            });
        }
        Err(e) => {
            emitter
                .finish(ProgressEvent::Error {
                    message: e.to_string(),
                })
                .await;
        }
    }

    let frames = stream::unfold(
        (receiver, guard),
        |(mut receiver, guard): (_, DropGuard)| async move {
            let event = receiver.recv().await?;
            let frame = Event::default().json_data(StreamEvent::from(&event));
            Some((frame, (receiver, guard)))
        },
    );

    Sse::new(frames).keep_alive(KeepAlive::default())
}
