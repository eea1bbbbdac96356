use std::convert::Infallible;

use axum::{
    extract::{Extension, State},
    response::sse::{Event, KeepAlive, Sse},
    routing::get,
    Router,
};
use futures_util::{Stream, StreamExt};
use tokio_stream::wrappers::BroadcastStream;
use tracing::{info, warn};

use kilin_account::SessionContext;

use crate::middleware::require_user;
use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/events", get(stream_events))
}

/// Server-sent feed of the logged-in user's own domain events. A client
/// that falls behind skips what it missed.
async fn stream_events(
    State(state): State<AppState>,
    Extension(ctx): Extension<SessionContext>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, AppError> {
    let user_id = require_user(&ctx)?.user_id;
    info!("Event stream opened for {}", user_id);

    let stream = BroadcastStream::new(state.events.subscribe()).filter_map(move |result| async move {
        match result {
            Ok(event) if event.user_id() == Some(user_id) => {
                match Event::default().event(event.topic()).json_data(&event) {
                    Ok(frame) => Some(Ok(frame)),
                    Err(e) => {
                        warn!(error = %e, "Dropping event that failed to serialize");
                        None
                    }
                }
            }
            Ok(_) => None,
            Err(e) => {
                warn!(error = %e, "Event stream fell behind");
                None
            }
        }
    });

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}
