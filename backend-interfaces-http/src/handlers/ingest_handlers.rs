use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use tracing::warn;

use backend_application::commands::ingest_commands;
use backend_application::AppState;

use crate::error::HttpError;
use crate::middleware::{authorize, parse_kill_event};

pub async fn ingest_kill(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: axum::body::Bytes,
) -> Result<StatusCode, HttpError> {
    authorize(&state, &headers).await?;

    let event = parse_kill_event(&headers, &body).map_err(|err| {
        warn!("failed to parse kill event: {}", err);
        HttpError::BadRequest(err.to_string())
    })?;

    ingest_commands::record_kill_event(&state, event).await?;
    Ok(StatusCode::OK)
}
