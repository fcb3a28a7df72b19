use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};

use backend_application::AppState;

use crate::error::HttpError;
use crate::middleware::authorize;

/// Lets a game server check its token before it starts reporting kills.
pub async fn check_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, HttpError> {
    authorize(&state, &headers).await?;
    Ok(StatusCode::OK)
}
