use tracing::{error, warn};

use crate::{AppError, AppState};

/// Reports whether `token` is a registered access token. Empty tokens are
/// rejected without touching the store.
pub async fn token_exists(state: &AppState, token: &str) -> Result<bool, AppError> {
    if token.is_empty() {
        return Ok(false);
    }
    state.token_repo.token_exists(token).await.map_err(|err| {
        error!("token lookup failed: {}", err);
        AppError::Store(err)
    })
}

/// Gate for protected operations. Passes everything when auth is disabled.
pub async fn authenticate(state: &AppState, token: Option<&str>) -> Result<(), AppError> {
    if state.config.auth_disabled {
        return Ok(());
    }

    let token = token.unwrap_or_default();
    if token_exists(state, token).await? {
        return Ok(());
    }

    state.metrics.record_auth_rejection();
    warn!("rejected request with unknown token");
    Err(AppError::Unauthorized)
}
