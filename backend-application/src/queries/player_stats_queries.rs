use tracing::error;

use crate::{AppError, AppState};
use backend_domain::{PlayerStats, ServerScope};

/// Looks up kills, deaths and KD for a player name or id. An empty
/// `server_scope` behaves like an absent one.
pub async fn get_player_stats(
    state: &AppState,
    lookup_key: &str,
    server_scope: Option<String>,
) -> Result<PlayerStats, AppError> {
    if lookup_key.is_empty() {
        return Err(AppError::BadRequest("player key must not be empty".to_string()));
    }

    let scope = ServerScope::filter(server_scope);
    let result = state
        .kill_repo
        .query_stats(lookup_key, scope.as_ref().map(ServerScope::as_str))
        .await
        .map_err(|err| {
            error!("failed to query stats for {}: {}", lookup_key, err);
            AppError::Store(err)
        })?;

    state.metrics.record_stats_query(result.is_some());
    result.ok_or(AppError::NotFound)
}
