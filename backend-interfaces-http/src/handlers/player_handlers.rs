use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;

use backend_application::queries::player_stats_queries;
use backend_application::AppState;
use backend_domain::{PlayerStatsQuery, PlayerStatsResponse};

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn get_player_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(lookup_key): Path<String>,
    Query(query): Query<PlayerStatsQuery>,
) -> Result<Json<PlayerStatsResponse>, HttpError> {
    if !state.config.public_stats {
        authorize(&state, &headers).await?;
    }
    let stats = player_stats_queries::get_player_stats(&state, &lookup_key, query.server_id).await?;
    Ok(Json(stats.into()))
}
