/// Play history endpoints
use crate::error::{Result, ServerError};
use crate::state::AppState;
use aria_core::types::{Track, TrackId};
use aria_storage::{recently_played, tracks};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

const DEFAULT_LIMIT: u32 = 20;

#[derive(Deserialize)]
pub struct RecentQuery {
    pub limit: Option<u32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordBody {
    pub track_id: TrackId,
}

pub async fn list_recently_played(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> Result<Json<Vec<Track>>> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    Ok(Json(recently_played::get_recent(&state.pool, limit).await?))
}

pub async fn record_play(
    State(state): State<AppState>,
    Json(body): Json<RecordBody>,
) -> Result<StatusCode> {
    tracks::get_by_id(&state.pool, body.track_id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("track {}", body.track_id)))?;

    recently_played::record(&state.pool, body.track_id).await?;
    Ok(StatusCode::CREATED)
}
