/// Track endpoints
use crate::error::{Result, ServerError};
use crate::state::AppState;
use aria_core::types::{CreateTrack, Track, TrackId, UpdateTrack};
use aria_storage::tracks;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct ListQuery {
    /// Substring match on title, artist name, or album title
    pub search: Option<String>,
}

pub async fn list_tracks(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Track>>> {
    let tracks = match query.search.as_deref() {
        Some(term) if !term.trim().is_empty() => tracks::search(&state.pool, term).await?,
        _ => tracks::get_all(&state.pool).await?,
    };
    Ok(Json(tracks))
}

pub async fn get_track(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Track>> {
    let track = tracks::get_by_id(&state.pool, TrackId::new(id))
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("track {id}")))?;
    Ok(Json(track))
}

pub async fn create_track(
    State(state): State<AppState>,
    Json(input): Json<CreateTrack>,
) -> Result<(StatusCode, Json<Track>)> {
    if input.title.trim().is_empty() {
        return Err(ServerError::BadRequest("track title is required".to_string()));
    }
    if input.duration_secs == 0 {
        return Err(ServerError::BadRequest(
            "track duration must be positive".to_string(),
        ));
    }
    let track = tracks::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(track)))
}

pub async fn update_track(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<UpdateTrack>,
) -> Result<Json<Track>> {
    let track = tracks::update(&state.pool, TrackId::new(id), patch).await?;
    Ok(Json(track))
}

pub async fn delete_track(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    tracks::delete(&state.pool, TrackId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
