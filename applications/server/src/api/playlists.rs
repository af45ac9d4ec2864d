/// Playlist endpoints
use crate::error::{Result, ServerError};
use crate::state::AppState;
use aria_core::types::{CreatePlaylist, Playlist, PlaylistId, TrackId, UpdatePlaylist};
use aria_storage::{playlists, tracks};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTrackBody {
    pub track_id: TrackId,
}

pub async fn list_playlists(State(state): State<AppState>) -> Result<Json<Vec<Playlist>>> {
    Ok(Json(playlists::get_all(&state.pool).await?))
}

pub async fn get_playlist(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Playlist>> {
    let playlist = playlists::get_by_id(&state.pool, PlaylistId::new(id))
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("playlist {id}")))?;
    Ok(Json(playlist))
}

pub async fn create_playlist(
    State(state): State<AppState>,
    Json(input): Json<CreatePlaylist>,
) -> Result<(StatusCode, Json<Playlist>)> {
    if input.name.trim().is_empty() {
        return Err(ServerError::BadRequest(
            "playlist name is required".to_string(),
        ));
    }
    let playlist = playlists::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(playlist)))
}

pub async fn update_playlist(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<UpdatePlaylist>,
) -> Result<Json<Playlist>> {
    if let Some(name) = &patch.name {
        if name.trim().is_empty() {
            return Err(ServerError::BadRequest(
                "playlist name is required".to_string(),
            ));
        }
    }
    let playlist = playlists::update(&state.pool, PlaylistId::new(id), patch).await?;
    Ok(Json(playlist))
}

pub async fn add_track_to_playlist(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<AddTrackBody>,
) -> Result<StatusCode> {
    // Reject dangling references up front; playlist rows outlive tracks
    tracks::get_by_id(&state.pool, body.track_id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("track {}", body.track_id)))?;

    playlists::add_track(&state.pool, PlaylistId::new(id), body.track_id).await?;
    Ok(StatusCode::CREATED)
}

pub async fn remove_track_from_playlist(
    State(state): State<AppState>,
    Path((id, track_id)): Path<(i64, i64)>,
) -> Result<StatusCode> {
    playlists::remove_track(&state.pool, PlaylistId::new(id), TrackId::new(track_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_playlist(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    playlists::delete(&state.pool, PlaylistId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
