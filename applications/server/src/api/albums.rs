/// Album endpoints
use crate::error::{Result, ServerError};
use crate::state::AppState;
use aria_core::types::{Album, AlbumId, CreateAlbum, Track, UpdateAlbum};
use aria_storage::albums;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub async fn list_albums(State(state): State<AppState>) -> Result<Json<Vec<Album>>> {
    Ok(Json(albums::get_all(&state.pool).await?))
}

pub async fn get_album(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Album>> {
    let album = albums::get_by_id(&state.pool, AlbumId::new(id))
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("album {id}")))?;
    Ok(Json(album))
}

pub async fn get_album_tracks(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Track>>> {
    Ok(Json(albums::get_tracks(&state.pool, AlbumId::new(id)).await?))
}

pub async fn create_album(
    State(state): State<AppState>,
    Json(input): Json<CreateAlbum>,
) -> Result<(StatusCode, Json<Album>)> {
    if input.title.trim().is_empty() {
        return Err(ServerError::BadRequest("album title is required".to_string()));
    }
    let album = albums::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(album)))
}

pub async fn update_album(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<UpdateAlbum>,
) -> Result<Json<Album>> {
    let album = albums::update(&state.pool, AlbumId::new(id), patch).await?;
    Ok(Json(album))
}

pub async fn delete_album(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    albums::delete(&state.pool, AlbumId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
