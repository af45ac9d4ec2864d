/// Artist endpoints
use crate::error::{Result, ServerError};
use crate::state::AppState;
use aria_core::types::{Album, Artist, ArtistId, CreateArtist, UpdateArtist};
use aria_storage::{albums, artists};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub async fn list_artists(State(state): State<AppState>) -> Result<Json<Vec<Artist>>> {
    Ok(Json(artists::get_all(&state.pool).await?))
}

pub async fn get_artist(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Artist>> {
    let artist = artists::get_by_id(&state.pool, ArtistId::new(id))
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("artist {id}")))?;
    Ok(Json(artist))
}

pub async fn get_artist_albums(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Album>>> {
    Ok(Json(albums::get_by_artist(&state.pool, ArtistId::new(id)).await?))
}

pub async fn create_artist(
    State(state): State<AppState>,
    Json(input): Json<CreateArtist>,
) -> Result<(StatusCode, Json<Artist>)> {
    if input.name.trim().is_empty() {
        return Err(ServerError::BadRequest("artist name is required".to_string()));
    }
    let artist = artists::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(artist)))
}

pub async fn update_artist(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<UpdateArtist>,
) -> Result<Json<Artist>> {
    let artist = artists::update(&state.pool, ArtistId::new(id), patch).await?;
    Ok(Json(artist))
}

pub async fn delete_artist(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    artists::delete(&state.pool, ArtistId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
