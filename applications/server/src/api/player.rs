/// Transport control endpoints
///
/// Every mutation returns the resulting snapshot so clients can render the
/// new state without a second round trip.
use crate::error::{Result, ServerError};
use crate::state::AppState;
use aria_core::types::TrackId;
use aria_core::Catalog;
use aria_playback::PlayerSnapshot;
use axum::{extract::State, Json};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayBody {
    pub track_id: TrackId,
}

#[derive(Deserialize)]
pub struct SeekBody {
    /// Target position in whole seconds
    pub time: u32,
}

#[derive(Deserialize)]
pub struct VolumeBody {
    /// Target volume; values outside [0, 1] are clamped
    pub volume: f32,
}

pub async fn get_player(State(state): State<AppState>) -> Json<PlayerSnapshot> {
    Json(state.engine.snapshot())
}

pub async fn play(
    State(state): State<AppState>,
    Json(body): Json<PlayBody>,
) -> Result<Json<PlayerSnapshot>> {
    let track = state
        .catalog
        .track(body.track_id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("track {}", body.track_id)))?;

    state.engine.play_track(track);
    Ok(Json(state.engine.snapshot()))
}

pub async fn toggle(State(state): State<AppState>) -> Json<PlayerSnapshot> {
    state.engine.toggle_play_pause();
    Json(state.engine.snapshot())
}

pub async fn next(State(state): State<AppState>) -> Json<PlayerSnapshot> {
    state.engine.next_track();
    Json(state.engine.snapshot())
}

pub async fn previous(State(state): State<AppState>) -> Json<PlayerSnapshot> {
    state.engine.previous_track();
    Json(state.engine.snapshot())
}

pub async fn seek(
    State(state): State<AppState>,
    Json(body): Json<SeekBody>,
) -> Json<PlayerSnapshot> {
    state.engine.seek_to(body.time);
    Json(state.engine.snapshot())
}

pub async fn set_volume(
    State(state): State<AppState>,
    Json(body): Json<VolumeBody>,
) -> Json<PlayerSnapshot> {
    state.engine.set_volume(body.volume);
    Json(state.engine.snapshot())
}

pub async fn add_to_queue(
    State(state): State<AppState>,
    Json(body): Json<PlayBody>,
) -> Result<Json<PlayerSnapshot>> {
    let track = state
        .catalog
        .track(body.track_id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("track {}", body.track_id)))?;

    state.engine.add_to_queue(track);
    Ok(Json(state.engine.snapshot()))
}

pub async fn clear_queue(State(state): State<AppState>) -> Json<PlayerSnapshot> {
    state.engine.clear_queue();
    Json(state.engine.snapshot())
}

pub async fn toggle_shuffle(State(state): State<AppState>) -> Json<PlayerSnapshot> {
    state.engine.toggle_shuffle();
    Json(state.engine.snapshot())
}

pub async fn toggle_repeat(State(state): State<AppState>) -> Json<PlayerSnapshot> {
    state.engine.toggle_repeat();
    Json(state.engine.snapshot())
}
