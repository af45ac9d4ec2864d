/// HTTP API
pub mod albums;
pub mod artists;
pub mod events;
pub mod health;
pub mod player;
pub mod playlists;
pub mod recently_played;
pub mod tracks;

use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the full application router
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health::health))
        // Artists
        .route("/artists", get(artists::list_artists))
        .route("/artists", post(artists::create_artist))
        .route("/artists/:id", get(artists::get_artist))
        .route("/artists/:id", put(artists::update_artist))
        .route("/artists/:id", delete(artists::delete_artist))
        .route("/artists/:id/albums", get(artists::get_artist_albums))
        // Albums
        .route("/albums", get(albums::list_albums))
        .route("/albums", post(albums::create_album))
        .route("/albums/:id", get(albums::get_album))
        .route("/albums/:id", put(albums::update_album))
        .route("/albums/:id", delete(albums::delete_album))
        .route("/albums/:id/tracks", get(albums::get_album_tracks))
        // Tracks
        .route("/tracks", get(tracks::list_tracks))
        .route("/tracks", post(tracks::create_track))
        .route("/tracks/:id", get(tracks::get_track))
        .route("/tracks/:id", put(tracks::update_track))
        .route("/tracks/:id", delete(tracks::delete_track))
        // Playlists
        .route("/playlists", get(playlists::list_playlists))
        .route("/playlists", post(playlists::create_playlist))
        .route("/playlists/:id", get(playlists::get_playlist))
        .route("/playlists/:id", put(playlists::update_playlist))
        .route("/playlists/:id", delete(playlists::delete_playlist))
        .route(
            "/playlists/:id/tracks",
            post(playlists::add_track_to_playlist),
        )
        .route(
            "/playlists/:id/tracks/:track_id",
            delete(playlists::remove_track_from_playlist),
        )
        // Play history
        .route(
            "/recently-played",
            get(recently_played::list_recently_played),
        )
        .route("/recently-played", post(recently_played::record_play))
        // Player transport
        .route("/player", get(player::get_player))
        .route("/player/play", post(player::play))
        .route("/player/toggle", post(player::toggle))
        .route("/player/next", post(player::next))
        .route("/player/previous", post(player::previous))
        .route("/player/seek", post(player::seek))
        .route("/player/volume", post(player::set_volume))
        .route("/player/queue", post(player::add_to_queue))
        .route("/player/queue", delete(player::clear_queue))
        .route("/player/shuffle", post(player::toggle_shuffle))
        .route("/player/repeat", post(player::toggle_repeat))
        // Events
        .route("/events", get(events::events));

    Router::new()
        .nest("/api", api_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(false)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
