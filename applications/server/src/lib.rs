//! Aria music server
//!
//! HTTP surface for the Aria catalog and playback engine: REST endpoints
//! for artists, albums, tracks, playlists and play history, transport
//! control routes that drive the shared [`aria_playback::PlaybackEngine`],
//! and a server-sent event stream carrying playback events and notices.

pub mod api;
pub mod config;
pub mod error;
pub mod seed;
pub mod services;
pub mod state;

pub use api::create_router;
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;
