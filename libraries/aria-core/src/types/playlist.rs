/// Playlist domain types
use crate::types::{PlaylistId, Track};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Named, ordered collection of tracks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Cover image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Tracks in playlist order, populated when the caller asked for them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<Track>>,
}

/// Fields for creating a playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlaylist {
    /// Playlist name
    pub name: String,
    /// Cover image URL
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Fields for updating a playlist; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlaylist {
    /// New playlist name
    pub name: Option<String>,
    /// New cover image URL
    pub image_url: Option<String>,
}
