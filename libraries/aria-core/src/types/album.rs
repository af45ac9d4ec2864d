/// Album domain type
use crate::types::{Artist, ArtistId, AlbumId};
use serde::{Deserialize, Serialize};

/// Album record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    /// Unique album identifier
    pub id: AlbumId,

    /// Album title
    pub title: String,

    /// Owning artist
    pub artist_id: ArtistId,

    /// Cover art URL
    pub image_url: String,

    /// Release year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,

    /// Dominant cover color, precomputed for theming (hex string)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dominant_color: Option<String>,

    /// Denormalized artist record, populated when the caller asked for it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<Artist>,
}

/// Fields for creating an album
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlbum {
    /// Album title
    pub title: String,
    /// Owning artist
    pub artist_id: ArtistId,
    /// Cover art URL
    pub image_url: String,
    /// Release year
    #[serde(default)]
    pub release_year: Option<i32>,
    /// Dominant cover color (hex string)
    #[serde(default)]
    pub dominant_color: Option<String>,
}

/// Partial update for an album; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAlbum {
    /// New title
    pub title: Option<String>,
    /// New owning artist
    pub artist_id: Option<ArtistId>,
    /// New cover art URL
    pub image_url: Option<String>,
    /// New release year
    pub release_year: Option<i32>,
    /// New dominant color
    pub dominant_color: Option<String>,
}
