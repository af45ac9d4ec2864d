/// Track domain type
use crate::types::{Album, AlbumId, Artist, ArtistId, TrackId};
use serde::{Deserialize, Serialize};

/// Playable audio item with a fixed duration in seconds
///
/// Immutable once fetched; identity is `id`. The optional `album` and
/// `artist` records are denormalized copies the catalog attaches for
/// display, never authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Owning album
    pub album_id: AlbumId,

    /// Owning artist
    pub artist_id: ArtistId,

    /// Duration in whole seconds
    pub duration_secs: u32,

    /// Position within the album
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_number: Option<u32>,

    /// Denormalized album record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<Album>,

    /// Denormalized artist record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<Artist>,
}

impl Track {
    /// Create a track with minimal metadata
    pub fn new(
        id: TrackId,
        title: impl Into<String>,
        album_id: AlbumId,
        artist_id: ArtistId,
        duration_secs: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            album_id,
            artist_id,
            duration_secs,
            track_number: None,
            album: None,
            artist: None,
        }
    }

    /// Artist name for display, falling back when no artist is attached
    pub fn artist_name(&self) -> &str {
        self.artist
            .as_ref()
            .map_or("Unknown Artist", |artist| artist.name.as_str())
    }
}

/// Fields for creating a track
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrack {
    /// Track title
    pub title: String,
    /// Owning album
    pub album_id: AlbumId,
    /// Owning artist
    pub artist_id: ArtistId,
    /// Duration in whole seconds
    pub duration_secs: u32,
    /// Position within the album
    #[serde(default)]
    pub track_number: Option<u32>,
}

/// Partial update for a track; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrack {
    /// New title
    pub title: Option<String>,
    /// New owning album
    pub album_id: Option<AlbumId>,
    /// New owning artist
    pub artist_id: Option<ArtistId>,
    /// New duration in seconds
    pub duration_secs: Option<u32>,
    /// New album position
    pub track_number: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_creation() {
        let track = Track::new(TrackId::new(1), "Nightfall", AlbumId::new(2), ArtistId::new(3), 214);
        assert_eq!(track.title, "Nightfall");
        assert_eq!(track.duration_secs, 214);
        assert!(track.artist.is_none());
    }

    #[test]
    fn artist_name_fallback() {
        let mut track = Track::new(TrackId::new(1), "Nightfall", AlbumId::new(2), ArtistId::new(3), 214);
        assert_eq!(track.artist_name(), "Unknown Artist");

        track.artist = Some(Artist {
            id: ArtistId::new(3),
            name: "Ada Vale".to_string(),
            image_url: String::new(),
            description: None,
        });
        assert_eq!(track.artist_name(), "Ada Vale");
    }

    #[test]
    fn track_json_is_camel_case() {
        let track = Track::new(TrackId::new(1), "Nightfall", AlbumId::new(2), ArtistId::new(3), 214);
        let json = serde_json::to_value(&track).unwrap();
        assert_eq!(json["durationSecs"], 214);
        assert_eq!(json["albumId"], 2);
    }
}
