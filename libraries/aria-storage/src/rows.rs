//! Shared row types for queries that join across tables

use crate::error::{Result, StorageError};
use aria_core::types::{Album, AlbumId, Artist, ArtistId, Playlist, PlaylistId, Track, TrackId};
use chrono::DateTime;

/// Column list for track queries joined against artists and albums
///
/// Every track-returning query selects these columns so [`TrackRow`]
/// deserializes uniformly.
pub(crate) const TRACK_COLUMNS: &str = "\
    t.id, t.title, t.album_id, t.artist_id, t.duration_secs, t.track_number, \
    ar.name AS artist_name, ar.image_url AS artist_image_url, \
    ar.description AS artist_description, \
    al.title AS album_title, al.image_url AS album_image_url, \
    al.release_year AS album_release_year, al.dominant_color AS album_dominant_color";

/// Join clauses pairing [`TRACK_COLUMNS`]
pub(crate) const TRACK_JOINS: &str = "\
    FROM tracks t \
    LEFT JOIN artists ar ON t.artist_id = ar.id \
    LEFT JOIN albums al ON t.album_id = al.id";

#[derive(sqlx::FromRow)]
pub(crate) struct TrackRow {
    pub id: i64,
    pub title: String,
    pub album_id: i64,
    pub artist_id: i64,
    pub duration_secs: i64,
    pub track_number: Option<i64>,
    pub artist_name: Option<String>,
    pub artist_image_url: Option<String>,
    pub artist_description: Option<String>,
    pub album_title: Option<String>,
    pub album_image_url: Option<String>,
    pub album_release_year: Option<i64>,
    pub album_dominant_color: Option<String>,
}

impl TrackRow {
    pub(crate) fn into_track(self) -> Track {
        let artist = self.artist_name.map(|name| Artist {
            id: ArtistId::new(self.artist_id),
            name,
            image_url: self.artist_image_url.unwrap_or_default(),
            description: self.artist_description,
        });
        let album = self.album_title.map(|title| Album {
            id: AlbumId::new(self.album_id),
            title,
            artist_id: ArtistId::new(self.artist_id),
            image_url: self.album_image_url.unwrap_or_default(),
            release_year: self.album_release_year.map(|y| y as i32),
            dominant_color: self.album_dominant_color,
            artist: None,
        });

        Track {
            id: TrackId::new(self.id),
            title: self.title,
            album_id: AlbumId::new(self.album_id),
            artist_id: ArtistId::new(self.artist_id),
            duration_secs: self.duration_secs as u32,
            track_number: self.track_number.map(|n| n as u32),
            album,
            artist,
        }
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct ArtistRow {
    pub id: i64,
    pub name: String,
    pub image_url: String,
    pub description: Option<String>,
}

impl ArtistRow {
    pub(crate) fn into_artist(self) -> Artist {
        Artist {
            id: ArtistId::new(self.id),
            name: self.name,
            image_url: self.image_url,
            description: self.description,
        }
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct AlbumRow {
    pub id: i64,
    pub title: String,
    pub artist_id: i64,
    pub image_url: String,
    pub release_year: Option<i64>,
    pub dominant_color: Option<String>,
    pub artist_name: Option<String>,
    pub artist_image_url: Option<String>,
    pub artist_description: Option<String>,
}

impl AlbumRow {
    pub(crate) fn into_album(self) -> Album {
        let artist = self.artist_name.map(|name| Artist {
            id: ArtistId::new(self.artist_id),
            name,
            image_url: self.artist_image_url.unwrap_or_default(),
            description: self.artist_description,
        });

        Album {
            id: AlbumId::new(self.id),
            title: self.title,
            artist_id: ArtistId::new(self.artist_id),
            image_url: self.image_url,
            release_year: self.release_year.map(|y| y as i32),
            dominant_color: self.dominant_color,
            artist,
        }
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct PlaylistRow {
    pub id: i64,
    pub name: String,
    pub image_url: Option<String>,
    pub created_at: i64,
}

impl PlaylistRow {
    pub(crate) fn into_playlist(self) -> Result<Playlist> {
        let created_at = DateTime::from_timestamp(self.created_at, 0).ok_or_else(|| {
            StorageError::CorruptRow(format!("invalid playlist timestamp: {}", self.created_at))
        })?;

        Ok(Playlist {
            id: PlaylistId::new(self.id),
            name: self.name,
            image_url: self.image_url,
            created_at,
            tracks: None,
        })
    }
}
