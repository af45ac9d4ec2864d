//! Playlist queries and membership management

use crate::error::{Result, StorageError};
use crate::rows::{PlaylistRow, TrackRow, TRACK_COLUMNS};
use aria_core::types::{CreatePlaylist, Playlist, PlaylistId, Track, TrackId, UpdatePlaylist};
use sqlx::SqlitePool;

/// Get all playlists ordered by name, without their tracks
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Playlist>> {
    let rows: Vec<PlaylistRow> = sqlx::query_as(
        "SELECT id, name, image_url, created_at FROM playlists ORDER BY name",
    )
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(PlaylistRow::into_playlist).collect()
}

/// Get a playlist by ID with its tracks in playlist order
pub async fn get_by_id(pool: &SqlitePool, id: PlaylistId) -> Result<Option<Playlist>> {
    let row: Option<PlaylistRow> = sqlx::query_as(
        "SELECT id, name, image_url, created_at FROM playlists WHERE id = ?",
    )
    .bind(id.get())
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let mut playlist = row.into_playlist()?;
    playlist.tracks = Some(get_tracks(pool, id).await?);
    Ok(Some(playlist))
}

/// Get a playlist's tracks in playlist order
pub async fn get_tracks(pool: &SqlitePool, id: PlaylistId) -> Result<Vec<Track>> {
    let sql = format!(
        "SELECT {TRACK_COLUMNS} \
         FROM playlist_tracks pt \
         INNER JOIN tracks t ON pt.track_id = t.id \
         LEFT JOIN artists ar ON t.artist_id = ar.id \
         LEFT JOIN albums al ON t.album_id = al.id \
         WHERE pt.playlist_id = ? \
         ORDER BY pt.position"
    );
    let rows: Vec<TrackRow> = sqlx::query_as(&sql).bind(id.get()).fetch_all(pool).await?;

    Ok(rows.into_iter().map(TrackRow::into_track).collect())
}

/// Insert a new playlist and return it (empty)
pub async fn create(pool: &SqlitePool, input: CreatePlaylist) -> Result<Playlist> {
    let created_at = chrono::Utc::now();

    let result = sqlx::query("INSERT INTO playlists (name, image_url, created_at) VALUES (?, ?, ?)")
        .bind(&input.name)
        .bind(&input.image_url)
        .bind(created_at.timestamp())
        .execute(pool)
        .await?;

    Ok(Playlist {
        id: PlaylistId::new(result.last_insert_rowid()),
        name: input.name,
        image_url: input.image_url,
        created_at,
        tracks: Some(Vec::new()),
    })
}

/// Apply a partial update; absent fields are left unchanged
pub async fn update(pool: &SqlitePool, id: PlaylistId, patch: UpdatePlaylist) -> Result<Playlist> {
    let result = sqlx::query(
        "UPDATE playlists SET \
             name = COALESCE(?, name), \
             image_url = COALESCE(?, image_url) \
         WHERE id = ?",
    )
    .bind(&patch.name)
    .bind(&patch.image_url)
    .bind(id.get())
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found("playlist", id.get()));
    }

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| StorageError::not_found("playlist", id.get()))
}

/// Append a track at the end of a playlist
pub async fn add_track(pool: &SqlitePool, id: PlaylistId, track_id: TrackId) -> Result<()> {
    let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM playlists WHERE id = ?")
        .bind(id.get())
        .fetch_optional(pool)
        .await?;
    if exists.is_none() {
        return Err(StorageError::not_found("playlist", id.get()));
    }

    let max_position: Option<i64> =
        sqlx::query_scalar("SELECT MAX(position) FROM playlist_tracks WHERE playlist_id = ?")
            .bind(id.get())
            .fetch_one(pool)
            .await?;
    let position = max_position.map_or(0, |p| p + 1);

    sqlx::query("INSERT INTO playlist_tracks (playlist_id, track_id, position) VALUES (?, ?, ?)")
        .bind(id.get())
        .bind(track_id.get())
        .bind(position)
        .execute(pool)
        .await?;

    Ok(())
}

/// Remove a track from a playlist; positions of later tracks are unchanged
pub async fn remove_track(pool: &SqlitePool, id: PlaylistId, track_id: TrackId) -> Result<()> {
    sqlx::query("DELETE FROM playlist_tracks WHERE playlist_id = ? AND track_id = ?")
        .bind(id.get())
        .bind(track_id.get())
        .execute(pool)
        .await?;

    Ok(())
}

/// Delete a playlist; cascades to its memberships
pub async fn delete(pool: &SqlitePool, id: PlaylistId) -> Result<()> {
    let result = sqlx::query("DELETE FROM playlists WHERE id = ?")
        .bind(id.get())
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found("playlist", id.get()));
    }

    Ok(())
}
