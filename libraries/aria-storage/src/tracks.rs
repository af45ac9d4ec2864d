//! Track queries with denormalized artist/album records

use crate::error::{Result, StorageError};
use crate::rows::{TrackRow, TRACK_COLUMNS, TRACK_JOINS};
use aria_core::types::{AlbumId, ArtistId, CreateTrack, Track, TrackId, UpdateTrack};
use sqlx::SqlitePool;

/// Get all tracks ordered by title
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Track>> {
    let sql = format!("SELECT {TRACK_COLUMNS} {TRACK_JOINS} ORDER BY t.title");
    let rows: Vec<TrackRow> = sqlx::query_as(&sql).fetch_all(pool).await?;

    Ok(rows.into_iter().map(TrackRow::into_track).collect())
}

/// Get a track by ID
pub async fn get_by_id(pool: &SqlitePool, id: TrackId) -> Result<Option<Track>> {
    let sql = format!("SELECT {TRACK_COLUMNS} {TRACK_JOINS} WHERE t.id = ?");
    let row: Option<TrackRow> = sqlx::query_as(&sql).bind(id.get()).fetch_optional(pool).await?;

    Ok(row.map(TrackRow::into_track))
}

/// Search tracks by title, artist name, or album title
pub async fn search(pool: &SqlitePool, query: &str) -> Result<Vec<Track>> {
    let pattern = format!("%{query}%");
    let sql = format!(
        "SELECT {TRACK_COLUMNS} {TRACK_JOINS} \
         WHERE t.title LIKE ? OR ar.name LIKE ? OR al.title LIKE ? \
         ORDER BY t.title"
    );
    let rows: Vec<TrackRow> = sqlx::query_as(&sql)
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(TrackRow::into_track).collect())
}

/// Insert a new track and return it with its relations attached
pub async fn create(pool: &SqlitePool, input: CreateTrack) -> Result<Track> {
    let result = sqlx::query(
        "INSERT INTO tracks (title, album_id, artist_id, duration_secs, track_number) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&input.title)
    .bind(input.album_id.get())
    .bind(input.artist_id.get())
    .bind(i64::from(input.duration_secs))
    .bind(input.track_number.map(i64::from))
    .execute(pool)
    .await?;

    let id = TrackId::new(result.last_insert_rowid());
    get_by_id(pool, id)
        .await?
        .ok_or_else(|| StorageError::not_found("track", id.get()))
}

/// Apply a partial update; absent fields are left unchanged
pub async fn update(pool: &SqlitePool, id: TrackId, patch: UpdateTrack) -> Result<Track> {
    let result = sqlx::query(
        "UPDATE tracks SET \
             title = COALESCE(?, title), \
             album_id = COALESCE(?, album_id), \
             artist_id = COALESCE(?, artist_id), \
             duration_secs = COALESCE(?, duration_secs), \
             track_number = COALESCE(?, track_number) \
         WHERE id = ?",
    )
    .bind(&patch.title)
    .bind(patch.album_id.map(AlbumId::get))
    .bind(patch.artist_id.map(ArtistId::get))
    .bind(patch.duration_secs.map(i64::from))
    .bind(patch.track_number.map(i64::from))
    .bind(id.get())
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found("track", id.get()));
    }

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| StorageError::not_found("track", id.get()))
}

/// Delete a track
pub async fn delete(pool: &SqlitePool, id: TrackId) -> Result<()> {
    let result = sqlx::query("DELETE FROM tracks WHERE id = ?")
        .bind(id.get())
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found("track", id.get()));
    }

    Ok(())
}
