//! Album queries with denormalized artist records

use crate::error::{Result, StorageError};
use crate::rows::{AlbumRow, TrackRow, TRACK_COLUMNS, TRACK_JOINS};
use aria_core::types::{Album, AlbumId, ArtistId, CreateAlbum, Track, UpdateAlbum};
use sqlx::SqlitePool;

const ALBUM_COLUMNS: &str = "\
    al.id, al.title, al.artist_id, al.image_url, al.release_year, al.dominant_color, \
    ar.name AS artist_name, ar.image_url AS artist_image_url, \
    ar.description AS artist_description";

const ALBUM_JOINS: &str = "FROM albums al LEFT JOIN artists ar ON al.artist_id = ar.id";

/// Get all albums with their artist attached, ordered by title
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Album>> {
    let sql = format!("SELECT {ALBUM_COLUMNS} {ALBUM_JOINS} ORDER BY al.title");
    let rows: Vec<AlbumRow> = sqlx::query_as(&sql).fetch_all(pool).await?;

    Ok(rows.into_iter().map(AlbumRow::into_album).collect())
}

/// Get an album by ID with its artist attached
pub async fn get_by_id(pool: &SqlitePool, id: AlbumId) -> Result<Option<Album>> {
    let sql = format!("SELECT {ALBUM_COLUMNS} {ALBUM_JOINS} WHERE al.id = ?");
    let row: Option<AlbumRow> = sqlx::query_as(&sql).bind(id.get()).fetch_optional(pool).await?;

    Ok(row.map(AlbumRow::into_album))
}

/// Get every album belonging to an artist
pub async fn get_by_artist(pool: &SqlitePool, artist_id: ArtistId) -> Result<Vec<Album>> {
    let sql = format!("SELECT {ALBUM_COLUMNS} {ALBUM_JOINS} WHERE al.artist_id = ? ORDER BY al.release_year, al.title");
    let rows: Vec<AlbumRow> = sqlx::query_as(&sql).bind(artist_id.get()).fetch_all(pool).await?;

    Ok(rows.into_iter().map(AlbumRow::into_album).collect())
}

/// Get an album's tracks in album order
pub async fn get_tracks(pool: &SqlitePool, id: AlbumId) -> Result<Vec<Track>> {
    let sql = format!(
        "SELECT {TRACK_COLUMNS} {TRACK_JOINS} WHERE t.album_id = ? ORDER BY t.track_number, t.id"
    );
    let rows: Vec<TrackRow> = sqlx::query_as(&sql).bind(id.get()).fetch_all(pool).await?;

    Ok(rows.into_iter().map(TrackRow::into_track).collect())
}

/// Insert a new album and return it with its artist attached
pub async fn create(pool: &SqlitePool, input: CreateAlbum) -> Result<Album> {
    let result = sqlx::query(
        "INSERT INTO albums (title, artist_id, image_url, release_year, dominant_color) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&input.title)
    .bind(input.artist_id.get())
    .bind(&input.image_url)
    .bind(input.release_year)
    .bind(&input.dominant_color)
    .execute(pool)
    .await?;

    let id = AlbumId::new(result.last_insert_rowid());
    get_by_id(pool, id)
        .await?
        .ok_or_else(|| StorageError::not_found("album", id.get()))
}

/// Apply a partial update; absent fields are left unchanged
pub async fn update(pool: &SqlitePool, id: AlbumId, patch: UpdateAlbum) -> Result<Album> {
    let result = sqlx::query(
        "UPDATE albums SET \
             title = COALESCE(?, title), \
             artist_id = COALESCE(?, artist_id), \
             image_url = COALESCE(?, image_url), \
             release_year = COALESCE(?, release_year), \
             dominant_color = COALESCE(?, dominant_color) \
         WHERE id = ?",
    )
    .bind(&patch.title)
    .bind(patch.artist_id.map(ArtistId::get))
    .bind(&patch.image_url)
    .bind(patch.release_year)
    .bind(&patch.dominant_color)
    .bind(id.get())
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found("album", id.get()));
    }

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| StorageError::not_found("album", id.get()))
}

/// Delete an album; cascades to its tracks
pub async fn delete(pool: &SqlitePool, id: AlbumId) -> Result<()> {
    let result = sqlx::query("DELETE FROM albums WHERE id = ?")
        .bind(id.get())
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found("album", id.get()));
    }

    Ok(())
}
