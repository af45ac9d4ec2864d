//! Artist queries

use crate::error::{Result, StorageError};
use crate::rows::ArtistRow;
use aria_core::types::{Artist, ArtistId, CreateArtist, UpdateArtist};
use sqlx::SqlitePool;

/// Get all artists ordered by name
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Artist>> {
    let rows: Vec<ArtistRow> = sqlx::query_as(
        "SELECT id, name, image_url, description FROM artists ORDER BY name",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(ArtistRow::into_artist).collect())
}

/// Get an artist by ID
pub async fn get_by_id(pool: &SqlitePool, id: ArtistId) -> Result<Option<Artist>> {
    let row: Option<ArtistRow> = sqlx::query_as(
        "SELECT id, name, image_url, description FROM artists WHERE id = ?",
    )
    .bind(id.get())
    .fetch_optional(pool)
    .await?;

    Ok(row.map(ArtistRow::into_artist))
}

/// Insert a new artist and return it
pub async fn create(pool: &SqlitePool, input: CreateArtist) -> Result<Artist> {
    let result = sqlx::query("INSERT INTO artists (name, image_url, description) VALUES (?, ?, ?)")
        .bind(&input.name)
        .bind(&input.image_url)
        .bind(&input.description)
        .execute(pool)
        .await?;

    Ok(Artist {
        id: ArtistId::new(result.last_insert_rowid()),
        name: input.name,
        image_url: input.image_url,
        description: input.description,
    })
}

/// Apply a partial update; absent fields are left unchanged
pub async fn update(pool: &SqlitePool, id: ArtistId, patch: UpdateArtist) -> Result<Artist> {
    let result = sqlx::query(
        "UPDATE artists SET \
             name = COALESCE(?, name), \
             image_url = COALESCE(?, image_url), \
             description = COALESCE(?, description) \
         WHERE id = ?",
    )
    .bind(&patch.name)
    .bind(&patch.image_url)
    .bind(&patch.description)
    .bind(id.get())
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found("artist", id.get()));
    }

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| StorageError::not_found("artist", id.get()))
}

/// Delete an artist; cascades to its albums and tracks
pub async fn delete(pool: &SqlitePool, id: ArtistId) -> Result<()> {
    let result = sqlx::query("DELETE FROM artists WHERE id = ?")
        .bind(id.get())
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found("artist", id.get()));
    }

    Ok(())
}
