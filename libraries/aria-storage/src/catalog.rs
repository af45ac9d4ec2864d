//! Catalog trait implementation backed by the SQLite pool

use crate::{albums, tracks};
use aria_core::types::{AlbumId, Track, TrackId};
use aria_core::Catalog;
use async_trait::async_trait;
use sqlx::SqlitePool;

/// SQLite-backed track catalog
#[derive(Clone)]
pub struct SqliteCatalog {
    pool: SqlitePool,
}

impl SqliteCatalog {
    /// Wrap an existing pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Catalog for SqliteCatalog {
    async fn track(&self, id: TrackId) -> aria_core::Result<Option<Track>> {
        Ok(tracks::get_by_id(&self.pool, id).await?)
    }

    async fn album_tracks(&self, album_id: AlbumId) -> aria_core::Result<Vec<Track>> {
        Ok(albums::get_tracks(&self.pool, album_id).await?)
    }
}
