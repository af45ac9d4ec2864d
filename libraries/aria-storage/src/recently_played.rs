//! Play history

use crate::error::Result;
use crate::rows::{TrackRow, TRACK_COLUMNS};
use aria_core::types::{Track, TrackId};
use sqlx::SqlitePool;

/// Record that a track was played just now
pub async fn record(pool: &SqlitePool, track_id: TrackId) -> Result<()> {
    sqlx::query("INSERT INTO recently_played (track_id, played_at) VALUES (?, ?)")
        .bind(track_id.get())
        .bind(chrono::Utc::now().timestamp())
        .execute(pool)
        .await?;

    Ok(())
}

/// Most recently played tracks, newest first
///
/// Each track appears once even when it was played repeatedly.
pub async fn get_recent(pool: &SqlitePool, limit: u32) -> Result<Vec<Track>> {
    let sql = format!(
        "SELECT {TRACK_COLUMNS} \
         FROM (SELECT track_id, MAX(played_at) AS last_played, MAX(id) AS last_id \
               FROM recently_played GROUP BY track_id) rp \
         INNER JOIN tracks t ON rp.track_id = t.id \
         LEFT JOIN artists ar ON t.artist_id = ar.id \
         LEFT JOIN albums al ON t.album_id = al.id \
         ORDER BY rp.last_played DESC, rp.last_id DESC \
         LIMIT ?"
    );
    let rows: Vec<TrackRow> = sqlx::query_as(&sql)
        .bind(i64::from(limit))
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(TrackRow::into_track).collect())
}
