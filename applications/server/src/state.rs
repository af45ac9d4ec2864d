/// Shared application state
use aria_playback::{Notice, PlaybackEngine};
use aria_storage::SqliteCatalog;
use sqlx::SqlitePool;
use tokio::sync::broadcast;

/// Application state shared across all handlers
///
/// Transport endpoints resolve track ids through `catalog` rather than the
/// raw pool; the pool stays available for the catalog CRUD slices.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub catalog: SqliteCatalog,
    pub engine: PlaybackEngine,
    pub notices: broadcast::Sender<Notice>,
}

impl AppState {
    pub fn new(
        pool: SqlitePool,
        engine: PlaybackEngine,
        notices: broadcast::Sender<Notice>,
    ) -> Self {
        Self {
            catalog: SqliteCatalog::new(pool.clone()),
            pool,
            engine,
            notices,
        }
    }
}
