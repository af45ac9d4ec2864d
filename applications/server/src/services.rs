/// Engine collaborators backed by server infrastructure
use aria_core::types::TrackId;
use aria_playback::{FeedbackSink, Notice, PlayEventLog};
use async_trait::async_trait;
use sqlx::SqlitePool;
use tokio::sync::broadcast;

/// Fans notices out to every connected event-stream client
pub struct BroadcastSink {
    sender: broadcast::Sender<Notice>,
}

impl BroadcastSink {
    pub fn new(sender: broadcast::Sender<Notice>) -> Self {
        Self { sender }
    }
}

impl FeedbackSink for BroadcastSink {
    fn notify(&self, notice: Notice) {
        // Err means no clients are connected right now
        let _ = self.sender.send(notice);
    }
}

/// Writes play records into the `recently_played` table
pub struct DbPlayLog {
    pool: SqlitePool,
}

impl DbPlayLog {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlayEventLog for DbPlayLog {
    async fn record_play(&self, track_id: TrackId) -> anyhow::Result<()> {
        aria_storage::recently_played::record(&self.pool, track_id).await?;
        Ok(())
    }
}
