//! Collaborator seams the engine calls out through
//!
//! Both collaborators are fire-and-forget: the engine never awaits or
//! depends on their outcome, and a failing collaborator never changes
//! playback state.

use aria_core::types::TrackId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A transient user-facing message (toast-equivalent)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    /// Short headline ("Now Playing", "Added to Queue", …)
    pub title: String,

    /// One-line detail text
    pub description: String,
}

impl Notice {
    /// Build a notice
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Notification channel the engine posts notices to after state transitions
///
/// Implementations must not block; the engine calls this synchronously on
/// the transport path.
pub trait FeedbackSink: Send + Sync {
    /// Deliver a notice. Best-effort, outcome ignored.
    fn notify(&self, notice: Notice);
}

/// Best-effort recorder of "this track was played"
///
/// Invoked once per track start, scheduled after the synchronous state
/// mutation completes. Errors are logged at the call site and discarded.
#[async_trait]
pub trait PlayEventLog: Send + Sync {
    /// Record that a track started playing
    async fn record_play(&self, track_id: TrackId) -> anyhow::Result<()>;
}

/// Sink that drops every notice; useful for tests and headless setups
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl FeedbackSink for NullSink {
    fn notify(&self, _notice: Notice) {}
}

/// Log that records nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLog;

#[async_trait]
impl PlayEventLog for NullLog {
    async fn record_play(&self, _track_id: TrackId) -> anyhow::Result<()> {
        Ok(())
    }
}
