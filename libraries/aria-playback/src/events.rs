//! Playback events
//!
//! Event-based communication for UI synchronization. Events are emitted at
//! key points: a track starting, play/pause flips, per-tick progress, and
//! queue/shuffle/repeat changes. Consumers subscribe through
//! [`crate::PlaybackEngine::subscribe`].

use crate::types::RepeatMode;
use aria_core::types::Track;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PlayerEvent {
    /// A track was loaded and started from position 0
    #[serde(rename_all = "camelCase")]
    TrackStarted {
        /// The track now playing
        track: Track,
    },

    /// The transport flipped between playing and paused
    #[serde(rename_all = "camelCase")]
    StateChanged {
        /// New transport state
        is_playing: bool,
    },

    /// One simulated second elapsed
    #[serde(rename_all = "camelCase")]
    Progress {
        /// Position in seconds
        current_time: u32,
        /// Track duration in seconds
        duration: u32,
        /// Derived percentage (0–100)
        progress: f64,
    },

    /// Tracks were added to or removed from the queue
    #[serde(rename_all = "camelCase")]
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// Shuffle flag flipped
    #[serde(rename_all = "camelCase")]
    ShuffleChanged {
        /// New flag value
        enabled: bool,
    },

    /// Repeat policy cycled
    #[serde(rename_all = "camelCase")]
    RepeatChanged {
        /// New repeat mode
        mode: RepeatMode,
    },
}
