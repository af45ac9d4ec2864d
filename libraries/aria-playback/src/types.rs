//! Core types for the playback engine

use aria_core::types::Track;
use serde::{Deserialize, Serialize};

/// Repeat policy applied when the current track's duration is reached
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    /// Stop when the queue ends
    #[default]
    None,

    /// Keep draining the queue
    All,

    /// Loop the current track only
    One,
}

impl RepeatMode {
    /// Advance one step in the none → all → one → none cycle
    pub fn cycled(self) -> Self {
        match self {
            RepeatMode::None => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::None,
        }
    }
}

/// Configuration for the playback engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Initial volume in [0, 1] (default: 0.7)
    pub volume: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self { volume: 0.7 }
    }
}

/// Read-only view of the playback state
///
/// Everything a frontend needs to render transport controls. The
/// `playback_progress` percentage is derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    /// Track currently loaded, if any
    pub current_track: Option<Track>,

    /// Whether the transport is running
    pub is_playing: bool,

    /// Position within the current track, in whole seconds
    pub current_time: u32,

    /// Duration of the current track in seconds (0 when idle)
    pub duration: u32,

    /// Volume in [0, 1]
    pub volume: f32,

    /// Position as a percentage of duration (0 when no duration)
    pub playback_progress: f64,

    /// Pending tracks in play order
    pub queue: Vec<Track>,

    /// Shuffle flag (reported only; ordering is unaffected)
    pub shuffle: bool,

    /// Active repeat policy
    pub repeat: RepeatMode,
}
