//! Playback engine for the Aria music player
//!
//! Simulates transport for a catalog of tracks: play/pause, seek, a FIFO
//! queue, shuffle and repeat policies, and a once-per-second position tick.
//! There is no audio pipeline; "playing" means the position advances.
//!
//! The crate splits into a synchronous [`Player`] state machine and an async
//! [`PlaybackEngine`] handle that drives it from a tokio runtime. Frontends
//! observe the engine through [`PlaybackEngine::subscribe`] plus
//! [`PlaybackEngine::snapshot`].
//!
//! ```no_run
//! use aria_playback::PlaybackEngine;
//! use aria_core::types::{AlbumId, ArtistId, Track, TrackId};
//!
//! # async fn demo() {
//! let engine = PlaybackEngine::headless();
//! let track = Track::new(TrackId::new(1), "Nightfall", AlbumId::new(1), ArtistId::new(1), 214);
//! engine.play_track(track);
//! assert!(engine.snapshot().is_playing);
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod engine;
pub mod events;
pub mod player;
pub mod queue;
pub mod sink;
pub mod types;

pub use engine::PlaybackEngine;
pub use events::PlayerEvent;
pub use player::Player;
pub use queue::PlayQueue;
pub use sink::{FeedbackSink, Notice, NullLog, NullSink, PlayEventLog};
pub use types::{PlayerConfig, PlayerSnapshot, RepeatMode};
