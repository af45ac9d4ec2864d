//! Shared playback engine handle
//!
//! [`PlaybackEngine`] wraps the synchronous [`Player`] in a cloneable handle
//! and owns the tick driver: a single tokio task that advances the player by
//! one second of wall-clock time while the transport is running. Transport
//! operations restart the driver so that switching tracks never leaves a
//! second driver alive ticking the old cadence.
//!
//! Every state transition drains the player's pending events, broadcasts
//! them to subscribers, and schedules a fire-and-forget play record for each
//! track start.

use crate::events::PlayerEvent;
use crate::player::Player;
use crate::sink::{FeedbackSink, NullLog, NullSink, PlayEventLog};
use crate::types::{PlayerConfig, PlayerSnapshot};
use aria_core::types::Track;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

const TICK_INTERVAL: Duration = Duration::from_secs(1);
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Player plus the tick generation, guarded by one mutex
///
/// The generation is bumped under the same lock as every state mutation, and
/// the tick driver re-reads it under that lock before touching the player.
/// A driver that was aborted mid-flight therefore either serializes fully
/// before the mutation (an ordinary tick) or observes the new generation and
/// exits; it can never apply a stale tick afterwards.
struct Shared {
    player: Player,
    generation: u64,
}

/// Cloneable handle to the playback state machine and its tick driver
#[derive(Clone)]
pub struct PlaybackEngine {
    shared: Arc<Mutex<Shared>>,
    ticker: Arc<Mutex<Option<JoinHandle<()>>>>,
    log: Arc<dyn PlayEventLog>,
    events: broadcast::Sender<PlayerEvent>,
}

impl PlaybackEngine {
    /// Create an engine with the given collaborators
    ///
    /// Must be called from within a tokio runtime; the tick driver and play
    /// records are spawned onto it.
    pub fn new(
        config: PlayerConfig,
        sink: Arc<dyn FeedbackSink>,
        log: Arc<dyn PlayEventLog>,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            shared: Arc::new(Mutex::new(Shared {
                player: Player::new(&config, sink),
                generation: 0,
            })),
            ticker: Arc::new(Mutex::new(None)),
            log,
            events,
        }
    }

    /// Engine with default config and inert collaborators
    pub fn headless() -> Self {
        Self::new(
            PlayerConfig::default(),
            Arc::new(NullSink),
            Arc::new(NullLog),
        )
    }

    /// Subscribe to the event stream
    ///
    /// Slow receivers may observe [`broadcast::error::RecvError::Lagged`];
    /// the snapshot endpoint is the catch-up path.
    pub fn subscribe(&self) -> broadcast::Receiver<PlayerEvent> {
        self.events.subscribe()
    }

    // ===== Transport =====

    /// Load a track and start playing it from position 0
    pub fn play_track(&self, track: Track) {
        self.with_player(|player| player.play_track(track));
    }

    /// Flip between playing and paused
    pub fn toggle_play_pause(&self) {
        self.with_player(Player::toggle_play_pause);
    }

    /// Dequeue the head of the queue and play it
    pub fn next_track(&self) {
        self.with_player(Player::next_track);
    }

    /// Restart the current track from position 0
    pub fn previous_track(&self) {
        self.with_player(Player::previous_track);
    }

    /// Jump to a position within the current track
    pub fn seek_to(&self, time: u32) {
        self.with_player(|player| player.seek_to(time));
    }

    /// Set the volume, clamped to [0, 1]
    pub fn set_volume(&self, volume: f32) {
        self.with_player(|player| player.set_volume(volume));
    }

    // ===== Queue =====

    /// Append a track to the end of the queue
    pub fn add_to_queue(&self, track: Track) {
        self.with_player(|player| player.add_to_queue(track));
    }

    /// Drop every pending track
    pub fn clear_queue(&self) {
        self.with_player(Player::clear_queue);
    }

    // ===== Shuffle & Repeat =====

    /// Flip the shuffle flag
    pub fn toggle_shuffle(&self) {
        self.with_player(Player::toggle_shuffle);
    }

    /// Cycle the repeat policy: none → all → one → none
    pub fn toggle_repeat(&self) {
        self.with_player(Player::toggle_repeat);
    }

    // ===== State =====

    /// Full read-only view of the playback state
    pub fn snapshot(&self) -> PlayerSnapshot {
        lock(&self.shared).player.snapshot()
    }

    /// Run one operation on the player, then dispatch its events and bring
    /// the tick driver in line with the resulting transport state.
    ///
    /// The generation bump happens under the player lock, atomically with
    /// the mutation, so an in-flight tick can never land on the new state.
    fn with_player(&self, op: impl FnOnce(&mut Player)) {
        let (events, playing, generation) = {
            let mut shared = lock(&self.shared);
            op(&mut shared.player);
            shared.generation += 1;
            (
                shared.player.take_events(),
                shared.player.is_playing(),
                shared.generation,
            )
        };
        self.dispatch(events);
        self.sync_ticker(playing, generation);
    }

    fn dispatch(&self, events: Vec<PlayerEvent>) {
        for event in events {
            if let PlayerEvent::TrackStarted { track } = &event {
                let log = Arc::clone(&self.log);
                let track_id = track.id;
                tokio::spawn(async move {
                    if let Err(error) = log.record_play(track_id).await {
                        tracing::warn!(%track_id, %error, "failed to record play");
                    }
                });
            }
            // Err means no subscribers, which is fine
            let _ = self.events.send(event);
        }
    }

    /// Start or stop the tick driver to match the transport state
    ///
    /// Restarting (not reusing) the task on every transport change resets
    /// the tick phase, so the first tick after `play_track` always lands a
    /// full second later.
    fn sync_ticker(&self, playing: bool, generation: u64) {
        let mut ticker = lock(&self.ticker);
        if let Some(handle) = ticker.take() {
            handle.abort();
        }
        if !playing {
            return;
        }

        let shared = Arc::clone(&self.shared);
        let engine = self.clone();
        *ticker = Some(tokio::spawn(async move {
            let mut interval =
                tokio::time::interval_at(tokio::time::Instant::now() + TICK_INTERVAL, TICK_INTERVAL);
            loop {
                interval.tick().await;
                let (events, playing) = {
                    let mut shared = lock(&shared);
                    if shared.generation != generation {
                        return;
                    }
                    shared.player.tick();
                    (shared.player.take_events(), shared.player.is_playing())
                };
                engine.dispatch(events);
                if !playing {
                    return;
                }
            }
        }));
    }
}

/// Lock a mutex, recovering the data if a holder panicked
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
