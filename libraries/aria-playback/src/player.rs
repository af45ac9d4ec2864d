//! Playback state machine
//!
//! [`Player`] is the sole owner of the playback state: current track,
//! transport flag, position, volume, queue and shuffle/repeat policy. It is
//! synchronous and runtime-free; [`crate::PlaybackEngine`] wraps it in a
//! shared handle and drives [`Player::tick`] once per simulated second.
//!
//! No operation here can fail. Preconditions that do not hold make the
//! operation a silent no-op, out-of-range volume is clamped, and collaborator
//! failures never reach this type.

use crate::events::PlayerEvent;
use crate::queue::PlayQueue;
use crate::sink::{FeedbackSink, Notice};
use crate::types::{PlayerConfig, PlayerSnapshot, RepeatMode};
use aria_core::types::Track;
use std::sync::Arc;

/// Authoritative playback state and its transitions
pub struct Player {
    current: Option<Track>,
    is_playing: bool,
    current_time: u32,
    duration: u32,
    volume: f32,
    queue: PlayQueue,
    shuffle: bool,
    repeat: RepeatMode,
    sink: Arc<dyn FeedbackSink>,
    pending: Vec<PlayerEvent>,
}

impl Player {
    /// Create a player in the idle state
    pub fn new(config: &PlayerConfig, sink: Arc<dyn FeedbackSink>) -> Self {
        Self {
            current: None,
            is_playing: false,
            current_time: 0,
            duration: 0,
            volume: config.volume.clamp(0.0, 1.0),
            queue: PlayQueue::new(),
            shuffle: false,
            repeat: RepeatMode::None,
            sink,
            pending: Vec::new(),
        }
    }

    // ===== Transport =====

    /// Load a track and start playing it from position 0
    pub fn play_track(&mut self, track: Track) {
        self.duration = track.duration_secs;
        self.current_time = 0;
        self.is_playing = true;

        self.sink.notify(Notice::new(
            "Now Playing",
            format!("{} by {}", track.title, track.artist_name()),
        ));

        self.current = Some(track.clone());
        self.pending.push(PlayerEvent::TrackStarted { track });
    }

    /// Flip between playing and paused; no-op when no track is loaded
    pub fn toggle_play_pause(&mut self) {
        if self.current.is_none() {
            return;
        }
        self.is_playing = !self.is_playing;
        self.pending.push(PlayerEvent::StateChanged {
            is_playing: self.is_playing,
        });
    }

    /// Dequeue the head of the queue and play it; no-op when the queue is empty
    pub fn next_track(&mut self) {
        let Some(next) = self.queue.pop_next() else {
            return;
        };
        self.play_track(next);
        self.pending.push(PlayerEvent::QueueChanged {
            length: self.queue.len(),
        });
    }

    /// Restart the current track from position 0
    ///
    /// Restart-only semantics: there is no play-history stack, so this never
    /// changes which track is loaded.
    pub fn previous_track(&mut self) {
        if self.current.is_none() {
            return;
        }
        self.current_time = 0;
        self.push_progress();
    }

    /// Jump to a position within the current track
    ///
    /// The value is stored verbatim; callers constrain slider input to
    /// `[0, duration]`, and the tick loop's end-of-track check recovers from
    /// anything past the end.
    pub fn seek_to(&mut self, time: u32) {
        if self.current.is_none() {
            return;
        }
        self.current_time = time;
        self.push_progress();
    }

    /// Set the volume, clamped to [0, 1]
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    // ===== Queue =====

    /// Append a track to the end of the queue
    pub fn add_to_queue(&mut self, track: Track) {
        self.sink.notify(Notice::new(
            "Added to Queue",
            format!("{} has been added to your queue.", track.title),
        ));
        self.queue.push(track);
        self.pending.push(PlayerEvent::QueueChanged {
            length: self.queue.len(),
        });
    }

    /// Drop every pending track
    pub fn clear_queue(&mut self) {
        self.queue.clear();
        self.pending.push(PlayerEvent::QueueChanged { length: 0 });
    }

    // ===== Shuffle & Repeat =====

    /// Flip the shuffle flag
    ///
    /// The flag is reported but does not reorder the queue; randomized
    /// ordering is an extension point, not implemented behavior.
    pub fn toggle_shuffle(&mut self) {
        self.shuffle = !self.shuffle;
        let notice = if self.shuffle {
            Notice::new("Shuffle On", "Your queue will play in random order.")
        } else {
            Notice::new("Shuffle Off", "Playback order is now sequential.")
        };
        self.sink.notify(notice);
        self.pending.push(PlayerEvent::ShuffleChanged {
            enabled: self.shuffle,
        });
    }

    /// Cycle the repeat policy: none → all → one → none
    pub fn toggle_repeat(&mut self) {
        self.repeat = self.repeat.cycled();
        let (title, description) = match self.repeat {
            RepeatMode::None => ("Repeat Off", "Repeat is turned off."),
            RepeatMode::All => ("Repeat On", "Repeating all tracks in queue."),
            RepeatMode::One => ("Repeat On", "Repeating current track."),
        };
        self.sink.notify(Notice::new(title, description));
        self.pending.push(PlayerEvent::RepeatChanged { mode: self.repeat });
    }

    // ===== Tick =====

    /// Advance one simulated second and apply the end-of-track rules
    ///
    /// Does nothing unless a track is loaded and playing. On reaching the
    /// track's duration: repeat-one restarts the same track, a non-empty
    /// queue auto-advances, and otherwise the transport pauses and rewinds.
    pub fn tick(&mut self) {
        if !self.is_playing || self.current.is_none() {
            return;
        }

        let elapsed = self.current_time + 1;
        if elapsed < self.duration {
            self.current_time = elapsed;
            self.push_progress();
            return;
        }

        // End of track
        match self.repeat {
            RepeatMode::One => {
                self.current_time = 0;
                self.push_progress();
            }
            RepeatMode::None | RepeatMode::All => {
                if let Some(next) = self.queue.pop_next() {
                    self.play_track(next);
                    self.pending.push(PlayerEvent::QueueChanged {
                        length: self.queue.len(),
                    });
                } else {
                    self.is_playing = false;
                    self.current_time = 0;
                    self.pending.push(PlayerEvent::StateChanged { is_playing: false });
                    self.push_progress();
                }
            }
        }
    }

    // ===== State queries =====

    /// Whether the transport is running
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Track currently loaded, if any
    pub fn current_track(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    /// Position within the current track in seconds
    pub fn current_time(&self) -> u32 {
        self.current_time
    }

    /// Volume in [0, 1]
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Number of tracks pending in the queue
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Derived progress percentage (0 when no duration)
    pub fn progress(&self) -> f64 {
        if self.duration > 0 {
            f64::from(self.current_time) / f64::from(self.duration) * 100.0
        } else {
            0.0
        }
    }

    /// Full read-only view of the state
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            current_track: self.current.clone(),
            is_playing: self.is_playing,
            current_time: self.current_time,
            duration: self.duration,
            volume: self.volume,
            playback_progress: self.progress(),
            queue: self.queue.to_vec(),
            shuffle: self.shuffle,
            repeat: self.repeat,
        }
    }

    /// Drain events accumulated since the last call
    pub(crate) fn take_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending)
    }

    fn push_progress(&mut self) {
        self.pending.push(PlayerEvent::Progress {
            current_time: self.current_time,
            duration: self.duration,
            progress: self.progress(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::NullSink;
    use aria_core::types::{AlbumId, ArtistId, TrackId};

    fn player() -> Player {
        Player::new(&PlayerConfig::default(), Arc::new(NullSink))
    }

    fn track(id: i64, title: &str, duration_secs: u32) -> Track {
        Track::new(TrackId::new(id), title, AlbumId::new(1), ArtistId::new(1), duration_secs)
    }

    #[test]
    fn play_track_loads_and_starts() {
        let mut player = player();
        player.play_track(track(1, "Nightfall", 214));

        assert_eq!(player.current_track().unwrap().title, "Nightfall");
        assert_eq!(player.current_time(), 0);
        assert!(player.is_playing());
        assert_eq!(player.snapshot().duration, 214);
    }

    #[test]
    fn toggle_without_track_is_noop() {
        let mut player = player();
        player.toggle_play_pause();
        assert!(!player.is_playing());
    }

    #[test]
    fn toggle_twice_is_idempotent() {
        let mut player = player();
        player.play_track(track(1, "A", 100));
        player.toggle_play_pause(); // pause
        assert!(!player.is_playing());

        player.toggle_play_pause();
        player.toggle_play_pause();
        assert!(!player.is_playing());
    }

    #[test]
    fn volume_is_always_clamped() {
        let mut player = player();
        player.set_volume(5.0);
        assert_eq!(player.volume(), 1.0);

        player.set_volume(-2.0);
        assert_eq!(player.volume(), 0.0);

        player.set_volume(0.4);
        assert_eq!(player.volume(), 0.4);
    }

    #[test]
    fn queue_is_fifo() {
        let mut player = player();
        player.add_to_queue(track(1, "A", 60));
        player.add_to_queue(track(2, "B", 60));

        player.next_track();
        assert_eq!(player.current_track().unwrap().title, "A");
        assert_eq!(player.queue_len(), 1);
        assert_eq!(player.snapshot().queue[0].title, "B");
    }

    #[test]
    fn next_with_empty_queue_is_noop() {
        let mut player = player();
        player.play_track(track(1, "A", 60));
        player.next_track();
        assert_eq!(player.current_track().unwrap().title, "A");
        assert!(player.is_playing());
    }

    #[test]
    fn previous_restarts_current_track() {
        let mut player = player();
        player.play_track(track(1, "A", 60));
        player.tick();
        player.tick();
        assert_eq!(player.current_time(), 2);

        player.previous_track();
        assert_eq!(player.current_time(), 0);
        assert_eq!(player.current_track().unwrap().title, "A");
    }

    #[test]
    fn repeat_one_restarts_after_duration() {
        let mut player = player();
        player.play_track(track(1, "A", 5));
        player.toggle_repeat(); // all
        player.toggle_repeat(); // one

        for _ in 0..5 {
            player.tick();
        }

        assert_eq!(player.current_time(), 0);
        assert!(player.is_playing());
        assert_eq!(player.current_track().unwrap().title, "A");
    }

    #[test]
    fn end_of_track_with_empty_queue_pauses() {
        let mut player = player();
        player.play_track(track(1, "A", 3));

        for _ in 0..3 {
            player.tick();
        }

        assert!(!player.is_playing());
        assert_eq!(player.current_time(), 0);
        assert_eq!(player.current_track().unwrap().title, "A");
    }

    #[test]
    fn end_of_track_auto_advances_into_queue() {
        let mut player = player();
        player.add_to_queue(track(1, "A", 3));
        player.play_track(track(2, "B", 3));

        for _ in 0..3 {
            player.tick();
        }

        assert_eq!(player.current_track().unwrap().title, "A");
        assert_eq!(player.queue_len(), 0);
        assert!(player.is_playing());
        assert_eq!(player.current_time(), 0);
    }

    #[test]
    fn repeat_cycles_back_to_none() {
        let mut player = player();
        player.toggle_repeat();
        player.toggle_repeat();
        player.toggle_repeat();
        assert_eq!(player.snapshot().repeat, RepeatMode::None);
    }

    #[test]
    fn shuffle_flag_flips_without_reordering() {
        let mut player = player();
        player.add_to_queue(track(1, "A", 60));
        player.add_to_queue(track(2, "B", 60));

        player.toggle_shuffle();
        let snapshot = player.snapshot();
        assert!(snapshot.shuffle);
        assert_eq!(snapshot.queue[0].title, "A");
        assert_eq!(snapshot.queue[1].title, "B");
    }

    #[test]
    fn seek_past_end_recovers_on_next_tick() {
        let mut player = player();
        player.play_track(track(1, "A", 10));
        player.seek_to(500);
        assert_eq!(player.current_time(), 500);

        player.tick();
        // End-of-track rules applied: nothing queued, repeat off
        assert!(!player.is_playing());
        assert_eq!(player.current_time(), 0);
    }

    #[test]
    fn paused_tick_does_not_advance() {
        let mut player = player();
        player.play_track(track(1, "A", 10));
        player.toggle_play_pause();

        player.tick();
        assert_eq!(player.current_time(), 0);
    }

    #[test]
    fn progress_is_derived() {
        let mut player = player();
        assert_eq!(player.progress(), 0.0);

        player.play_track(track(1, "A", 4));
        player.tick();
        assert_eq!(player.progress(), 25.0);
    }

    #[test]
    fn events_arrive_in_operation_order() {
        let mut player = player();
        player.add_to_queue(track(1, "A", 60));
        player.next_track();

        let events = player.take_events();
        assert!(matches!(events[0], PlayerEvent::QueueChanged { length: 1 }));
        assert!(matches!(events[1], PlayerEvent::TrackStarted { .. }));
        assert!(matches!(events[2], PlayerEvent::QueueChanged { length: 0 }));
    }
}
