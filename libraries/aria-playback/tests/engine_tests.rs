//! Engine-level tests driven by tokio's virtual clock
//!
//! `start_paused` freezes time; `tokio::time::sleep` then auto-advances the
//! clock, so each test controls exactly how many one-second ticks fire.

use aria_core::types::{AlbumId, ArtistId, Track, TrackId};
use aria_playback::{
    FeedbackSink, Notice, PlayEventLog, PlaybackEngine, PlayerConfig, PlayerEvent,
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn track(id: i64, title: &str, duration_secs: u32) -> Track {
    Track::new(TrackId::new(id), title, AlbumId::new(1), ArtistId::new(1), duration_secs)
}

async fn advance(secs: u64) {
    // A hair past the tick boundary so the driver always fires
    tokio::time::sleep(Duration::from_millis(secs * 1000 + 50)).await;
}

#[derive(Default)]
struct RecordingSink {
    notices: Mutex<Vec<Notice>>,
}

impl FeedbackSink for RecordingSink {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

#[derive(Default)]
struct RecordingLog {
    plays: Mutex<Vec<TrackId>>,
}

#[async_trait]
impl PlayEventLog for RecordingLog {
    async fn record_play(&self, track_id: TrackId) -> anyhow::Result<()> {
        self.plays.lock().unwrap().push(track_id);
        Ok(())
    }
}

#[derive(Default)]
struct FailingLog;

#[async_trait]
impl PlayEventLog for FailingLog {
    async fn record_play(&self, _track_id: TrackId) -> anyhow::Result<()> {
        anyhow::bail!("log backend unavailable")
    }
}

#[tokio::test(start_paused = true)]
async fn position_advances_once_per_second() {
    let engine = PlaybackEngine::headless();
    engine.play_track(track(1, "A", 100));

    advance(3).await;
    assert_eq!(engine.snapshot().current_time, 3);
}

#[tokio::test(start_paused = true)]
async fn switching_tracks_leaves_a_single_driver() {
    let engine = PlaybackEngine::headless();
    engine.play_track(track(1, "A", 100));
    engine.play_track(track(2, "B", 100));

    // Two live drivers would advance the position by 2 here
    advance(1).await;
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.current_track.unwrap().title, "B");
    assert_eq!(snapshot.current_time, 1);
}

#[tokio::test(start_paused = true)]
async fn rapid_track_switches_never_double_tick() {
    let engine = PlaybackEngine::headless();

    // Each switch retires the previous driver mid-interval; a retired tick
    // landing after the switch would advance the new track by 2 per second
    for id in 1..=10 {
        engine.play_track(track(id, "Churn", 100));
    }

    advance(1).await;
    assert_eq!(engine.snapshot().current_time, 1);
    advance(1).await;
    assert_eq!(engine.snapshot().current_time, 2);
}

#[tokio::test(start_paused = true)]
async fn pausing_freezes_the_position() {
    let engine = PlaybackEngine::headless();
    engine.play_track(track(1, "A", 100));

    advance(2).await;
    engine.toggle_play_pause();
    advance(5).await;

    let snapshot = engine.snapshot();
    assert!(!snapshot.is_playing);
    assert_eq!(snapshot.current_time, 2);

    engine.toggle_play_pause();
    advance(1).await;
    assert_eq!(engine.snapshot().current_time, 3);
}

#[tokio::test(start_paused = true)]
async fn end_of_track_auto_advances_into_queue() {
    let engine = PlaybackEngine::headless();
    engine.add_to_queue(track(2, "Next", 60));
    engine.play_track(track(1, "Short", 3));

    advance(3).await;
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.current_track.unwrap().title, "Next");
    assert!(snapshot.is_playing);
    assert_eq!(snapshot.current_time, 0);
    assert!(snapshot.queue.is_empty());
}

#[tokio::test(start_paused = true)]
async fn end_of_track_with_empty_queue_stops_ticking() {
    let engine = PlaybackEngine::headless();
    engine.play_track(track(1, "Short", 2));

    advance(10).await;
    let snapshot = engine.snapshot();
    assert!(!snapshot.is_playing);
    assert_eq!(snapshot.current_time, 0);
    assert_eq!(snapshot.current_track.unwrap().title, "Short");
}

#[tokio::test(start_paused = true)]
async fn repeat_one_loops_the_current_track() {
    let engine = PlaybackEngine::headless();
    engine.play_track(track(1, "Loop", 3));
    engine.toggle_repeat(); // all
    engine.toggle_repeat(); // one

    advance(7).await;
    let snapshot = engine.snapshot();
    assert!(snapshot.is_playing);
    assert_eq!(snapshot.current_track.unwrap().title, "Loop");
    assert_eq!(snapshot.current_time, 1);
}

#[tokio::test(start_paused = true)]
async fn seek_past_the_end_recovers() {
    let engine = PlaybackEngine::headless();
    engine.play_track(track(1, "A", 10));
    engine.seek_to(500);

    advance(1).await;
    let snapshot = engine.snapshot();
    assert!(!snapshot.is_playing);
    assert_eq!(snapshot.current_time, 0);
}

#[tokio::test(start_paused = true)]
async fn track_starts_are_recorded() {
    let log = Arc::new(RecordingLog::default());
    let engine = PlaybackEngine::new(
        PlayerConfig::default(),
        Arc::new(aria_playback::NullSink),
        Arc::clone(&log) as Arc<dyn PlayEventLog>,
    );

    engine.add_to_queue(track(2, "B", 60));
    engine.play_track(track(1, "A", 2));
    advance(2).await; // auto-advance starts B

    let plays = log.plays.lock().unwrap().clone();
    assert_eq!(plays, vec![TrackId::new(1), TrackId::new(2)]);
}

#[tokio::test(start_paused = true)]
async fn log_failures_do_not_disturb_playback() {
    let engine = PlaybackEngine::new(
        PlayerConfig::default(),
        Arc::new(aria_playback::NullSink),
        Arc::new(FailingLog),
    );

    engine.play_track(track(1, "A", 100));
    advance(2).await;

    let snapshot = engine.snapshot();
    assert!(snapshot.is_playing);
    assert_eq!(snapshot.current_time, 2);
}

#[tokio::test(start_paused = true)]
async fn notices_reach_the_sink() {
    let sink = Arc::new(RecordingSink::default());
    let engine = PlaybackEngine::new(
        PlayerConfig::default(),
        Arc::clone(&sink) as Arc<dyn FeedbackSink>,
        Arc::new(aria_playback::NullLog),
    );

    engine.play_track(track(1, "Nightfall", 214));
    engine.add_to_queue(track(2, "Afterglow", 180));
    engine.toggle_shuffle();

    let notices = sink.notices.lock().unwrap().clone();
    assert_eq!(notices.len(), 3);
    assert_eq!(notices[0].title, "Now Playing");
    assert_eq!(notices[0].description, "Nightfall by Unknown Artist");
    assert_eq!(notices[1].title, "Added to Queue");
    assert_eq!(notices[2].title, "Shuffle On");
}

#[tokio::test(start_paused = true)]
async fn subscribers_see_progress_events() {
    let engine = PlaybackEngine::headless();
    let mut events = engine.subscribe();

    engine.play_track(track(1, "A", 100));
    advance(1).await;

    let first = events.recv().await.unwrap();
    assert!(matches!(first, PlayerEvent::TrackStarted { .. }));

    let second = events.recv().await.unwrap();
    match second {
        PlayerEvent::Progress { current_time, duration, progress } => {
            assert_eq!(current_time, 1);
            assert_eq!(duration, 100);
            assert!((progress - 1.0).abs() < f64::EPSILON);
        }
        other => panic!("expected progress event, got {other:?}"),
    }
}
