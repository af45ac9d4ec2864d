//! Property tests for the synchronous state machine

use aria_core::types::{AlbumId, ArtistId, Track, TrackId};
use aria_playback::{NullSink, Player, PlayerConfig, RepeatMode};
use proptest::prelude::*;
use std::sync::Arc;

fn player() -> Player {
    Player::new(&PlayerConfig::default(), Arc::new(NullSink))
}

fn track(id: i64, duration_secs: u32) -> Track {
    Track::new(TrackId::new(id), format!("Track {id}"), AlbumId::new(1), ArtistId::new(1), duration_secs)
}

proptest! {
    #[test]
    fn volume_always_lands_in_unit_interval(volume in -10.0f32..10.0) {
        let mut player = player();
        player.set_volume(volume);
        prop_assert!((0.0..=1.0).contains(&player.volume()));
        if (0.0..=1.0).contains(&volume) {
            prop_assert_eq!(player.volume(), volume);
        }
    }

    #[test]
    fn repeat_cycle_has_period_three(presses in 0usize..30) {
        let mut player = player();
        for _ in 0..presses {
            player.toggle_repeat();
        }
        let expected = match presses % 3 {
            0 => RepeatMode::None,
            1 => RepeatMode::All,
            _ => RepeatMode::One,
        };
        prop_assert_eq!(player.snapshot().repeat, expected);
    }

    #[test]
    fn position_never_exceeds_duration(duration in 1u32..600, ticks in 0u32..2000) {
        let mut player = player();
        player.play_track(track(1, duration));
        for _ in 0..ticks {
            player.tick();
        }
        prop_assert!(player.current_time() < duration);
    }

    #[test]
    fn queue_drains_in_insertion_order(ids in proptest::collection::vec(1i64..1000, 0..20)) {
        let mut player = player();
        for &id in &ids {
            player.add_to_queue(track(id, 60));
        }
        for &id in &ids {
            player.next_track();
            prop_assert_eq!(player.current_track().unwrap().id, TrackId::new(id));
        }
        prop_assert_eq!(player.queue_len(), 0);
    }

    #[test]
    fn progress_stays_in_percentage_range(duration in 1u32..600, ticks in 0u32..700) {
        let mut player = player();
        player.play_track(track(1, duration));
        for _ in 0..ticks {
            player.tick();
        }
        let progress = player.snapshot().playback_progress;
        prop_assert!((0.0..=100.0).contains(&progress));
    }
}
