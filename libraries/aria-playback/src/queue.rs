//! FIFO play queue
//!
//! Plain insertion-order queue: `push` enqueues at the tail, `pop_next`
//! removes and returns the head. No priority, no dedup, no capacity bound.

use aria_core::types::Track;
use std::collections::VecDeque;

/// Ordered list of tracks pending playback
#[derive(Debug, Clone, Default)]
pub struct PlayQueue {
    tracks: VecDeque<Track>,
}

impl PlayQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a track to the end of the queue
    pub fn push(&mut self, track: Track) {
        self.tracks.push_back(track);
    }

    /// Remove and return the head of the queue
    pub fn pop_next(&mut self) -> Option<Track> {
        self.tracks.pop_front()
    }

    /// Peek at the head without removing it
    pub fn peek_next(&self) -> Option<&Track> {
        self.tracks.front()
    }

    /// Drop every pending track
    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    /// Number of pending tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the queue has no pending tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Snapshot of the pending tracks in play order
    pub fn to_vec(&self) -> Vec<Track> {
        self.tracks.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aria_core::types::{AlbumId, ArtistId, TrackId};

    fn track(id: i64, title: &str) -> Track {
        Track::new(TrackId::new(id), title, AlbumId::new(1), ArtistId::new(1), 180)
    }

    #[test]
    fn create_empty_queue() {
        let queue = PlayQueue::new();
        assert_eq!(queue.len(), 0);
        assert!(queue.is_empty());
    }

    #[test]
    fn fifo_order() {
        let mut queue = PlayQueue::new();
        queue.push(track(1, "First"));
        queue.push(track(2, "Second"));

        assert_eq!(queue.pop_next().unwrap().title, "First");
        assert_eq!(queue.pop_next().unwrap().title, "Second");
        assert!(queue.pop_next().is_none());
    }

    #[test]
    fn peek_does_not_remove() {
        let mut queue = PlayQueue::new();
        queue.push(track(1, "First"));

        assert_eq!(queue.peek_next().unwrap().title, "First");
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn clear_queue() {
        let mut queue = PlayQueue::new();
        queue.push(track(1, "First"));
        queue.push(track(2, "Second"));

        queue.clear();
        assert!(queue.is_empty());
    }

    #[test]
    fn duplicates_are_allowed() {
        let mut queue = PlayQueue::new();
        queue.push(track(1, "Same"));
        queue.push(track(1, "Same"));
        assert_eq!(queue.len(), 2);
    }
}
