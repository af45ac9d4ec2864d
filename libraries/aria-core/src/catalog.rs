//! Catalog data-source contract
//!
//! The playback layer never fetches anything itself; it receives
//! already-resolved [`Track`] values. This trait is the seam the UI and
//! server layers use to resolve ids into records before handing them over.

use crate::error::Result;
use crate::types::{AlbumId, Track, TrackId};
use async_trait::async_trait;

/// Read-side catalog contract consumed by player frontends
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Fetch a single track by id, with artist and album attached
    async fn track(&self, id: TrackId) -> Result<Option<Track>>;

    /// Fetch an album's tracks in album order
    async fn album_tracks(&self, album_id: AlbumId) -> Result<Vec<Track>>;
}
