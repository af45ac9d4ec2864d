//! Aria Core
//!
//! Domain types, the catalog data-source contract, and error handling
//! shared across the Aria music player workspace.
//!
//! The core crate defines:
//! - **Catalog Types**: `Artist`, `Album`, `Track`, `Playlist`
//! - **The `Catalog` trait**: how consumers fetch already-resolved records
//! - **Error Handling**: unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use aria_core::types::{Track, TrackId, AlbumId, ArtistId};
//!
//! let track = Track::new(TrackId::new(1), "Nightfall", AlbumId::new(1), ArtistId::new(1), 214);
//! assert_eq!(track.duration_secs, 214);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use catalog::Catalog;
pub use error::{CoreError, Result};
pub use types::{
    Album, AlbumId, Artist, ArtistId, CreateAlbum, CreateArtist, CreatePlaylist, CreateTrack,
    Playlist, PlaylistId, Track, TrackId, UpdateAlbum, UpdateArtist, UpdatePlaylist, UpdateTrack,
};
