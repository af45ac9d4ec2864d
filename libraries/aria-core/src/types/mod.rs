//! Domain types for the Aria catalog

mod album;
mod artist;
mod ids;
mod playlist;
mod track;

pub use album::{Album, CreateAlbum, UpdateAlbum};
pub use artist::{Artist, CreateArtist, UpdateArtist};
pub use ids::{AlbumId, ArtistId, PlaylistId, TrackId};
pub use playlist::{CreatePlaylist, Playlist, UpdatePlaylist};
pub use track::{CreateTrack, Track, UpdateTrack};
