/// ID types for Aria entities
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create an ID from its database rowid
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the inner integer
            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(
    /// Artist identifier
    ArtistId
);
define_id!(
    /// Album identifier
    AlbumId
);
define_id!(
    /// Track identifier
    TrackId
);
define_id!(
    /// Playlist identifier
    PlaylistId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_roundtrip() {
        let id = TrackId::new(42);
        assert_eq!(id.get(), 42);
        assert_eq!(format!("{}", id), "42");
    }

    #[test]
    fn id_from_i64() {
        let id: AlbumId = 7.into();
        assert_eq!(id, AlbumId::new(7));
    }

    #[test]
    fn id_serde_transparent() {
        let id = PlaylistId::new(3);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "3");
    }
}
