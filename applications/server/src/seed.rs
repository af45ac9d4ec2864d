/// Sample catalog for demos and local development
use crate::error::Result;
use aria_core::types::{CreateAlbum, CreateArtist, CreatePlaylist, CreateTrack, TrackId};
use aria_storage::{albums, artists, playlists, recently_played, tracks};
use sqlx::SqlitePool;
use std::collections::HashMap;

struct ArtistSeed {
    name: &'static str,
    image_url: &'static str,
    description: &'static str,
}

struct AlbumSeed {
    title: &'static str,
    artist: &'static str,
    image_url: &'static str,
    release_year: i32,
    dominant_color: &'static str,
    tracks: &'static [(&'static str, u32)],
}

const ARTISTS: &[ArtistSeed] = &[
    ArtistSeed {
        name: "Cyber Dreams",
        image_url: "https://images.unsplash.com/photo-1593697972672-b1c1074e69e9",
        description: "Electronic music producer known for futuristic sounds",
    },
    ArtistSeed {
        name: "Luna Ray",
        image_url: "https://images.unsplash.com/photo-1529068755536-a5ade0dcb4e8",
        description: "Indie pop artist with ethereal vocals",
    },
    ArtistSeed {
        name: "Digital Pulse",
        image_url: "https://images.unsplash.com/photo-1520785643438-5bf77931f493",
        description: "EDM collective with energetic beats",
    },
    ArtistSeed {
        name: "Echo Chamber",
        image_url: "https://images.unsplash.com/photo-1534126511673-b6899657816a",
        description: "Ambient music composer focusing on atmospheric sounds",
    },
    ArtistSeed {
        name: "Metro Sound",
        image_url: "https://images.unsplash.com/photo-1514533212735-5df27d970db0",
        description: "Urban music producer with a knack for rhythmic beats",
    },
];

const ALBUMS: &[AlbumSeed] = &[
    AlbumSeed {
        title: "Neon Horizon",
        artist: "Cyber Dreams",
        image_url: "https://images.unsplash.com/photo-1614613535308-eb5fbd3d2c17",
        release_year: 2023,
        dominant_color: "#9D4EDD",
        tracks: &[
            ("Solar Flare", 222),
            ("Cyber Night", 195),
            ("Digital Echo", 243),
            ("Future Fade", 187),
        ],
    },
    AlbumSeed {
        title: "Electric Dreams",
        artist: "Luna Ray",
        image_url: "https://images.unsplash.com/photo-1598387993281-cecf8b71a8f8",
        release_year: 2022,
        dominant_color: "#3E78B2",
        tracks: &[("Neon Lights", 255), ("Starlight", 212), ("Moonbeam", 228)],
    },
    AlbumSeed {
        title: "Synth Wave",
        artist: "Digital Pulse",
        image_url: "https://images.unsplash.com/photo-1614613534528-3c6d0a9a8774",
        release_year: 2023,
        dominant_color: "#FF6B6B",
        tracks: &[
            ("Digital Dreams", 238),
            ("Pulse Wave", 204),
            ("Binary Code", 197),
        ],
    },
    AlbumSeed {
        title: "Midnight Forest",
        artist: "Echo Chamber",
        image_url: "https://images.unsplash.com/photo-1629276301820-0f3eedc29fd0",
        release_year: 2021,
        dominant_color: "#00F5D4",
        tracks: &[("Deep Woods", 275), ("Twilight Path", 246)],
    },
    AlbumSeed {
        title: "Urban Beats",
        artist: "Metro Sound",
        image_url: "https://images.unsplash.com/photo-1611162617213-7d7a39e9b1d7",
        release_year: 2022,
        dominant_color: "#240046",
        tracks: &[("City Lights", 232), ("Midnight Drive", 219)],
    },
];

const PLAYLISTS: &[(&str, &str, &[&str])] = &[
    (
        "Chill Vibes",
        "https://images.unsplash.com/photo-1614613535308-eb5fbd3d2c17",
        &["Future Fade", "Twilight Path"],
    ),
    (
        "Workout Mix",
        "https://images.unsplash.com/photo-1598387993281-cecf8b71a8f8",
        &["Pulse Wave", "City Lights"],
    ),
    (
        "Throwback Hits",
        "https://images.unsplash.com/photo-1629276301820-0f3eedc29fd0",
        &[],
    ),
];

/// Populate an empty database with the sample catalog
pub async fn seed(pool: &SqlitePool) -> Result<()> {
    if !tracks::get_all(pool).await?.is_empty() {
        tracing::info!("database already has tracks, skipping seed");
        return Ok(());
    }

    let mut artist_ids = HashMap::new();
    for artist in ARTISTS {
        let created = artists::create(
            pool,
            CreateArtist {
                name: artist.name.to_string(),
                image_url: artist.image_url.to_string(),
                description: Some(artist.description.to_string()),
            },
        )
        .await?;
        artist_ids.insert(artist.name, created.id);
    }
    tracing::info!("seeded {} artists", ARTISTS.len());

    let mut track_ids: HashMap<&str, TrackId> = HashMap::new();
    let mut first_tracks = Vec::new();
    for album in ALBUMS {
        let artist_id = artist_ids[album.artist];
        let created = albums::create(
            pool,
            CreateAlbum {
                title: album.title.to_string(),
                artist_id,
                image_url: album.image_url.to_string(),
                release_year: Some(album.release_year),
                dominant_color: Some(album.dominant_color.to_string()),
            },
        )
        .await?;

        for (number, (title, duration_secs)) in album.tracks.iter().copied().enumerate() {
            let track = tracks::create(
                pool,
                CreateTrack {
                    title: title.to_string(),
                    album_id: created.id,
                    artist_id,
                    duration_secs,
                    track_number: Some(number as u32 + 1),
                },
            )
            .await?;
            if number == 0 {
                first_tracks.push(track.id);
            }
            track_ids.insert(title, track.id);
        }
    }
    tracing::info!("seeded {} albums", ALBUMS.len());

    for &(name, image_url, members) in PLAYLISTS {
        let playlist = playlists::create(
            pool,
            CreatePlaylist {
                name: name.to_string(),
                image_url: Some(image_url.to_string()),
            },
        )
        .await?;
        for title in members {
            playlists::add_track(pool, playlist.id, track_ids[title]).await?;
        }
    }
    tracing::info!("seeded {} playlists", PLAYLISTS.len());

    for track_id in first_tracks.into_iter().take(3) {
        recently_played::record(pool, track_id).await?;
    }

    tracing::info!("database seeding complete");
    Ok(())
}
