//! Storage tests against an in-memory database

use aria_core::types::{
    CreateAlbum, CreateArtist, CreatePlaylist, CreateTrack, TrackId, UpdateArtist, UpdatePlaylist,
    UpdateTrack,
};
use aria_core::Catalog;
use aria_storage::{
    albums, artists, playlists, recently_played, run_migrations, tracks, SqliteCatalog,
    StorageError,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

// A single connection so every query sees the same in-memory database
async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .in_memory(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}

async fn seed_track(pool: &SqlitePool, title: &str, duration_secs: u32) -> TrackId {
    let artist = artists::create(
        pool,
        CreateArtist {
            name: format!("{title} Artist"),
            image_url: "https://img.example/a.jpg".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();

    let album = albums::create(
        pool,
        CreateAlbum {
            title: format!("{title} Album"),
            artist_id: artist.id,
            image_url: "https://img.example/al.jpg".to_string(),
            release_year: Some(2024),
            dominant_color: None,
        },
    )
    .await
    .unwrap();

    tracks::create(
        pool,
        CreateTrack {
            title: title.to_string(),
            album_id: album.id,
            artist_id: artist.id,
            duration_secs,
            track_number: Some(1),
        },
    )
    .await
    .unwrap()
    .id
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let pool = test_pool().await;
    run_migrations(&pool).await.unwrap();
}

#[tokio::test]
async fn created_track_comes_back_with_relations() {
    let pool = test_pool().await;
    let id = seed_track(&pool, "Nightfall", 214).await;

    let track = tracks::get_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(track.title, "Nightfall");
    assert_eq!(track.duration_secs, 214);
    assert_eq!(track.artist.as_ref().unwrap().name, "Nightfall Artist");
    assert_eq!(track.album.as_ref().unwrap().title, "Nightfall Album");
}

#[tokio::test]
async fn missing_track_is_none() {
    let pool = test_pool().await;
    assert!(tracks::get_by_id(&pool, TrackId::new(999)).await.unwrap().is_none());
}

#[tokio::test]
async fn update_patches_only_present_fields() {
    let pool = test_pool().await;
    let id = seed_track(&pool, "Original", 100).await;

    let updated = tracks::update(
        &pool,
        id,
        UpdateTrack {
            title: Some("Renamed".to_string()),
            ..UpdateTrack::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.duration_secs, 100);
}

#[tokio::test]
async fn updating_missing_artist_is_not_found() {
    let pool = test_pool().await;
    let result = artists::update(
        &pool,
        aria_core::types::ArtistId::new(42),
        UpdateArtist::default(),
    )
    .await;

    assert!(matches!(result, Err(StorageError::NotFound { .. })));
}

#[tokio::test]
async fn album_tracks_come_back_in_album_order() {
    let pool = test_pool().await;
    let first = seed_track(&pool, "One", 60).await;
    let track = tracks::get_by_id(&pool, first).await.unwrap().unwrap();

    let second = tracks::create(
        &pool,
        CreateTrack {
            title: "Two".to_string(),
            album_id: track.album_id,
            artist_id: track.artist_id,
            duration_secs: 90,
            track_number: Some(2),
        },
    )
    .await
    .unwrap();

    let listed = albums::get_tracks(&pool, track.album_id).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, first);
    assert_eq!(listed[1].id, second.id);
}

#[tokio::test]
async fn playlist_membership_keeps_insertion_order() {
    let pool = test_pool().await;
    let a = seed_track(&pool, "A", 60).await;
    let b = seed_track(&pool, "B", 60).await;
    let c = seed_track(&pool, "C", 60).await;

    let playlist = playlists::create(
        &pool,
        CreatePlaylist {
            name: "Mix".to_string(),
            image_url: None,
        },
    )
    .await
    .unwrap();

    playlists::add_track(&pool, playlist.id, a).await.unwrap();
    playlists::add_track(&pool, playlist.id, b).await.unwrap();
    playlists::add_track(&pool, playlist.id, c).await.unwrap();
    playlists::remove_track(&pool, playlist.id, b).await.unwrap();

    let fetched = playlists::get_by_id(&pool, playlist.id).await.unwrap().unwrap();
    let titles: Vec<_> = fetched
        .tracks
        .unwrap()
        .into_iter()
        .map(|t| t.title)
        .collect();
    assert_eq!(titles, vec!["A", "C"]);
}

#[tokio::test]
async fn playlist_update_patches_only_present_fields() {
    let pool = test_pool().await;
    let track = seed_track(&pool, "A", 60).await;

    let playlist = playlists::create(
        &pool,
        CreatePlaylist {
            name: "Mix".to_string(),
            image_url: Some("https://img.example/p.jpg".to_string()),
        },
    )
    .await
    .unwrap();
    playlists::add_track(&pool, playlist.id, track).await.unwrap();

    let updated = playlists::update(
        &pool,
        playlist.id,
        UpdatePlaylist {
            name: Some("Evening Mix".to_string()),
            ..UpdatePlaylist::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.name, "Evening Mix");
    assert_eq!(updated.image_url.as_deref(), Some("https://img.example/p.jpg"));
    assert_eq!(updated.tracks.unwrap().len(), 1);
}

#[tokio::test]
async fn updating_missing_playlist_is_not_found() {
    let pool = test_pool().await;
    let result = playlists::update(
        &pool,
        aria_core::types::PlaylistId::new(42),
        UpdatePlaylist::default(),
    )
    .await;

    assert!(matches!(result, Err(StorageError::NotFound { .. })));
}

#[tokio::test]
async fn adding_to_missing_playlist_is_not_found() {
    let pool = test_pool().await;
    let track = seed_track(&pool, "A", 60).await;

    let result =
        playlists::add_track(&pool, aria_core::types::PlaylistId::new(7), track).await;
    assert!(matches!(result, Err(StorageError::NotFound { .. })));
}

#[tokio::test]
async fn recently_played_is_newest_first_and_deduplicated() {
    let pool = test_pool().await;
    let a = seed_track(&pool, "A", 60).await;
    let b = seed_track(&pool, "B", 60).await;

    recently_played::record(&pool, a).await.unwrap();
    recently_played::record(&pool, b).await.unwrap();
    recently_played::record(&pool, a).await.unwrap();

    let recent = recently_played::get_recent(&pool, 10).await.unwrap();
    let ids: Vec<_> = recent.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![a, b]);
}

#[tokio::test]
async fn deleting_artist_cascades_to_tracks() {
    let pool = test_pool().await;
    let id = seed_track(&pool, "Doomed", 60).await;
    let track = tracks::get_by_id(&pool, id).await.unwrap().unwrap();

    artists::delete(&pool, track.artist_id).await.unwrap();
    assert!(tracks::get_by_id(&pool, id).await.unwrap().is_none());
}

#[tokio::test]
async fn catalog_trait_resolves_tracks() {
    let pool = test_pool().await;
    let id = seed_track(&pool, "Nightfall", 214).await;
    let track = tracks::get_by_id(&pool, id).await.unwrap().unwrap();

    let catalog = SqliteCatalog::new(pool);
    let found = catalog.track(id).await.unwrap().unwrap();
    assert_eq!(found.title, "Nightfall");

    let album_tracks = catalog.album_tracks(track.album_id).await.unwrap();
    assert_eq!(album_tracks.len(), 1);
}

#[tokio::test]
async fn search_matches_artist_and_album_names() {
    let pool = test_pool().await;
    seed_track(&pool, "Nightfall", 214).await;
    seed_track(&pool, "Afterglow", 180).await;

    let by_title = tracks::search(&pool, "night").await.unwrap();
    assert_eq!(by_title.len(), 1);

    let by_artist = tracks::search(&pool, "Afterglow Artist").await.unwrap();
    assert_eq!(by_artist.len(), 1);
    assert_eq!(by_artist[0].title, "Afterglow");
}
