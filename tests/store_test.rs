use moodlist::{
    management::{CustomPlaylistManager, TrackStore, playlist_stats},
    store::PlaylistStore,
    types::{FinalPlaylist, TrackRecord, TrackSelection},
};
use tempfile::TempDir;

fn record(id: &str, name: &str, popularity: u32, genres: &[&str], date: Option<&str>) -> TrackRecord {
    TrackRecord {
        id: id.to_string(),
        name: name.to_string(),
        artist: "Artist".to_string(),
        album: "Album".to_string(),
        genres: genres.iter().map(|g| g.to_string()).collect(),
        popularity,
        release_date: date.map(str::to_string),
    }
}

fn selection(name: &str, position: u32, id: Option<&str>) -> TrackSelection {
    TrackSelection {
        track_name: name.to_string(),
        artist: "Artist".to_string(),
        album: "Album".to_string(),
        position,
        track_id: id.map(str::to_string),
    }
}

fn playlist(name: &str, tracks: Vec<TrackSelection>) -> FinalPlaylist {
    FinalPlaylist {
        name: name.to_string(),
        description: format!("{} description", name),
        tracks,
    }
}

#[tokio::test]
async fn test_empty_stores() {
    let dir = TempDir::new().unwrap();

    let library = TrackStore::with_root(dir.path()).load().await.unwrap();
    assert!(library.tracks.is_empty());
    assert!(library.history.is_empty());

    let playlists = CustomPlaylistManager::with_root(dir.path()).list().await.unwrap();
    assert!(playlists.is_empty());
}

#[tokio::test]
async fn test_upsert_normalizes_and_replaces() {
    let dir = TempDir::new().unwrap();
    let store = TrackStore::with_root(dir.path());

    let written = store
        .upsert(&[
            record("a", "Alpha", 40, &["rock"], Some("2019")),
            record("b", "Beta", 80, &[], Some("2020-06")),
            record("", "No Id", 99, &[], None),
        ])
        .await
        .unwrap();
    assert_eq!(written, 2);

    store
        .upsert(&[record("a", "Alpha", 45, &["indie rock"], Some("2019-03-02"))])
        .await
        .unwrap();

    let library = store.load().await.unwrap();
    assert_eq!(library.tracks.len(), 2);
    assert_eq!(library.history.len(), 3);

    let alpha = library.get("a").unwrap();
    assert_eq!(alpha.popularity, 45);
    assert_eq!(alpha.genres, vec!["indie rock".to_string()]);
    assert_eq!(alpha.release_date.as_deref(), Some("2019-03-02"));
    assert_eq!(library.get("b").unwrap().release_date.as_deref(), Some("2020-06-01"));
}

#[tokio::test]
async fn test_by_popularity_and_recent() {
    let dir = TempDir::new().unwrap();
    let store = TrackStore::with_root(dir.path());

    store
        .upsert(&[record("a", "Alpha", 40, &[], None), record("b", "Beta", 80, &[], None)])
        .await
        .unwrap();
    store.upsert(&[record("c", "Gamma", 60, &[], None)]).await.unwrap();
    store.upsert(&[record("a", "Alpha", 40, &[], None)]).await.unwrap();

    let popular: Vec<_> = store
        .by_popularity(2)
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(popular, vec!["b", "c"]);

    let recent: Vec<_> = store
        .recent(10)
        .await
        .unwrap()
        .into_iter()
        .map(|(t, _)| t.id)
        .collect();
    assert_eq!(recent, vec!["a", "c", "b"]);
}

#[tokio::test]
async fn test_store_assigns_ids_and_keeps_tracks() {
    let dir = TempDir::new().unwrap();
    let manager = CustomPlaylistManager::with_root(dir.path());

    let first = manager
        .store(&playlist("First", vec![selection("One", 1, Some("a"))]), "calm")
        .await
        .unwrap();
    let second = manager
        .store(
            &playlist(
                "Second",
                vec![selection("Two", 2, None), selection("One", 1, Some("a"))],
            ),
            "upbeat",
        )
        .await
        .unwrap();
    assert_eq!((first, second), (1, 2));

    let listed = manager.list().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, 2);

    let stored = manager.get(2).await.unwrap().unwrap();
    assert_eq!(stored.playlist_name, "Second");
    assert_eq!(stored.mood_description, "upbeat");
    assert!(stored.created_at > 0);
    let positions: Vec<_> = stored.tracks.iter().map(|t| t.position).collect();
    assert_eq!(positions, vec![1, 2]);
    assert_eq!(stored.tracks[1].track_id, None);

    assert!(manager.get(42).await.unwrap().is_none());
}

#[tokio::test]
async fn test_store_survives_reopen() {
    let dir = TempDir::new().unwrap();
    CustomPlaylistManager::with_root(dir.path())
        .store(&playlist("Kept", vec![selection("One", 1, Some("a"))]), "calm")
        .await
        .unwrap();

    let reopened = CustomPlaylistManager::with_root(dir.path());
    let id = reopened
        .store(&playlist("Next", vec![selection("Two", 1, Some("b"))]), "calm")
        .await
        .unwrap();
    assert_eq!(id, 2);
    assert!(!dir.path().join("custom-playlists.json.tmp").exists());
}

#[tokio::test]
async fn test_playlist_stats() {
    let dir = TempDir::new().unwrap();
    let tracks = TrackStore::with_root(dir.path());
    tracks
        .upsert(&[
            record("a", "Alpha", 20, &["rock", "indie"], None),
            record("b", "Beta", 70, &["indie"], None),
        ])
        .await
        .unwrap();

    let manager = CustomPlaylistManager::with_root(dir.path());
    let id = manager
        .store(
            &playlist(
                "Mixed",
                vec![
                    selection("Alpha", 1, Some("a")),
                    selection("Beta", 2, Some("b")),
                    selection("Ghost", 3, None),
                ],
            ),
            "calm",
        )
        .await
        .unwrap();

    let stored = manager.get(id).await.unwrap().unwrap();
    let stats = playlist_stats(&stored, &tracks.load().await.unwrap());

    assert_eq!(stats.total_tracks, 3);
    assert_eq!(stats.min_popularity, 20);
    assert_eq!(stats.max_popularity, 70);
    assert_eq!(stats.avg_popularity, 45.0);
    assert_eq!(stats.genres, vec!["indie".to_string(), "rock".to_string()]);
}
