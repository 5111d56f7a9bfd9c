use std::{collections::BTreeSet, path::PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    config,
    error::Error,
    management::TrackLibrary,
    store::PlaylistStore,
    types::{FinalPlaylist, PlaylistStats, StoredPlaylist},
    utils,
};

/// JSON-backed store of generated playlists at
/// `<data dir>/custom-playlists.json`.
///
/// A playlist is written together with all of its tracks in a single atomic
/// file replacement, so a failed write never leaves a header without tracks.
pub struct CustomPlaylistManager {
    root: PathBuf,
    lock: Mutex<()>,
}

impl CustomPlaylistManager {
    pub fn new() -> Self {
        Self::with_root(config::data_dir())
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<Vec<StoredPlaylist>, Error> {
        super::read_json_or_default(&self.path()).await
    }

    /// All stored playlists, newest first.
    pub async fn list(&self) -> Result<Vec<StoredPlaylist>, Error> {
        let mut playlists = self.load().await?;
        playlists.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(playlists)
    }

    /// A stored playlist with its tracks in playlist order.
    pub async fn get(&self, id: u64) -> Result<Option<StoredPlaylist>, Error> {
        let playlist = self.load().await?.into_iter().find(|p| p.id == id);
        Ok(playlist.map(|mut p| {
            p.tracks.sort_by_key(|t| t.position);
            p
        }))
    }

    fn path(&self) -> PathBuf {
        self.root.join("custom-playlists.json")
    }
}

impl Default for CustomPlaylistManager {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlaylistStore for CustomPlaylistManager {
    async fn store(&self, playlist: &FinalPlaylist, mood_description: &str) -> Result<u64, Error> {
        let _guard = self.lock.lock().await;

        let mut playlists = self.load().await?;
        let id = playlists.iter().map(|p| p.id).max().unwrap_or(0) + 1;

        playlists.push(StoredPlaylist {
            id,
            playlist_name: playlist.name.clone(),
            description: playlist.description.clone(),
            mood_description: mood_description.to_string(),
            created_at: utils::now_timestamp(),
            tracks: playlist.tracks.clone(),
        });

        super::write_json_atomic(&self.path(), &playlists).await?;
        Ok(id)
    }
}

/// Summarizes a stored playlist against the track library.
///
/// Popularity and genres come from the library entries the playlist's
/// tracks are linked to; dangling or unknown tracks only count towards the
/// total.
pub fn playlist_stats(playlist: &StoredPlaylist, library: &TrackLibrary) -> PlaylistStats {
    let known: Vec<_> = playlist
        .tracks
        .iter()
        .filter_map(|t| t.track_id.as_deref())
        .filter_map(|id| library.get(id))
        .collect();

    let popularity: Vec<u32> = known.iter().map(|t| t.popularity).collect();
    let avg_popularity = if popularity.is_empty() {
        0.0
    } else {
        popularity.iter().map(|p| *p as f64).sum::<f64>() / popularity.len() as f64
    };

    let genres: BTreeSet<String> = known
        .iter()
        .flat_map(|t| t.genres.iter().cloned())
        .collect();

    PlaylistStats {
        playlist_id: playlist.id,
        playlist_name: playlist.playlist_name.clone(),
        total_tracks: playlist.tracks.len(),
        min_popularity: popularity.iter().copied().min().unwrap_or(0),
        max_popularity: popularity.iter().copied().max().unwrap_or(0),
        avg_popularity,
        genres: genres.into_iter().collect(),
        created_at: playlist.created_at,
    }
}
