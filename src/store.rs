//! Interfaces of the collaborators the curation flow is wired to.
//!
//! The CLI injects the Spotify catalog and the JSON-backed stores from
//! [`crate::spotify`] and [`crate::management`]; tests inject in-memory ones.

use async_trait::async_trait;

use crate::{
    error::Error,
    types::{FinalPlaylist, TrackRecord},
};

/// Supplies the catalog a playlist is generated from.
#[async_trait]
pub trait TrackSource: Send + Sync {
    /// Returns up to `limit` tracks of the given playlist in playlist order.
    async fn fetch_tracks(&self, playlist_id: &str, limit: usize) -> Result<Vec<TrackRecord>, Error>;
}

/// Persists generated playlists.
#[async_trait]
pub trait PlaylistStore: Send + Sync {
    /// Stores the playlist header and all of its tracks, or nothing at all.
    /// Returns the id assigned to the stored playlist.
    async fn store(&self, playlist: &FinalPlaylist, mood_description: &str) -> Result<u64, Error>;
}
