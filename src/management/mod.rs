//! Local persistence: the cached Spotify token, the library of fetched tracks
//! and the generated custom playlists.
//!
//! Every store is a JSON document below the application data directory.
//! Writes go to a temporary sibling file that is renamed over the target, so
//! a document is either fully replaced or left untouched.

mod auth;
mod playlists;
mod tracks;

pub use auth::TokenManager;
pub use playlists::{CustomPlaylistManager, playlist_stats};
pub use tracks::{TrackLibrary, TrackStore};

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::Error;

async fn read_json_or_default<T>(path: &Path) -> Result<T, Error>
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        return Ok(T::default());
    }

    let content = async_fs::read_to_string(path).await?;
    if content.trim().is_empty() {
        return Ok(T::default());
    }
    Ok(serde_json::from_str(&content)?)
}

async fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    let json = serde_json::to_string_pretty(value)?;
    let tmp = path.with_extension("json.tmp");
    async_fs::write(&tmp, json).await?;
    if let Err(e) = async_fs::rename(&tmp, path).await {
        let _ = async_fs::remove_file(&tmp).await;
        return Err(e.into());
    }
    Ok(())
}
