use tabled::Table;

use crate::{
    error, info,
    management::CustomPlaylistManager,
    types::{StoredPlaylist, StoredPlaylistTableRow},
    utils,
};

/// Lists generated playlists, or shows one of them with its tracks.
pub async fn history(id: Option<u64>) {
    let manager = CustomPlaylistManager::new();

    if let Some(id) = id {
        match manager.get(id).await {
            Ok(Some(playlist)) => print_playlist(&playlist),
            Ok(None) => error!("No generated playlist with id {}", id),
            Err(e) => error!("Failed to load generated playlists: {}", e),
        }
        return;
    }

    let playlists = match manager.list().await {
        Ok(p) => p,
        Err(e) => error!("Failed to load generated playlists: {}", e),
    };

    if playlists.is_empty() {
        info!("No playlists generated yet.");
        return;
    }

    let rows: Vec<StoredPlaylistTableRow> = playlists
        .iter()
        .map(|p| StoredPlaylistTableRow {
            id: p.id,
            name: utils::truncate(&p.playlist_name, 40),
            description: utils::truncate(&p.description, 50),
            mood: utils::truncate(&p.mood_description, 30),
            created: utils::format_timestamp(p.created_at, "%Y-%m-%d %H:%M"),
        })
        .collect();
    println!("{}", Table::new(rows));
}

fn print_playlist(playlist: &StoredPlaylist) {
    info!("{} ({})", playlist.playlist_name, playlist.mood_description);
    info!("{}", playlist.description);
    super::generate::print_selections(&playlist.tracks);
}
