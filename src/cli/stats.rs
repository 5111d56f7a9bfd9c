use tabled::Table;

use crate::{
    error, info,
    management::{CustomPlaylistManager, TrackStore, playlist_stats},
    types::{PlaylistStats, StatsTableRow},
    utils,
};

/// Popularity and genre summary of the most recent generated playlists.
pub async fn stats(limit: usize) {
    let playlists = match CustomPlaylistManager::new().list().await {
        Ok(p) => p,
        Err(e) => error!("Failed to load generated playlists: {}", e),
    };
    if playlists.is_empty() {
        info!("No playlists generated yet.");
        return;
    }

    let library = match TrackStore::new().load().await {
        Ok(l) => l,
        Err(e) => error!("Failed to load the track library: {}", e),
    };

    let stats: Vec<PlaylistStats> = playlists
        .iter()
        .take(limit)
        .map(|p| playlist_stats(p, &library))
        .collect();

    let rows: Vec<StatsTableRow> = stats
        .iter()
        .map(|s| StatsTableRow {
            name: utils::truncate(&s.playlist_name, 40),
            tracks: s.total_tracks,
            popularity: format!("{}-{}", s.min_popularity, s.max_popularity),
            avg_popularity: format!("{:.1}", s.avg_popularity),
            genres: utils::join_genres(&s.genres, 4),
            created: utils::format_timestamp(s.created_at, "%Y-%m-%d"),
        })
        .collect();

    println!("{}", Table::new(rows));

    let total_tracks: usize = playlists.iter().map(|p| p.tracks.len()).sum();
    info!(
        "{} playlists generated, {} tracks in total, {} tracks in your library",
        playlists.len(),
        total_tracks,
        library.tracks.len()
    );
}
