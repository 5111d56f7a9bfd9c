use tabled::Table;

use crate::{
    error, info,
    management::TrackStore,
    store::TrackSource,
    success,
    types::{TrackRecord, TrackTableRow},
    utils, warning,
};

/// Spotify returns at most 100 playlist items per request.
pub const MAX_TRACKS: usize = 100;

/// Fetches tracks of a Spotify playlist into the local library and prints a
/// preview of them.
pub async fn fetch_tracks(playlist_id: String, limit: usize) {
    let catalog = super::connect_spotify().await;
    let limit = limit.clamp(1, MAX_TRACKS);

    let pb = utils::spinner(&format!("Fetching up to {} tracks...", limit));
    let tracks = match catalog.fetch_tracks(&playlist_id, limit).await {
        Ok(t) => t,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch tracks: {}", e);
        }
    };
    pb.finish_and_clear();

    if tracks.is_empty() {
        warning!("The playlist has no tracks that can be used.");
        return;
    }

    match TrackStore::new().upsert(&tracks).await {
        Ok(count) => success!("Stored {} tracks in your library", count),
        Err(e) => warning!("Failed to store tracks: {}", e),
    }

    print_tracks(&tracks);
}

pub(crate) fn print_tracks(tracks: &[TrackRecord]) {
    let rows: Vec<TrackTableRow> = tracks.iter().map(to_row).collect();
    println!("{}", Table::new(rows));
    info!("{} tracks", tracks.len());
}

fn to_row(track: &TrackRecord) -> TrackTableRow {
    TrackTableRow {
        name: utils::truncate(&track.name, 40),
        artist: utils::truncate(&track.artist, 30),
        album: utils::truncate(&track.album, 30),
        genres: utils::join_genres(&track.genres, 3),
        popularity: track.popularity,
    }
}
