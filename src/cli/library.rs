use tabled::{Table, Tabled};

use crate::{error, info, management::TrackStore, utils};

#[derive(Tabled)]
struct RecentTrackRow {
    #[tabled(rename = "Track")]
    name: String,
    #[tabled(rename = "Artist")]
    artist: String,
    #[tabled(rename = "Popularity")]
    popularity: u32,
    #[tabled(rename = "Requested")]
    requested: String,
}

/// Lists the local track library, by popularity or by request time.
pub async fn library(recent: bool, limit: usize) {
    let store = TrackStore::new();

    if recent {
        let tracks = match store.recent(limit).await {
            Ok(t) => t,
            Err(e) => error!("Failed to load the track library: {}", e),
        };
        if tracks.is_empty() {
            info!("Your library is empty. Run `moodlist tracks <playlist>` first.");
            return;
        }

        let rows: Vec<RecentTrackRow> = tracks
            .into_iter()
            .map(|(track, requested_at)| RecentTrackRow {
                name: utils::truncate(&track.name, 40),
                artist: utils::truncate(&track.artist, 30),
                popularity: track.popularity,
                requested: utils::format_timestamp(requested_at, "%Y-%m-%d %H:%M"),
            })
            .collect();
        println!("{}", Table::new(rows));
        return;
    }

    match store.by_popularity(limit).await {
        Ok(tracks) if tracks.is_empty() => {
            info!("Your library is empty. Run `moodlist tracks <playlist>` first.")
        }
        Ok(tracks) => super::tracks::print_tracks(&tracks),
        Err(e) => error!("Failed to load the track library: {}", e),
    }
}
