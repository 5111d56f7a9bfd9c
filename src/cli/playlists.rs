use tabled::Table;

use crate::{
    error, info, spotify,
    types::{PlaylistTableRow, Playlist},
    utils,
};

pub async fn list_playlists() {
    let catalog = super::connect_spotify().await;

    let pb = utils::spinner("Fetching your playlists...");
    let playlists = match spotify::playlists::get_user_playlists(catalog.token()).await {
        Ok(p) => p,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch playlists: {}", e);
        }
    };
    pb.finish_and_clear();

    if playlists.is_empty() {
        info!("No playlists found on your account.");
        return;
    }

    let rows: Vec<PlaylistTableRow> = playlists
        .into_iter()
        .enumerate()
        .map(|(i, p)| to_row(i + 1, p))
        .collect();

    println!("{}", Table::new(rows));
    info!("Use the playlist id with `moodlist tracks <id>` or `moodlist generate --playlist <id>`.");
}

fn to_row(index: usize, playlist: Playlist) -> PlaylistTableRow {
    PlaylistTableRow {
        index,
        name: utils::truncate(&playlist.name, 40),
        tracks: playlist.tracks.map(|t| t.total).unwrap_or(0),
        owner: playlist
            .owner
            .display_name
            .unwrap_or(playlist.owner.id),
        id: playlist.id,
    }
}
