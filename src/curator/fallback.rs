use crate::{
    types::{FinalPlaylist, TrackRecord, TrackSelection},
    utils,
};

/// Builds a playlist without any model: the first `max_tracks` catalog tracks
/// in catalog order, ids copied straight from the catalog.
///
/// An empty `playlist_name` becomes `"<Mood In Title Case> Mix"`. The
/// description always contains the mood verbatim.
pub fn fallback_playlist(
    catalog: &[TrackRecord],
    mood_description: &str,
    playlist_name: &str,
    max_tracks: usize,
) -> FinalPlaylist {
    let name = if playlist_name.trim().is_empty() {
        utils::default_playlist_name(mood_description)
    } else {
        playlist_name.to_string()
    };

    let tracks = catalog
        .iter()
        .take(max_tracks)
        .enumerate()
        .map(|(i, track)| TrackSelection {
            track_name: track.name.clone(),
            artist: track.artist.clone(),
            album: track.album.clone(),
            position: i as u32 + 1,
            track_id: Some(track.id.clone()),
        })
        .collect();

    FinalPlaylist {
        name,
        description: format!("A {} playlist curated for you", mood_description),
        tracks,
    }
}
