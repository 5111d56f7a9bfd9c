use reqwest::Client;

use crate::{
    config,
    error::Error,
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest,
        CreatePlaylistResponse, CurrentUser, FinalPlaylist, Playlist, UserPlaylistsResponse,
    },
};

const PLAYLIST_PAGE_SIZE: usize = 50;
/// `POST /playlists/{id}/tracks` accepts at most 100 uris.
const TRACK_BATCH_SIZE: usize = 100;

/// Retrieves all playlists of the current user, following `next` links.
pub async fn get_user_playlists(token: &str) -> Result<Vec<Playlist>, Error> {
    let client = Client::new();
    let mut playlists = Vec::new();
    let mut next = Some(format!(
        "{uri}/me/playlists?limit={limit}",
        uri = config::spotify_apiurl(),
        limit = PLAYLIST_PAGE_SIZE
    ));

    while let Some(url) = next {
        let res: UserPlaylistsResponse = super::get_json(&client, token, &url).await?;
        playlists.extend(res.items);
        next = res.next;
    }

    Ok(playlists)
}

/// Creates a private playlist on the user's account and adds every linked
/// track of `playlist` to it, in playlist order.
///
/// Dangling selections cannot be published and are skipped.
pub async fn publish(token: &str, playlist: &FinalPlaylist) -> Result<CreatePlaylistResponse, Error> {
    let client = Client::new();
    let api_url = config::spotify_apiurl();

    let user: CurrentUser = super::get_json(&client, token, &format!("{}/me", api_url)).await?;

    let body = CreatePlaylistRequest {
        name: playlist.name.clone(),
        description: playlist.description.clone(),
        public: false,
        collaborative: false,
    };
    let created: CreatePlaylistResponse = super::post_json(
        &client,
        token,
        &format!("{uri}/users/{user_id}/playlists", uri = api_url, user_id = user.id),
        &body,
    )
    .await?;

    let mut tracks = playlist.tracks.clone();
    tracks.sort_by_key(|t| t.position);
    let uris: Vec<String> = tracks
        .iter()
        .filter_map(|t| t.track_id.as_deref())
        .filter(|id| !id.is_empty())
        .map(|id| format!("spotify:track:{}", id))
        .collect();

    let tracks_url = format!(
        "{uri}/playlists/{playlist_id}/tracks",
        uri = api_url,
        playlist_id = created.id
    );
    for chunk in uris.chunks(TRACK_BATCH_SIZE) {
        let body = AddTrackToPlaylistRequest {
            uris: chunk.to_vec(),
        };
        let _: AddTrackToPlaylistResponse = super::post_json(&client, token, &tracks_url, &body).await?;
    }

    Ok(created)
}
