use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    config,
    error::Error,
    management::TokenManager,
    store::TrackSource,
    types::{PlaylistTracksResponse, SeveralArtistsResponse, Track, TrackRecord},
    warning,
};

/// Spotify's page size for playlist items.
const MAX_PAGE_SIZE: usize = 100;
/// `GET /artists` accepts at most 50 ids.
const ARTIST_BATCH_SIZE: usize = 50;

/// Reads catalogs from Spotify playlists.
pub struct SpotifyCatalog {
    client: Client,
    token: String,
}

impl SpotifyCatalog {
    pub fn new(token: String) -> Self {
        Self {
            client: Client::new(),
            token,
        }
    }

    /// Loads the Spotify token and returns a catalog using it.
    pub async fn connect() -> Result<Self, Error> {
        let mut token_mgr = TokenManager::load().await?;
        Ok(Self::new(token_mgr.get_valid_token().await))
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Genres of each artist id; artists Spotify does not know are left out.
    async fn artist_genres(&self, artist_ids: &[String]) -> Result<HashMap<String, Vec<String>>, Error> {
        let mut genres = HashMap::new();

        for chunk in artist_ids.chunks(ARTIST_BATCH_SIZE) {
            let url = format!(
                "{uri}/artists?ids={ids}",
                uri = config::spotify_apiurl(),
                ids = chunk.join(",")
            );
            let res: SeveralArtistsResponse = super::get_json(&self.client, &self.token, &url).await?;
            for artist in res.artists.into_iter().flatten() {
                genres.insert(artist.id, artist.genres);
            }
        }

        Ok(genres)
    }
}

#[async_trait]
impl TrackSource for SpotifyCatalog {
    async fn fetch_tracks(&self, playlist_id: &str, limit: usize) -> Result<Vec<TrackRecord>, Error> {
        let url = format!(
            "{uri}/playlists/{id}/tracks?limit={limit}",
            uri = config::spotify_apiurl(),
            id = playlist_id,
            limit = limit.clamp(1, MAX_PAGE_SIZE)
        );
        let res: PlaylistTracksResponse = super::get_json(&self.client, &self.token, &url).await?;

        // local files and removed tracks come back without a track or an id
        let tracks: Vec<Track> = res
            .items
            .into_iter()
            .filter_map(|item| item.track)
            .filter(|t| t.id.as_deref().is_some_and(|id| !id.is_empty()))
            .take(limit)
            .collect();

        let mut artist_ids: Vec<String> = tracks
            .iter()
            .filter_map(|t| t.artists.first().and_then(|a| a.id.clone()))
            .collect();
        artist_ids.sort();
        artist_ids.dedup();

        let genres = match self.artist_genres(&artist_ids).await {
            Ok(genres) => genres,
            Err(e) => {
                warning!("Could not fetch artist genres: {}", e);
                HashMap::new()
            }
        };

        Ok(tracks
            .into_iter()
            .map(|track| to_record(track, &genres))
            .collect())
    }
}

fn to_record(track: Track, genres: &HashMap<String, Vec<String>>) -> TrackRecord {
    let first_artist = track.artists.first();
    let track_genres = first_artist
        .and_then(|a| a.id.as_ref())
        .and_then(|id| genres.get(id))
        .cloned()
        .unwrap_or_default();

    TrackRecord {
        id: track.id.unwrap_or_default(),
        artist: first_artist
            .map(|a| a.name.clone())
            .unwrap_or_else(|| "Unknown Artist".to_string()),
        album: track
            .album
            .as_ref()
            .map(|a| a.name.clone())
            .unwrap_or_else(|| "Unknown Album".to_string()),
        release_date: track.album.and_then(|a| a.release_date),
        name: track.name,
        genres: track_genres,
        popularity: track.popularity,
    }
}
