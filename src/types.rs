use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// A track of the catalog a playlist is generated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub artist: String,
    pub album: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub release_date: Option<String>,
}

/// One entry of a generated playlist.
///
/// `track_id` is `None` for a dangling selection, i.e. a track the model named
/// that could not be linked to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSelection {
    pub track_name: String,
    pub artist: String,
    pub album: String,
    pub position: u32,
    #[serde(default)]
    pub track_id: Option<String>,
}

/// Playlist as recovered from completion text, before positions are
/// normalized and selections are linked to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistDraft {
    pub name: String,
    pub description: String,
    pub tracks: Vec<TrackSelection>,
}

/// Validated playlist; positions run `1..=tracks.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalPlaylist {
    pub name: String,
    pub description: String,
    pub tracks: Vec<TrackSelection>,
}

impl FinalPlaylist {
    pub fn track_ids(&self) -> Vec<String> {
        self.tracks
            .iter()
            .filter_map(|t| t.track_id.clone())
            .filter(|id| !id.is_empty())
            .collect()
    }

    pub fn dangling_count(&self) -> usize {
        self.tracks.iter().filter(|t| t.track_id.is_none()).count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredPlaylist {
    pub id: u64,
    pub playlist_name: String,
    pub description: String,
    pub mood_description: String,
    pub created_at: u64,
    pub tracks: Vec<TrackSelection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackRequest {
    pub track_id: String,
    pub requested_at: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistStats {
    pub playlist_id: u64,
    pub playlist_name: String,
    pub total_tracks: usize,
    pub min_popularity: u32,
    pub max_popularity: u32,
    pub avg_popularity: f64,
    pub genres: Vec<String>,
    pub created_at: u64,
}

// Spotify Web API payloads

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPlaylistsResponse {
    pub items: Vec<Playlist>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub tracks: Option<PlaylistTracksRef>,
    pub owner: PlaylistOwner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksRef {
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistOwner {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistTrackItem>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrackItem {
    pub track: Option<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<SimpleArtist>,
    pub album: Option<SimpleAlbum>,
    #[serde(default)]
    pub popularity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleArtist {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleAlbum {
    pub name: String,
    pub release_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveralArtistsResponse {
    pub artists: Vec<Option<Artist>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistResponse {
    pub snapshot_id: String,
}

// Table rows

#[derive(Tabled)]
pub struct PlaylistTableRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Playlist")]
    pub name: String,
    #[tabled(rename = "Tracks")]
    pub tracks: u64,
    #[tabled(rename = "Owner")]
    pub owner: String,
    #[tabled(rename = "Id")]
    pub id: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "Track")]
    pub name: String,
    #[tabled(rename = "Artist")]
    pub artist: String,
    #[tabled(rename = "Album")]
    pub album: String,
    #[tabled(rename = "Genres")]
    pub genres: String,
    #[tabled(rename = "Popularity")]
    pub popularity: u32,
}

#[derive(Tabled)]
pub struct SelectionTableRow {
    #[tabled(rename = "#")]
    pub position: u32,
    #[tabled(rename = "Track")]
    pub track_name: String,
    #[tabled(rename = "Artist")]
    pub artist: String,
    #[tabled(rename = "Album")]
    pub album: String,
    #[tabled(rename = "Linked")]
    pub linked: String,
}

#[derive(Tabled)]
pub struct StoredPlaylistTableRow {
    #[tabled(rename = "Id")]
    pub id: u64,
    #[tabled(rename = "Playlist")]
    pub name: String,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Mood")]
    pub mood: String,
    #[tabled(rename = "Created")]
    pub created: String,
}

#[derive(Tabled)]
pub struct StatsTableRow {
    #[tabled(rename = "Playlist")]
    pub name: String,
    #[tabled(rename = "Tracks")]
    pub tracks: usize,
    #[tabled(rename = "Popularity")]
    pub popularity: String,
    #[tabled(rename = "Avg")]
    pub avg_popularity: String,
    #[tabled(rename = "Genres")]
    pub genres: String,
    #[tabled(rename = "Created")]
    pub created: String,
}
