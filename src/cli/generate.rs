use tabled::Table;

use crate::{
    Res,
    curator::{
        AssembledPlaylist, FallbackReason, GenerationConfig, PlaylistAssembler, PlaylistRequest,
        PlaylistSource,
    },
    error,
    gemini::GeminiClient,
    info,
    management::{CustomPlaylistManager, TrackStore},
    spotify,
    store::{PlaylistStore, TrackSource},
    success,
    types::{SelectionTableRow, TrackRecord, TrackSelection},
    utils, warning,
};

/// Where the catalog of a generated playlist comes from.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    /// Tracks of a Spotify playlist, fetched now.
    Playlist(String),
    /// The most popular tracks of the local library.
    Library,
}

#[derive(Debug, Clone)]
pub struct GenerateArgs {
    pub source: CatalogSource,
    pub mood: String,
    pub name: Option<String>,
    /// Number of catalog tracks to offer the model.
    pub catalog_size: usize,
    /// Number of tracks in the generated playlist.
    pub size: usize,
    pub publish: bool,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

pub async fn generate(args: GenerateArgs) {
    if args.size == 0 {
        error!("A playlist needs at least one track.");
    }

    let catalog = match load_catalog(&args).await {
        Ok(c) => c,
        Err(e) => error!("Failed to load tracks: {}", e),
    };
    if catalog.is_empty() {
        error!("No tracks available to build a playlist from.");
    }

    let name = args
        .name
        .clone()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| utils::default_playlist_name(&args.mood));
    let request = PlaylistRequest::new(&catalog, &args.mood, &name, args.size);

    let mut config = GenerationConfig::default();
    if let Some(t) = args.temperature {
        config.temperature = t;
    }
    if let Some(m) = args.max_output_tokens {
        config.max_output_tokens = m;
    }

    let assembled = match GeminiClient::from_env() {
        Ok(client) => {
            let timeout = client.timeout();
            let assembler = PlaylistAssembler::new(client)
                .with_config(config)
                .with_timeout(timeout);

            let pb = utils::spinner(&format!(
                "Curating {} tracks for \"{}\"...",
                request.max_tracks, args.mood
            ));
            let assembled = assembler.assemble(&request).await;
            pb.finish_and_clear();
            assembled
        }
        Err(e) => AssembledPlaylist::fallback(&request, FallbackReason::Unavailable(e.to_string())),
    };

    match &assembled.source {
        PlaylistSource::Curated => success!(
            "Curated \"{}\" with {} tracks",
            assembled.playlist.name,
            assembled.playlist.tracks.len()
        ),
        PlaylistSource::Fallback(reason) => warning!(
            "{}. Using the first {} tracks of the catalog instead.",
            reason.to_error(),
            assembled.playlist.tracks.len()
        ),
    }

    let dangling = assembled.playlist.dangling_count();
    if dangling > 0 {
        warning!("{} tracks could not be linked to your catalog", dangling);
    }

    match CustomPlaylistManager::new()
        .store(&assembled.playlist, &args.mood)
        .await
    {
        Ok(id) => success!("Saved as playlist #{}", id),
        Err(e) => warning!("Failed to save the playlist: {}", e),
    }

    info!("{}", assembled.playlist.description);
    print_selections(&assembled.playlist.tracks);

    if args.publish {
        publish(&assembled).await;
    }
}

async fn load_catalog(args: &GenerateArgs) -> Res<Vec<TrackRecord>> {
    match &args.source {
        CatalogSource::Library => Ok(TrackStore::new().by_popularity(args.catalog_size).await?),
        CatalogSource::Playlist(playlist_id) => {
            let catalog = super::connect_spotify().await;
            let limit = args.catalog_size.clamp(1, super::tracks::MAX_TRACKS);

            let pb = utils::spinner(&format!("Fetching up to {} tracks...", limit));
            let tracks = catalog.fetch_tracks(playlist_id, limit).await;
            pb.finish_and_clear();
            let tracks = tracks?;

            if let Err(e) = TrackStore::new().upsert(&tracks).await {
                warning!("Failed to store tracks: {}", e);
            }
            Ok(tracks)
        }
    }
}

async fn publish(assembled: &AssembledPlaylist) {
    let catalog = super::connect_spotify().await;

    let pb = utils::spinner("Publishing playlist to Spotify...");
    let result = spotify::playlists::publish(catalog.token(), &assembled.playlist).await;
    pb.finish_and_clear();

    match result {
        Ok(created) => {
            success!("Published \"{}\" to Spotify", created.name);
            if let Some(url) = created.external_urls.spotify {
                info!("{}", url);
            }
        }
        Err(e) => error!("Failed to publish playlist: {}", e),
    }
}

pub(crate) fn print_selections(tracks: &[TrackSelection]) {
    let rows: Vec<SelectionTableRow> = tracks
        .iter()
        .map(|t| SelectionTableRow {
            position: t.position,
            track_name: utils::truncate(&t.track_name, 40),
            artist: utils::truncate(&t.artist, 30),
            album: utils::truncate(&t.album, 30),
            linked: if t.track_id.is_some() { "yes" } else { "no" }.to_string(),
        })
        .collect();
    println!("{}", Table::new(rows));
}
