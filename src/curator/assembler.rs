use std::time::Duration;

use async_trait::async_trait;

use crate::{
    curator::{fallback, prompt, reconcile},
    error::{CompletionError, Error},
    types::{FinalPlaylist, TrackRecord},
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Sampling parameters passed along with every completion request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    /// Creativity, 0.0 - 1.0.
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    /// Hard cap on the answer length; exceeding it truncates the output.
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.8,
            top_k: 40,
            max_output_tokens: 2048,
        }
    }
}

/// A generative model that answers a text prompt with free-form text.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, CompletionError>;
}

#[async_trait]
impl<T: CompletionService + ?Sized> CompletionService for Box<T> {
    async fn complete(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, CompletionError> {
        (**self).complete(prompt, config).await
    }
}

/// Inputs of one playlist generation.
#[derive(Debug, Clone, Copy)]
pub struct PlaylistRequest<'a> {
    pub catalog: &'a [TrackRecord],
    pub mood_description: &'a str,
    pub playlist_name: &'a str,
    pub max_tracks: usize,
}

impl<'a> PlaylistRequest<'a> {
    /// The track budget is capped at the catalog size.
    pub fn new(
        catalog: &'a [TrackRecord],
        mood_description: &'a str,
        playlist_name: &'a str,
        max_tracks: usize,
    ) -> Self {
        Self {
            catalog,
            mood_description,
            playlist_name,
            max_tracks: max_tracks.min(catalog.len()),
        }
    }
}

#[derive(Debug)]
pub enum FallbackReason {
    /// The completion service failed or could not be reached.
    Unavailable(String),
    /// The completion arrived but could not be reconciled.
    Rejected(reconcile::Rejection),
}

impl FallbackReason {
    /// The failure behind the fallback in terms of the shared error taxonomy.
    pub fn to_error(&self) -> Error {
        match self {
            FallbackReason::Unavailable(e) => Error::SourceUnavailable(e.clone()),
            FallbackReason::Rejected(r) => r.clone().into(),
        }
    }
}

#[derive(Debug)]
pub enum PlaylistSource {
    Curated,
    Fallback(FallbackReason),
}

#[derive(Debug)]
pub struct AssembledPlaylist {
    pub playlist: FinalPlaylist,
    pub source: PlaylistSource,
}

impl AssembledPlaylist {
    /// Builds the playlist with the fallback selector alone.
    pub fn fallback(request: &PlaylistRequest<'_>, reason: FallbackReason) -> Self {
        Self {
            playlist: fallback::fallback_playlist(
                request.catalog,
                request.mood_description,
                request.playlist_name,
                request.max_tracks,
            ),
            source: PlaylistSource::Fallback(reason),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, PlaylistSource::Fallback(_))
    }
}

/// Orchestrates prompt building, the completion call and reconciliation.
///
/// Always yields a playlist: a failed call (timeouts included) or an
/// unusable answer ends in the fallback selector. Persistence is left to the
/// caller.
pub struct PlaylistAssembler<C> {
    completion: C,
    config: GenerationConfig,
    timeout: Duration,
}

impl<C: CompletionService> PlaylistAssembler<C> {
    pub fn new(completion: C) -> Self {
        Self {
            completion,
            config: GenerationConfig::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub async fn assemble(&self, request: &PlaylistRequest<'_>) -> AssembledPlaylist {
        let prompt = prompt::build_prompt(
            request.catalog,
            request.mood_description,
            request.playlist_name,
            request.max_tracks,
        );

        let call = self.completion.complete(&prompt, &self.config);
        let text = match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                return AssembledPlaylist::fallback(
                    request,
                    FallbackReason::Unavailable(e.to_string()),
                );
            }
            Err(_) => {
                return AssembledPlaylist::fallback(
                    request,
                    FallbackReason::Unavailable(CompletionError::Timeout.to_string()),
                );
            }
        };

        match reconcile::reconcile(&text, request.catalog, request.max_tracks) {
            Ok(playlist) => AssembledPlaylist {
                playlist,
                source: PlaylistSource::Curated,
            },
            Err(rejection) => {
                AssembledPlaylist::fallback(request, FallbackReason::Rejected(rejection))
            }
        }
    }
}
