use std::collections::HashMap;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::{
    curator::{
        extract::{self, DEFAULT_DESCRIPTION, DEFAULT_PLAYLIST_NAME},
        repair,
    },
    types::{FinalPlaylist, PlaylistDraft, TrackRecord, TrackSelection},
};

const REQUIRED_KEYS: [&str; 3] = ["playlist_name", "description", "tracks"];
const UNKNOWN_ARTIST: &str = "Unknown Artist";
const UNKNOWN_ALBUM: &str = "Unknown Album";

/// Why completion text could not be turned into a playlist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("no JSON object found in completion")]
    NoJsonObject,

    #[error("completion could not be parsed or repaired")]
    Unrecoverable,

    #[error("completion does not match the playlist schema: {0}")]
    SchemaViolation(String),

    #[error("completion selected no tracks")]
    NoTracks,
}

/// Reconciles raw completion text against the catalog it was generated from.
///
/// Runs wrapper stripping, balance and syntax repair, strict parsing with
/// schema validation and, if parsing fails, pattern extraction. Selections are
/// then ordered by their position, cut to `max_tracks`, renumbered `1..=N` and
/// linked to catalog ids. A draft that ends up without tracks is rejected.
pub fn reconcile(
    text: &str,
    catalog: &[TrackRecord],
    max_tracks: usize,
) -> Result<FinalPlaylist, Rejection> {
    let span = repair::strip_wrapper(text).ok_or(Rejection::NoJsonObject)?;
    let repaired = repair::repair(span);

    let draft = match serde_json::from_str::<Value>(&repaired) {
        Ok(value) => validate_schema(value)?,
        Err(_) => extract::extract_draft(&repaired, max_tracks).ok_or(Rejection::Unrecoverable)?,
    };

    finalize(draft, catalog, max_tracks)
}

/// Strict tier: checks a parsed document against the playlist schema.
///
/// The document must be an object carrying `playlist_name`, `description` and
/// `tracks`, and `tracks` must be an array. Track entries that are not objects
/// or lack a `track_name` are skipped; a missing artist or album is filled in
/// with a placeholder.
pub fn validate_schema(value: Value) -> Result<PlaylistDraft, Rejection> {
    let Value::Object(mut doc) = value else {
        return Err(Rejection::SchemaViolation(
            "top level is not an object".to_string(),
        ));
    };

    if let Some(missing) = REQUIRED_KEYS.iter().find(|key| !doc.contains_key(**key)) {
        return Err(Rejection::SchemaViolation(format!("missing key `{}`", missing)));
    }

    let items = match doc.remove("tracks") {
        Some(Value::Array(items)) => items,
        _ => {
            return Err(Rejection::SchemaViolation(
                "`tracks` is not an array".to_string(),
            ));
        }
    };

    Ok(PlaylistDraft {
        name: text_or(&doc, "playlist_name", DEFAULT_PLAYLIST_NAME),
        description: text_or(&doc, "description", DEFAULT_DESCRIPTION),
        tracks: items.iter().filter_map(selection_from_value).collect(),
    })
}

/// Links every selection to the first catalog track with the same name and
/// artist, compared case-insensitively. Album is not part of the key.
pub fn match_identities(selections: &mut [TrackSelection], catalog: &[TrackRecord]) {
    let mut index: HashMap<(String, String), &str> = HashMap::new();
    for record in catalog.iter().filter(|r| !r.id.is_empty()) {
        index
            .entry(identity_key(&record.name, &record.artist))
            .or_insert(record.id.as_str());
    }

    for selection in selections.iter_mut() {
        selection.track_id = index
            .get(&identity_key(&selection.track_name, &selection.artist))
            .map(|id| id.to_string());
    }
}

fn finalize(
    draft: PlaylistDraft,
    catalog: &[TrackRecord],
    max_tracks: usize,
) -> Result<FinalPlaylist, Rejection> {
    let mut tracks = draft.tracks;

    // unnumbered selections keep their relative order after the numbered ones
    tracks.sort_by_key(|t| if t.position == 0 { u32::MAX } else { t.position });
    tracks.truncate(max_tracks);
    for (i, track) in tracks.iter_mut().enumerate() {
        track.position = i as u32 + 1;
    }

    if tracks.is_empty() {
        return Err(Rejection::NoTracks);
    }

    match_identities(&mut tracks, catalog);

    Ok(FinalPlaylist {
        name: draft.name,
        description: draft.description,
        tracks,
    })
}

fn selection_from_value(value: &Value) -> Option<TrackSelection> {
    let obj = value.as_object()?;
    let track_name = obj.get("track_name")?.as_str()?.trim();
    if track_name.is_empty() {
        return None;
    }

    Some(TrackSelection {
        track_name: track_name.to_string(),
        artist: text_or(obj, "artist", UNKNOWN_ARTIST),
        album: text_or(obj, "album", UNKNOWN_ALBUM),
        position: position_of(obj.get("position")),
        track_id: None,
    })
}

/// Position as given by the model, `0` when absent or unusable.
fn position_of(value: Option<&Value>) -> u32 {
    match value {
        Some(Value::Number(n)) => n.as_u64().and_then(|p| u32::try_from(p).ok()).unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

fn text_or(obj: &Map<String, Value>, key: &str, placeholder: &str) -> String {
    match obj.get(key).and_then(Value::as_str) {
        Some(s) if !s.trim().is_empty() => s.to_string(),
        _ => placeholder.to_string(),
    }
}

fn identity_key(name: &str, artist: &str) -> (String, String) {
    (name.trim().to_lowercase(), artist.trim().to_lowercase())
}
