//! Pattern-extraction tier, used when the repaired text still does not parse.
//!
//! Nothing here parses JSON structurally. Scalar fields are taken from their
//! first occurrence and track fragments are collected in text order.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{PlaylistDraft, TrackSelection};

pub const DEFAULT_PLAYLIST_NAME: &str = "Custom Playlist";
pub const DEFAULT_DESCRIPTION: &str = "A curated playlist for you";

/// A JSON string literal body, escapes included.
const STRING: &str = r#""((?:[^"\\]|\\.)*)""#;

static PLAYLIST_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r#""playlist_name"\s*:\s*{STRING}"#)).expect("valid regex")
});

static DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r#""description"\s*:\s*{STRING}"#)).expect("valid regex")
});

static TRACK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#""track_name"\s*:\s*{STRING}\s*,\s*"artist"\s*:\s*{STRING}\s*,\s*"album"\s*:\s*{STRING}"#
    ))
    .expect("valid regex")
});

/// Recovers a best-effort draft from text that is not valid JSON.
///
/// At most `max_tracks` track fragments are taken, numbered from 1 in the
/// order they appear. Missing or empty scalar fields get placeholder text.
/// Returns `None` when neither a scalar field nor a single track fragment
/// could be found.
pub fn extract_draft(text: &str, max_tracks: usize) -> Option<PlaylistDraft> {
    let name = first_scalar(&PLAYLIST_NAME_RE, text);
    let description = first_scalar(&DESCRIPTION_RE, text);

    let tracks: Vec<TrackSelection> = TRACK_RE
        .captures_iter(text)
        .take(max_tracks)
        .enumerate()
        .map(|(i, caps)| TrackSelection {
            track_name: unescape(&caps[1]),
            artist: unescape(&caps[2]),
            album: unescape(&caps[3]),
            position: i as u32 + 1,
            track_id: None,
        })
        .collect();

    if name.is_none() && description.is_none() && tracks.is_empty() {
        return None;
    }

    Some(PlaylistDraft {
        name: non_empty_or(name, DEFAULT_PLAYLIST_NAME),
        description: non_empty_or(description, DEFAULT_DESCRIPTION),
        tracks,
    })
}

fn first_scalar(re: &Regex, text: &str) -> Option<String> {
    re.captures(text).map(|caps| unescape(&caps[1]))
}

fn non_empty_or(value: Option<String>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => placeholder.to_string(),
    }
}

/// Decodes JSON escapes in a captured literal body; keeps the raw text when
/// the escapes themselves are broken.
fn unescape(raw: &str) -> String {
    serde_json::from_str::<String>(&format!("\"{}\"", raw)).unwrap_or_else(|_| raw.to_string())
}
