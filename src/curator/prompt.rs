use serde::Serialize;

use crate::types::TrackRecord;

/// Catalog entry as shown to the model. Ids are left out on purpose: identity
/// is re-derived from name and artist once the answer comes back.
#[derive(Serialize)]
struct PromptTrack<'a> {
    track_name: &'a str,
    artist: &'a str,
    album: &'a str,
    genres: &'a [String],
    popularity: u32,
    release_date: &'a str,
}

impl<'a> From<&'a TrackRecord> for PromptTrack<'a> {
    fn from(track: &'a TrackRecord) -> Self {
        Self {
            track_name: &track.name,
            artist: &track.artist,
            album: &track.album,
            genres: &track.genres,
            popularity: track.popularity,
            release_date: track.release_date.as_deref().unwrap_or("Unknown"),
        }
    }
}

/// Renders the completion request for a mood playlist.
///
/// The prompt states the mood, the target name and the exact number of tracks
/// `max_tracks`, embeds the catalog as JSON and prescribes the output schema
/// `{playlist_name, description, tracks: [{track_name, artist, album, position}]}`.
///
/// Never fails. An empty catalog still yields a prompt; the reconciler and the
/// fallback selector deal with the consequences.
pub fn build_prompt(
    catalog: &[TrackRecord],
    mood_description: &str,
    playlist_name: &str,
    max_tracks: usize,
) -> String {
    let tracks: Vec<PromptTrack> = catalog.iter().map(PromptTrack::from).collect();
    let tracks_json = serde_json::to_string_pretty(&tracks).unwrap_or_else(|_| "[]".to_string());

    format!(
        r#"TASK: Create a music playlist based on the user's mood description and the available tracks.

USER REQUEST:
- Mood/Theme: "{mood}"
- Playlist Name: "{name}"
- Number of Tracks: {count}

AVAILABLE TRACKS DATA:
{tracks}

INSTRUCTIONS:
1. Select exactly {count} tracks that best match the mood description
2. Consider genres, artist style, popularity and emotional tone, weighting what the user asked for most
3. Compare every candidate track with the requested mood before deciding on it
4. Create a logical listening order
5. Return ONLY valid JSON with this exact structure and NO EXTRA TEXT:

{{
  "playlist_name": "creative name based on the mood",
  "description": "catchy 1-2 sentence description",
  "tracks": [
    {{
      "track_name": "exact track name from the available list",
      "artist": "exact artist name from the available list",
      "album": "exact album name from the available list",
      "position": 1
    }}
  ]
}}

CRITICAL RULES:
- Use ONLY tracks from the available list above
- Reproduce track names, artist names and album names EXACTLY as provided
- Number positions from 1 in listening order
- Return exactly {count} tracks
- Return COMPLETE JSON only, with every bracket closed and double-quoted strings
- Do not wrap the JSON in markdown or add any explanation
"#,
        mood = mood_description,
        name = playlist_name,
        count = max_tracks,
        tracks = tracks_json,
    )
}
