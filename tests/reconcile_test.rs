use moodlist::curator::{
    Rejection, reconcile,
    extract::{DEFAULT_DESCRIPTION, DEFAULT_PLAYLIST_NAME, extract_draft},
    reconcile::{match_identities, validate_schema},
};
use moodlist::types::{TrackRecord, TrackSelection};

fn track(id: &str, name: &str, artist: &str, album: &str) -> TrackRecord {
    TrackRecord {
        id: id.to_string(),
        name: name.to_string(),
        artist: artist.to_string(),
        album: album.to_string(),
        genres: vec!["indie".to_string()],
        popularity: 50,
        release_date: Some("2020-01-01".to_string()),
    }
}

fn catalog() -> Vec<TrackRecord> {
    vec![
        track("id-1", "Night Drive", "Artist A", "Album A"),
        track("id-2", "Moonlight", "Artist B", "Album B"),
        track("id-3", "Sunrise", "Artist C", "Album C"),
        track("id-4", "Intro", "Artist A", "Album A"),
        track("id-5", "Intro", "Artist B", "Album B"),
    ]
}

const WELL_FORMED: &str = r#"{
  "playlist_name": "Late Night",
  "description": "For the drive home",
  "tracks": [
    {"track_name": "Night Drive", "artist": "Artist A", "album": "Album A", "position": 1},
    {"track_name": "Moonlight", "artist": "Artist B", "album": "Album B", "position": 2}
  ]
}"#;

#[test]
fn test_well_formed_completion() {
    let playlist = reconcile(WELL_FORMED, &catalog(), 10).unwrap();

    assert_eq!(playlist.name, "Late Night");
    assert_eq!(playlist.description, "For the drive home");
    assert_eq!(playlist.tracks.len(), 2);
    assert_eq!(playlist.tracks[0].track_id.as_deref(), Some("id-1"));
    assert_eq!(playlist.tracks[1].track_id.as_deref(), Some("id-2"));
    assert_eq!(playlist.tracks[1].position, 2);
}

#[test]
fn test_well_formed_completion_matches_direct_parse() {
    let direct = validate_schema(serde_json::from_str(WELL_FORMED).unwrap()).unwrap();
    let playlist = reconcile(WELL_FORMED, &catalog(), 10).unwrap();

    assert_eq!(playlist.name, direct.name);
    assert_eq!(playlist.description, direct.description);
    let names: Vec<_> = playlist.tracks.iter().map(|t| &t.track_name).collect();
    let direct_names: Vec<_> = direct.tracks.iter().map(|t| &t.track_name).collect();
    assert_eq!(names, direct_names);
}

#[test]
fn test_fenced_completion() {
    let text = format!("Sure! Here is your playlist:\n```json\n{}\n```", WELL_FORMED);
    let playlist = reconcile(&text, &catalog(), 10).unwrap();
    assert_eq!(playlist.tracks.len(), 2);
}

#[test]
fn test_completion_followed_by_closing_fence() {
    let text = format!("{}\n```", WELL_FORMED);
    let playlist = reconcile(&text, &catalog(), 5).unwrap();

    assert_eq!(playlist.name, "Late Night");
    assert_eq!(playlist.tracks[0].track_id.as_deref(), Some("id-1"));
}

#[test]
fn test_truncated_completion_is_balanced() {
    let text = r#"{"playlist_name": "Late Night", "description": "For the drive home", "tracks": [{"track_name": "Night Drive", "artist": "Artist A", "album": "Album A", "position": 1}"#;
    let playlist = reconcile(text, &catalog(), 10).unwrap();

    assert_eq!(playlist.tracks.len(), 1);
    assert_eq!(playlist.tracks[0].position, 1);
    assert_eq!(playlist.tracks[0].track_id.as_deref(), Some("id-1"));
}

#[test]
fn test_completion_cut_inside_second_entry() {
    let text = r#"{"playlist_name": "Late Night", "description": "x", "tracks": [{"track_name": "Night Drive", "artist": "Artist A", "album": "Album A", "position": 1}, {"track_name": "Moonl"#;
    let playlist = reconcile(text, &catalog(), 10).unwrap();

    assert_eq!(playlist.tracks.len(), 1);
    assert_eq!(playlist.tracks[0].track_name, "Night Drive");
}

#[test]
fn test_trailing_commas_are_repaired() {
    let text = r#"{"playlist_name": "X", "description": "Y", "tracks": [{"track_name": "Sunrise", "artist": "Artist C", "album": "Album C", "position": 1,},],}"#;
    let playlist = reconcile(text, &catalog(), 10).unwrap();
    assert_eq!(playlist.tracks[0].track_id.as_deref(), Some("id-3"));
}

#[test]
fn test_prose_is_rejected() {
    let result = reconcile("I'm sorry, I can't create that playlist.", &catalog(), 10);
    assert_eq!(result, Err(Rejection::NoJsonObject));
}

#[test]
fn test_matching_ignores_case_and_album() {
    let text = r#"{"playlist_name": "X", "description": "Y", "tracks": [{"track_name": "night drive", "artist": "ARTIST A", "album": "Some Compilation", "position": 1}]}"#;
    let playlist = reconcile(text, &catalog(), 10).unwrap();
    assert_eq!(playlist.tracks[0].track_id.as_deref(), Some("id-1"));
}

#[test]
fn test_duplicate_names_bind_by_artist() {
    let text = r#"{"playlist_name": "X", "description": "Y", "tracks": [{"track_name": "Intro", "artist": "Artist B", "album": "Album B", "position": 1}]}"#;
    let playlist = reconcile(text, &catalog(), 10).unwrap();
    assert_eq!(playlist.tracks[0].track_id.as_deref(), Some("id-5"));
}

#[test]
fn test_unknown_selection_is_kept_dangling() {
    let text = r#"{"playlist_name": "X", "description": "Y", "tracks": [
        {"track_name": "Night Drive", "artist": "Artist A", "album": "Album A", "position": 1},
        {"track_name": "Invented Song", "artist": "Nobody", "album": "Nothing", "position": 2}
    ]}"#;
    let playlist = reconcile(text, &catalog(), 10).unwrap();

    assert_eq!(playlist.tracks.len(), 2);
    assert_eq!(playlist.tracks[1].track_id, None);
    assert_eq!(playlist.dangling_count(), 1);
    assert_eq!(playlist.track_ids(), vec!["id-1".to_string()]);
}

#[test]
fn test_positions_are_sorted_truncated_and_renumbered() {
    let text = r#"{"playlist_name": "X", "description": "Y", "tracks": [
        {"track_name": "Sunrise", "artist": "Artist C", "album": "Album C", "position": 7},
        {"track_name": "Night Drive", "artist": "Artist A", "album": "Album A", "position": 3},
        {"track_name": "Moonlight", "artist": "Artist B", "album": "Album B"},
        {"track_name": "Intro", "artist": "Artist A", "album": "Album A", "position": "5"}
    ]}"#;
    let playlist = reconcile(text, &catalog(), 3).unwrap();

    let names: Vec<_> = playlist.tracks.iter().map(|t| t.track_name.as_str()).collect();
    assert_eq!(names, vec!["Night Drive", "Intro", "Sunrise"]);
    let positions: Vec<_> = playlist.tracks.iter().map(|t| t.position).collect();
    assert_eq!(positions, vec![1, 2, 3]);
}

#[test]
fn test_missing_key_is_schema_violation() {
    let text = r#"{"playlist_name": "X", "tracks": []}"#;
    assert!(matches!(
        reconcile(text, &catalog(), 10),
        Err(Rejection::SchemaViolation(_))
    ));
}

#[test]
fn test_tracks_not_an_array_is_schema_violation() {
    let text = r#"{"playlist_name": "X", "description": "Y", "tracks": "none"}"#;
    assert!(matches!(
        reconcile(text, &catalog(), 10),
        Err(Rejection::SchemaViolation(_))
    ));
}

#[test]
fn test_empty_track_list_is_rejected() {
    let text = r#"{"playlist_name": "X", "description": "Y", "tracks": []}"#;
    assert_eq!(reconcile(text, &catalog(), 10), Err(Rejection::NoTracks));
}

#[test]
fn test_entries_without_name_are_skipped() {
    let value = serde_json::json!({
        "playlist_name": "",
        "description": "Y",
        "tracks": [
            {"artist": "Artist A", "position": 1},
            "not an object",
            {"track_name": "Moonlight", "position": 2}
        ]
    });
    let draft = validate_schema(value).unwrap();

    assert_eq!(draft.name, DEFAULT_PLAYLIST_NAME);
    assert_eq!(draft.tracks.len(), 1);
    assert_eq!(draft.tracks[0].artist, "Unknown Artist");
    assert_eq!(draft.tracks[0].album, "Unknown Album");
}

#[test]
fn test_extraction_tier_recovers_broken_json() {
    // unquoted keys survive every textual repair
    let text = r#"{"playlist_name": "Late Night", "description": "Dim lights", "tracks": [
        {"track_name": "Night Drive", "artist": "Artist A", "album": "Album A", position: 1},
        {"track_name": "Moonlight", "artist": "Artist B", "album": "Album B", position: 2}
    ]}"#;
    let playlist = reconcile(text, &catalog(), 10).unwrap();

    assert_eq!(playlist.name, "Late Night");
    assert_eq!(playlist.description, "Dim lights");
    assert_eq!(playlist.tracks.len(), 2);
    assert_eq!(playlist.tracks[1].track_id.as_deref(), Some("id-2"));
}

#[test]
fn test_unrecoverable_text() {
    let result = reconcile("{ this is not json at all }", &catalog(), 10);
    assert_eq!(result, Err(Rejection::Unrecoverable));
}

#[test]
fn test_extract_draft_placeholders_and_limit() {
    let text = r#"{"tracks": [
        {"track_name": "A \"quoted\" song", "artist": "X", "album": "Y"},
        {"track_name": "B", "artist": "X", "album": "Y"},
        {"track_name": "C", "artist": "X", "album": "Y"}
    ] oops"#;
    let draft = extract_draft(text, 2).unwrap();

    assert_eq!(draft.name, DEFAULT_PLAYLIST_NAME);
    assert_eq!(draft.description, DEFAULT_DESCRIPTION);
    assert_eq!(draft.tracks.len(), 2);
    assert_eq!(draft.tracks[0].track_name, "A \"quoted\" song");
    assert_eq!(draft.tracks[1].position, 2);
}

#[test]
fn test_match_identities_skips_records_without_id() {
    let catalog = vec![
        track("", "Song", "Band", "LP"),
        track("id-9", "Song", "Band", "Deluxe LP"),
    ];
    let mut selections = vec![TrackSelection {
        track_name: "Song".to_string(),
        artist: "Band".to_string(),
        album: "LP".to_string(),
        position: 1,
        track_id: None,
    }];
    match_identities(&mut selections, &catalog);
    assert_eq!(selections[0].track_id.as_deref(), Some("id-9"));
}
