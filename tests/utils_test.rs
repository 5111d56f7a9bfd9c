use moodlist::utils::*;

#[test]
fn test_title_case() {
    assert_eq!(title_case("chill vibes"), "Chill Vibes");
    assert_eq!(title_case("  LATE   night drive "), "Late Night Drive");
    assert_eq!(title_case(""), "");
}

#[test]
fn test_default_playlist_name() {
    assert_eq!(default_playlist_name("rainy sunday"), "Rainy Sunday Mix");
    assert_eq!(default_playlist_name("   "), "My Custom Playlist");
}

#[test]
fn test_normalize_release_date_expands_partial_dates() {
    assert_eq!(normalize_release_date(Some("2019")), Some("2019-01-01".to_string()));
    assert_eq!(normalize_release_date(Some("2019-04")), Some("2019-04-01".to_string()));
    assert_eq!(normalize_release_date(Some("2019-04-12")), Some("2019-04-12".to_string()));
}

#[test]
fn test_normalize_release_date_keeps_unknown_formats() {
    assert_eq!(normalize_release_date(None), None);
    assert_eq!(normalize_release_date(Some("  ")), None);
    assert_eq!(normalize_release_date(Some("19xx")), Some("19xx".to_string()));
    assert_eq!(normalize_release_date(Some("2019年4月")), Some("2019年4月".to_string()));
}

#[test]
fn test_parse_track_count() {
    assert_eq!(parse_track_count("20"), Ok(20));
    assert_eq!(parse_track_count(" 1 "), Ok(1));
    assert!(parse_track_count("0").is_err());
    assert!(parse_track_count("-3").is_err());
    assert!(parse_track_count("many").is_err());
}

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("exactly ten", 11), "exactly ten");
    assert_eq!(truncate("a very long track name", 10), "a very ...");
    assert_eq!(truncate("Sigur Rós Ágætis byrjun", 12), "Sigur Rós...");
}

#[test]
fn test_join_genres() {
    let genres = vec![
        "indie".to_string(),
        "dream pop".to_string(),
        "shoegaze".to_string(),
        "ambient".to_string(),
    ];
    assert_eq!(join_genres(&genres, 3), "indie, dream pop, shoegaze");
    assert_eq!(join_genres(&[], 3), "No genres");
}

#[test]
fn test_format_timestamp() {
    assert_eq!(format_timestamp(0, "%Y-%m-%d"), "1970-01-01");
    assert_eq!(format_timestamp(1_700_000_000, "%Y-%m-%d %H:%M"), "2023-11-14 22:13");
}

#[test]
fn test_now_timestamp_is_recent() {
    // 2024-01-01
    assert!(now_timestamp() > 1_704_067_200);
}
