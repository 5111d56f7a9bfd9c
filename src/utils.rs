use std::time::Duration;

use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};

/// Capitalizes the first letter of every word and lowercases the rest.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// `"chill vibes"` becomes `"Chill Vibes Mix"`.
pub fn default_playlist_name(mood_description: &str) -> String {
    let mood = title_case(mood_description);
    if mood.is_empty() {
        "My Custom Playlist".to_string()
    } else {
        format!("{} Mix", mood)
    }
}

/// Expands partial release dates to full ISO dates: `2019` to `2019-01-01`,
/// `2019-04` to `2019-04-01`. Anything else is kept as it is.
pub fn normalize_release_date(date: Option<&str>) -> Option<String> {
    let date = date?.trim();
    if date.is_empty() {
        return None;
    }
    if !date.is_ascii() {
        return Some(date.to_string());
    }

    let is_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    match date.len() {
        4 if is_digits(date) => Some(format!("{}-01-01", date)),
        7 if is_digits(&date[..4]) && &date[4..5] == "-" && is_digits(&date[5..]) => {
            Some(format!("{}-01", date))
        }
        _ => Some(date.to_string()),
    }
}

/// Parses a track count given on the command line; zero is rejected.
pub fn parse_track_count(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(count) => Ok(count),
        Err(e) => Err(format!("'{}' is not a track count: {}", value, e)),
    }
}

/// Shortens `text` to at most `width` characters, ending in `...` when cut.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

pub fn join_genres(genres: &[String], take: usize) -> String {
    if genres.is_empty() {
        return "No genres".to_string();
    }
    genres.iter().take(take).cloned().collect::<Vec<_>>().join(", ")
}

pub fn now_timestamp() -> u64 {
    Utc::now().timestamp().max(0) as u64
}

pub fn format_timestamp(timestamp: u64, format: &str) -> String {
    DateTime::<Utc>::from_timestamp(timestamp as i64, 0)
        .map(|dt| dt.format(format).to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
