//! Configuration management for moodlist.
//!
//! Values come from environment variables, optionally loaded from a `.env`
//! file in the local data directory:
//!
//! - Linux: `~/.local/share/moodlist/.env`
//! - macOS: `~/Library/Application Support/moodlist/.env`
//! - Windows: `%LOCALAPPDATA%/moodlist/.env`
//!
//! Variables already set in the process environment take precedence over the
//! file. Endpoints and model parameters fall back to defaults; credentials do
//! not.

use std::{env, path::PathBuf, time::Duration};

use crate::error::Error;

pub const APP_DIR: &str = "moodlist";

const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_SPOTIFY_API_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_GEMINI_TIMEOUT_SECS: u64 = 60;

/// Returns the application's local data directory, e.g. `~/.local/share/moodlist`.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path
}

/// Loads environment variables from `<data dir>/.env`.
///
/// Creates the data directory if needed. A missing or unreadable `.env` file
/// is returned as an error; callers may carry on with the plain process
/// environment.
pub async fn load_env() -> Result<(), String> {
    let dir = data_dir();
    async_fs::create_dir_all(&dir)
        .await
        .map_err(|e| e.to_string())?;

    dotenv::from_path(dir.join(".env")).map_err(|e| e.to_string())?;
    Ok(())
}

/// Spotify Web API base URL (`SPOTIFY_API_URL`).
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_SPOTIFY_API_URL.to_string())
}

/// Token endpoint used to refresh cached access tokens (`SPOTIFY_API_TOKEN_URL`).
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_SPOTIFY_API_TOKEN_URL.to_string())
}

/// Client id of the registered Spotify application (`SPOTIFY_API_AUTH_CLIENT_ID`).
///
/// Only needed to refresh an expired cached token.
pub fn spotify_client_id() -> Result<String, Error> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Access token supplied directly through `SPOTIFY_ACCESS_TOKEN`, if any.
pub fn spotify_access_token() -> Option<String> {
    env::var("SPOTIFY_ACCESS_TOKEN")
        .ok()
        .filter(|t| !t.trim().is_empty())
}

/// Gemini API key (`GEMINI_API_KEY`). Without it playlists are built in
/// fallback mode.
pub fn gemini_api_key() -> Result<String, Error> {
    required("GEMINI_API_KEY")
}

/// Gemini API base URL (`GEMINI_API_URL`).
pub fn gemini_apiurl() -> String {
    env::var("GEMINI_API_URL").unwrap_or_else(|_| DEFAULT_GEMINI_API_URL.to_string())
}

/// Gemini model name (`GEMINI_MODEL`), e.g. `gemini-2.5-flash`.
pub fn gemini_model() -> String {
    env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string())
}

/// Upper bound for a single completion call (`GEMINI_TIMEOUT_SECS`).
pub fn gemini_timeout() -> Duration {
    let secs = env::var("GEMINI_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|s| *s > 0)
        .unwrap_or(DEFAULT_GEMINI_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

fn required(name: &str) -> Result<String, Error> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::Config(format!("{} must be set", name))),
    }
}
