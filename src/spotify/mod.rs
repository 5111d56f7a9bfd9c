//! # Spotify Integration Module
//!
//! Thin client for the parts of the Spotify Web API moodlist needs: reading
//! the user's playlists and their tracks, and publishing a generated playlist
//! back to the account.
//!
//! ## Architecture
//!
//! ```text
//! CLI commands
//!      ↓
//! Spotify Integration Layer
//!     ├── Catalog (playlist tracks + artist genres)   → TrackSource
//!     └── Playlists (list, create, add tracks)
//!      ↓
//! get_json / post_json (retry on 502 and 429)
//!      ↓
//! Spotify Web API
//! ```
//!
//! ## API Coverage
//!
//! - `GET /me` - current user id, needed to create playlists
//! - `GET /me/playlists` - the user's playlists, paginated
//! - `GET /playlists/{id}/tracks` - catalog source
//! - `GET /artists?ids=` - genres, at most 50 artists per call
//! - `POST /users/{user_id}/playlists` - create a playlist
//! - `POST /playlists/{playlist_id}/tracks` - add tracks, at most 100 per call
//!
//! ## Retry Logic
//!
//! Every request goes through the same loop: a 502 Bad Gateway is retried
//! after 10 seconds, a 429 Too Many Requests is retried after the
//! `Retry-After` delay as long as that delay is at most 120 seconds. Any other
//! failure is returned to the caller.
//!
//! Obtaining the first access token is out of scope. [`TokenManager`] uses a
//! cached token or `SPOTIFY_ACCESS_TOKEN`.
//!
//! [`TokenManager`]: crate::management::TokenManager

mod catalog;
pub mod playlists;

pub use catalog::SpotifyCatalog;

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tokio::time::sleep;

use crate::warning;

const MAX_RETRY_AFTER_SECS: u64 = 120;

async fn send_with_retry<F>(build: F) -> Result<Response, reqwest::Error>
where
    F: Fn() -> RequestBuilder,
{
    loop {
        let response = build().send().await?;

        match response.status() {
            StatusCode::BAD_GATEWAY => {
                sleep(Duration::from_secs(10)).await;
                continue; // retry
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(0);

                if retry_after <= MAX_RETRY_AFTER_SECS {
                    sleep(Duration::from_secs(retry_after)).await;
                    continue;
                }

                warning!(
                    "Spotify asked to retry after {} seconds, giving up for now.",
                    retry_after
                );
                return response.error_for_status();
            }
            _ => return response.error_for_status(),
        }
    }
}

pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    token: &str,
    url: &str,
) -> Result<T, reqwest::Error> {
    send_with_retry(|| client.get(url).bearer_auth(token))
        .await?
        .json::<T>()
        .await
}

pub(crate) async fn post_json<B, T>(
    client: &Client,
    token: &str,
    url: &str,
    body: &B,
) -> Result<T, reqwest::Error>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    send_with_retry(|| client.post(url).bearer_auth(token).json(body))
        .await?
        .json::<T>()
        .await
}
