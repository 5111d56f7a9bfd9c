use std::path::PathBuf;

use chrono::Utc;
use reqwest::Client;

use crate::{config, error::Error, types::Token, utils};

/// Holds the Spotify access token used for catalog and publish requests.
///
/// The token is read from `<data dir>/cache/token.json`, falling back to
/// `SPOTIFY_ACCESS_TOKEN`. Obtaining the first token is not handled here.
pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    pub async fn load() -> Result<Self, Error> {
        match Self::load_cached().await {
            Ok(manager) => Ok(manager),
            Err(cache_err) => match config::spotify_access_token() {
                Some(access_token) => Ok(Self::new(Token {
                    access_token,
                    refresh_token: String::new(),
                    scope: String::new(),
                    expires_in: 3600,
                    obtained_at: utils::now_timestamp(),
                })),
                None => Err(Error::SourceUnavailable(format!(
                    "No Spotify token cached ({}) and SPOTIFY_ACCESS_TOKEN is not set",
                    cache_err
                ))),
            },
        }
    }

    async fn load_cached() -> Result<Self, Error> {
        let content = async_fs::read_to_string(Self::token_path()).await?;
        let token: Token = serde_json::from_str(&content)?;
        Ok(Self { token })
    }

    pub async fn persist(&self) -> Result<(), Error> {
        super::write_json_atomic(&Self::token_path(), &self.token).await
    }

    pub async fn get_valid_token(&mut self) -> String {
        if self.is_expired() {
            if let Ok(new_token) = self.refresh_token().await {
                self.token = new_token;
                let _ = self.persist().await;
            }
        }

        self.token.access_token.clone()
    }

    /// Tokens without a refresh token are never considered expired; there is
    /// nothing to renew them with.
    fn is_expired(&self) -> bool {
        if self.token.refresh_token.is_empty() {
            return false;
        }
        let now = Utc::now().timestamp() as u64;
        now >= (self.token.obtained_at + self.token.expires_in).saturating_sub(240)
    }

    async fn refresh_token(&self) -> Result<Token, Error> {
        let client_id = config::spotify_client_id()?;
        let client = Client::new();
        let res = client
            .post(config::spotify_apitoken_url())
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", self.token.refresh_token.as_str()),
                ("client_id", client_id.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let json: serde_json::Value = res.json().await?;

        let access_token = json["access_token"]
            .as_str()
            .ok_or_else(|| Error::SourceUnavailable("Token refresh returned no access token".to_string()))?;

        Ok(Token {
            access_token: access_token.to_string(),
            // Spotify may or may not rotate the refresh token
            refresh_token: json["refresh_token"]
                .as_str()
                .unwrap_or(&self.token.refresh_token)
                .to_string(),
            scope: json["scope"].as_str().unwrap_or_default().to_string(),
            expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
            obtained_at: Utc::now().timestamp() as u64,
        })
    }

    fn token_path() -> PathBuf {
        config::data_dir().join("cache/token.json")
    }
}
