use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::{
    config,
    curator::{CompletionService, GenerationConfig},
    error::{CompletionError, Error},
    gemini::models::{GenerateContentRequest, GenerateContentResponse},
};

const CONNECTION_PROMPT: &str = "Just say \"connecting...\" and nothing else.";

pub struct GeminiClient {
    client: Client,
    api_url: String,
    model: String,
    api_key: String,
    timeout: Duration,
}

impl GeminiClient {
    pub fn new(
        api_key: String,
        model: String,
        api_url: String,
        timeout: Duration,
    ) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            model: model.trim_start_matches("models/").to_string(),
            api_key,
            timeout,
        })
    }

    /// Builds a client from `GEMINI_API_KEY`, `GEMINI_MODEL`, `GEMINI_API_URL`
    /// and `GEMINI_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(
            config::gemini_api_key()?,
            config::gemini_model(),
            config::gemini_apiurl(),
            config::gemini_timeout(),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sends a trivial prompt and returns the model's answer.
    pub async fn test_connection(&self) -> Result<String, CompletionError> {
        self.complete(CONNECTION_PROMPT, &GenerationConfig::default())
            .await
            .map(|text| text.trim().to_string())
    }

    fn endpoint(&self) -> String {
        format!(
            "{url}/models/{model}:generateContent",
            url = self.api_url,
            model = self.model
        )
    }
}

#[async_trait]
impl CompletionService for GeminiClient {
    async fn complete(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, CompletionError> {
        let request = GenerateContentRequest::new(prompt, config);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    CompletionError::Unauthenticated(body)
                }
                StatusCode::TOO_MANY_REQUESTS => CompletionError::Quota(body),
                _ => CompletionError::Service {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;

        if let Some(reason) = parsed.block_reason() {
            return Err(CompletionError::Blocked(reason.to_string()));
        }

        match parsed.text() {
            Some(text) => Ok(text),
            None => match parsed.finish_reason() {
                Some(reason @ ("SAFETY" | "RECITATION" | "BLOCKLIST")) => {
                    Err(CompletionError::Blocked(reason.to_string()))
                }
                _ => Err(CompletionError::EmptyResponse),
            },
        }
    }
}
