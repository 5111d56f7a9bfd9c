use crate::{error, gemini::GeminiClient, info, success, utils, warning};

/// Verifies that the Gemini completion service is configured and answers.
pub async fn check() {
    let client = match GeminiClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            warning!("AI features unavailable, playlists will use fallback mode: {}", e);
            return;
        }
    };

    info!("Testing connection to {}...", client.model());
    let pb = utils::spinner("Waiting for the model...");
    let result = client.test_connection().await;
    pb.finish_and_clear();

    match result {
        Ok(answer) => success!("AI connection OK, model said: {}", answer),
        Err(e) => error!("AI connection failed: {}", e),
    }
}
