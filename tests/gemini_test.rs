use moodlist::{
    curator::GenerationConfig,
    gemini::models::{GenerateContentRequest, GenerateContentResponse},
};

#[test]
fn test_request_body_uses_camel_case() {
    let config = GenerationConfig {
        max_output_tokens: 1024,
        ..GenerationConfig::default()
    };
    let body = serde_json::to_value(GenerateContentRequest::new("hello", &config)).unwrap();

    assert_eq!(body["contents"][0]["role"], "user");
    assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
    assert_eq!(body["generationConfig"]["maxOutputTokens"], 1024);
    assert_eq!(body["generationConfig"]["topK"], 40);
}

#[test]
fn test_response_text_joins_parts() {
    let response: GenerateContentResponse = serde_json::from_str(
        r#"{"candidates": [{"content": {"role": "model", "parts": [{"text": "{\"a\":"}, {"text": " 1}"}]}, "finishReason": "MAX_TOKENS"}]}"#,
    )
    .unwrap();

    assert_eq!(response.text().as_deref(), Some("{\"a\": 1}"));
    assert_eq!(response.finish_reason(), Some("MAX_TOKENS"));
    assert_eq!(response.block_reason(), None);
}

#[test]
fn test_blocked_prompt_has_no_text() {
    let response: GenerateContentResponse =
        serde_json::from_str(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#).unwrap();

    assert_eq!(response.text(), None);
    assert_eq!(response.block_reason(), Some("SAFETY"));
}

#[test]
fn test_candidate_without_content() {
    let response: GenerateContentResponse =
        serde_json::from_str(r#"{"candidates": [{"finishReason": "RECITATION"}]}"#).unwrap();

    assert_eq!(response.text(), None);
    assert_eq!(response.finish_reason(), Some("RECITATION"));
}
