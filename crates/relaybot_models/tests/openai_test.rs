//! Tests for the OpenAI fallback client that do not reach the real API.

use relaybot_error::ModelErrorKind;
use relaybot_interface::LanguageModel;
use relaybot_models::{
    ChatCompletionResponse, OpenAiClient, OpenAiConfig, OpenAiConfigBuilder, SYSTEM_PROMPT,
    classify_failure,
};
use serde_json::json;

#[tokio::test]
async fn test_disabled_client_stays_silent() {
    let client = OpenAiClient::new(OpenAiConfig::default()).unwrap();
    assert!(!client.is_active());
    assert_eq!(client.respond("hello?").await.unwrap(), None);
}

#[tokio::test]
async fn test_enabled_without_key_stays_silent() {
    let config = OpenAiConfigBuilder::default().enabled(true).build().unwrap();
    let client = OpenAiClient::new(config).unwrap();
    assert!(!client.is_active());
    assert_eq!(client.respond("hello?").await.unwrap(), None);
}

#[tokio::test]
async fn test_blank_text_is_not_sent() {
    let config = OpenAiConfigBuilder::default()
        .enabled(true)
        .api_key("sk-test")
        .base_url("http://127.0.0.1:9")
        .build()
        .unwrap();
    let client = OpenAiClient::new(config).unwrap();
    assert_eq!(client.respond("   ").await.unwrap(), None);
}

#[tokio::test]
async fn test_unreachable_endpoint_is_an_http_error() {
    let config = OpenAiConfigBuilder::default()
        .enabled(true)
        .api_key("sk-test")
        .base_url("http://127.0.0.1:9")
        .timeout_secs(1_u64)
        .max_retries(0_usize)
        .build()
        .unwrap();
    let client = OpenAiClient::new(config).unwrap();

    let err = client.respond("what is rust?").await.unwrap_err();
    assert!(matches!(err.kind, ModelErrorKind::Http(_)));
    assert!(!err.is_quota());
}

#[test]
fn test_request_carries_prompt_and_limits() {
    let client = OpenAiClient::new(OpenAiConfig::default()).unwrap();
    let request = client.build_request("How do lifetimes work?");

    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(
        body,
        json!({
            "model": "gpt-3.5-turbo",
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": "How do lifetimes work?"}
            ],
            "max_tokens": 200,
            "temperature": 0.7_f32
        })
    );
}

#[test]
fn test_quota_recognised_by_type_or_code() {
    let by_type =
        r#"{"error": {"type": "insufficient_quota", "message": "You exceeded your quota"}}"#;
    let by_code = r#"{"error": {"type": "invalid_request_error", "code": "insufficient_quota"}}"#;

    assert!(classify_failure(429, by_type).is_quota());
    assert!(classify_failure(429, by_code).is_quota());
}

#[test]
fn test_rate_limit_is_retryable_but_not_quota() {
    let body = r#"{"error": {"type": "requests", "message": "Rate limit reached"}}"#;
    let err = classify_failure(429, body);

    assert!(!err.is_quota());
    assert!(err.kind.is_retryable());
    assert_eq!(
        err.kind,
        ModelErrorKind::Api {
            status: 429,
            message: "Rate limit reached".to_string()
        }
    );
}

#[test]
fn test_client_errors_are_permanent() {
    let err = classify_failure(401, "unauthorized");
    assert!(!err.kind.is_retryable());
}

#[test]
fn test_first_text_is_trimmed_and_skips_empty() {
    let response: ChatCompletionResponse = serde_json::from_value(json!({
        "id": "chatcmpl-1",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": "  Hi!  "}}]
    }))
    .unwrap();
    assert_eq!(response.first_text().as_deref(), Some("Hi!"));

    let empty: ChatCompletionResponse = serde_json::from_value(json!({
        "choices": [{"message": {"role": "assistant", "content": "   "}}]
    }))
    .unwrap();
    assert_eq!(empty.first_text(), None);

    assert_eq!(ChatCompletionResponse::default().first_text(), None);
}

#[test]
fn test_config_defaults_from_empty_toml() {
    let config: OpenAiConfig = toml::from_str("enabled = true").unwrap();
    assert!(*config.enabled());
    assert_eq!(config.model(), "gpt-3.5-turbo");
    assert_eq!(*config.max_tokens(), 200);
    assert_eq!(*config.max_retries(), 2);
    assert_eq!(config.completions_url(), "https://api.openai.com/v1/chat/completions");
}
