//! OpenAI chat completions client.

use super::{ChatCompletionRequest, ChatCompletionResponse, Message, OpenAiConfig};
use async_trait::async_trait;
use relaybot_error::{ModelError, ModelErrorKind, ModelResult};
use relaybot_interface::LanguageModel;
use serde_json::Value as JsonValue;
use std::time::Duration;
use tokio_retry2::strategy::{ExponentialBackoff, jitter};
use tokio_retry2::{Retry, RetryError};
use tracing::{debug, error, instrument, warn};

/// Instruction sent ahead of every user message.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant chatbot. Keep responses concise and friendly.";

const QUOTA_CODE: &str = "insufficient_quota";

/// Map an error status and body to a [`ModelError`].
///
/// Quota exhaustion is recognised from the `error.type` or `error.code`
/// field regardless of status.
///
/// # Examples
///
/// ```
/// use relaybot_models::classify_failure;
///
/// let body = r#"{"error": {"type": "insufficient_quota", "message": "over"}}"#;
/// assert!(classify_failure(429, body).is_quota());
/// assert!(!classify_failure(500, "oops").is_quota());
/// ```
pub fn classify_failure(status: u16, body: &str) -> ModelError {
    let parsed: Option<JsonValue> = serde_json::from_str(body).ok();
    let detail = parsed.as_ref().and_then(|value| value.get("error"));

    let is_quota = detail.is_some_and(|err| {
        ["type", "code"]
            .iter()
            .any(|field| err.get(*field).and_then(JsonValue::as_str) == Some(QUOTA_CODE))
    });
    if is_quota {
        return ModelError::new(ModelErrorKind::QuotaExceeded(QUOTA_CODE.to_string()));
    }

    let message = detail
        .and_then(|err| err.get("message"))
        .and_then(JsonValue::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| body.to_string());
    ModelError::new(ModelErrorKind::Api { status, message })
}

/// Client for an OpenAI-compatible chat completions API.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    config: OpenAiConfig,
    client: reqwest::Client,
}

impl OpenAiClient {
    /// Create a client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built.
    #[instrument(skip(config), fields(model = %config.model(), enabled = config.enabled()))]
    pub fn new(config: OpenAiConfig) -> ModelResult<Self> {
        if *config.enabled() && config.usable_api_key().is_none() {
            warn!("OpenAI enabled but no API key provided, fallback stays silent");
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                ModelError::new(ModelErrorKind::Configuration(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;

        debug!("Creating OpenAI client");
        Ok(Self { config, client })
    }

    /// Client configuration.
    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    /// Whether requests will actually be sent.
    pub fn is_active(&self) -> bool {
        *self.config.enabled() && self.config.usable_api_key().is_some()
    }

    /// Request body for `text`.
    pub fn build_request(&self, text: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model().clone(),
            messages: vec![Message::system(SYSTEM_PROMPT), Message::user(text)],
            max_tokens: Some(*self.config.max_tokens()),
            temperature: Some(*self.config.temperature()),
        }
    }

    async fn send_once(
        &self,
        request: &ChatCompletionRequest,
        api_key: &str,
    ) -> ModelResult<ChatCompletionResponse> {
        let response = self
            .client
            .post(self.config.completions_url())
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("Request failed: {}", e);
                ModelError::new(ModelErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = classify_failure(status.as_u16(), &body);
            error!(status = status.as_u16(), error = %err, "OpenAI returned error");
            return Err(err);
        }

        response.json().await.map_err(|e| {
            error!("Failed to parse response: {}", e);
            ModelError::new(ModelErrorKind::Parse(e.to_string()))
        })
    }
}

#[async_trait]
impl LanguageModel for OpenAiClient {
    #[instrument(
        skip(self, text),
        fields(provider = "openai", model = %self.config.model(), text_len = text.len())
    )]
    async fn respond(&self, text: &str) -> ModelResult<Option<String>> {
        let text = text.trim();
        if text.is_empty() || !*self.config.enabled() {
            return Ok(None);
        }
        let Some(api_key) = self.config.usable_api_key() else {
            return Ok(None);
        };

        let request = &self.build_request(text);
        let strategy = ExponentialBackoff::from_millis(250)
            .factor(2)
            .max_delay(Duration::from_secs(2))
            .map(jitter)
            .take(*self.config.max_retries());

        let response = Retry::spawn(strategy, move || async move {
            match self.send_once(request, api_key).await {
                Ok(response) => Ok(response),
                Err(e) if e.kind.is_retryable() => {
                    warn!(error = %e, "OpenAI request failed, will retry");
                    Err(RetryError::Transient {
                        err: e,
                        retry_after: None,
                    })
                }
                Err(e) => Err(RetryError::Permanent(e)),
            }
        })
        .await?;

        let reply = response.first_text();
        debug!(has_reply = reply.is_some(), "OpenAI responded");
        Ok(reply)
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}
