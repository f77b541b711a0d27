//! `[openai]` configuration section.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// OpenAI client settings.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
pub struct OpenAiConfig {
    /// Whether the fallback is used at all
    #[serde(default)]
    #[builder(default)]
    enabled: bool,

    /// API key sent as a bearer token
    #[serde(default)]
    #[builder(default, setter(into, strip_option))]
    api_key: Option<String>,

    /// API base URL, without the `/chat/completions` suffix
    #[serde(default = "default_base_url")]
    #[builder(default = "default_base_url()", setter(into))]
    base_url: String,

    /// Model name
    #[serde(default = "default_model")]
    #[builder(default = "default_model()", setter(into))]
    model: String,

    /// Completion length limit
    #[serde(default = "default_max_tokens")]
    #[builder(default = "default_max_tokens()")]
    max_tokens: u32,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    #[builder(default = "default_temperature()")]
    temperature: f32,

    /// Per-request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    #[builder(default = "default_timeout_secs()")]
    timeout_secs: u64,

    /// Retries after a transient failure
    #[serde(default = "default_max_retries")]
    #[builder(default = "default_max_retries()")]
    max_retries: usize,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_max_tokens() -> u32 {
    200
}

fn default_temperature() -> f32 {
    0.7
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_retries() -> usize {
    2
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

impl OpenAiConfig {
    /// Request timeout as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// API key, ignoring blank values.
    pub fn usable_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Chat completions endpoint.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}
