//! `[github]` configuration section.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// GitHub API access settings.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
pub struct GithubConfig {
    /// Personal access token sent as a bearer token
    #[serde(default)]
    #[builder(default, setter(into, strip_option))]
    token: Option<String>,

    /// REST API base URL
    #[serde(default = "default_api_base")]
    #[builder(default = "default_api_base()", setter(into))]
    api_base: String,

    /// User-Agent header value
    #[serde(default = "default_user_agent")]
    #[builder(default = "default_user_agent()", setter(into))]
    user_agent: String,

    /// Organization used by `/gh audit` without an argument
    #[serde(default = "default_org")]
    #[builder(default = "default_org()", setter(into))]
    default_org: String,

    /// Per-request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    #[builder(default = "default_timeout_secs()")]
    timeout_secs: u64,
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

fn default_user_agent() -> String {
    "relaybot".to_string()
}

fn default_org() -> String {
    "octocat".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_base: default_api_base(),
            user_agent: default_user_agent(),
            default_org: default_org(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GithubConfig {
    /// Request timeout as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Token, ignoring blank values.
    pub fn usable_token(&self) -> Option<&str> {
        self.token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}
