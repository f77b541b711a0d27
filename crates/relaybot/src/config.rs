//! Layered relay configuration.
//!
//! Sources, lowest precedence first:
//! - Bundled defaults (`relaybot.toml`, compiled in)
//! - `~/.config/relaybot/relaybot.toml`
//! - `./relaybot.toml`
//! - `RELAYBOT__<SECTION>__<KEY>` environment variables

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use derive_getters::Getters;
use relaybot_cache::{ResponseCacheConfig, TtlCacheConfig};
use relaybot_error::ConfigError;
use relaybot_github::GithubConfig;
use relaybot_models::OpenAiConfig;
use relaybot_replies::{MessengerTexts, PageEntry};
use relaybot_security::AdminConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../relaybot.toml");

const ENV_PREFIX: &str = "RELAYBOT";

/// Placeholder printed instead of secrets.
pub const MASK: &str = "********";

/// `[messenger]` section.
///
/// ```toml
/// [messenger.texts]
/// site = "🌐 Visit my site: https://example.com"
///
/// [[messenger.pages]]
/// id = "1001"
/// profile = "studio"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters)]
pub struct MessengerConfig {
    /// Keyword reply texts
    #[serde(default)]
    texts: MessengerTexts,
    /// Page id to profile assignments
    #[serde(default)]
    pages: Vec<PageEntry>,
}

/// Complete relay configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters)]
pub struct RelayConfig {
    /// Telegram admin identity
    #[serde(default)]
    telegram: AdminConfig,
    /// GitHub API access
    #[serde(default)]
    github: GithubConfig,
    /// Language model fallback
    #[serde(default)]
    openai: OpenAiConfig,
    /// GitHub endpoint cache
    #[serde(default)]
    cache: TtlCacheConfig,
    /// Canned-reply cache
    #[serde(default)]
    responses: ResponseCacheConfig,
    /// Messenger keyword replies
    #[serde(default)]
    messenger: MessengerConfig,
}

impl RelayConfig {
    /// Load configuration from every source.
    ///
    /// # Errors
    ///
    /// Returns error if a present file is malformed or a value has the wrong
    /// type.
    #[instrument]
    pub fn load() -> Result<Self, ConfigError> {
        debug!(
            "Loading configuration with precedence: env > current dir > home dir > bundled defaults"
        );

        let mut builder = defaults();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/relaybot/relaybot.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("relaybot").required(false))
            .add_source(environment());

        finish(builder)
    }

    /// Load the bundled defaults overlaid with one TOML file.
    ///
    /// Environment variables and the home directory are not consulted.
    ///
    /// # Errors
    ///
    /// Returns error if the file is missing or malformed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = defaults().add_source(
            File::from(path.as_ref())
                .format(FileFormat::Toml)
                .required(true),
        );
        finish(builder)
    }

    /// Load the bundled defaults overlaid with TOML text.
    ///
    /// # Errors
    ///
    /// Returns error if the text is not valid configuration.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        finish(defaults().add_source(File::from_str(contents, FileFormat::Toml)))
    }

    /// Copy with the GitHub token and OpenAI key replaced by [`MASK`].
    pub fn masked(&self) -> Self {
        let mut masked = self.clone();
        if masked.github.token().is_some() {
            masked.github = masked.github.with_token(Some(MASK.to_string()));
        }
        if masked.openai.api_key().is_some() {
            masked.openai = masked.openai.with_api_key(Some(MASK.to_string()));
        }
        masked
    }

    /// Render the masked configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_masked_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(&self.masked())
            .map_err(|e| ConfigError::new(format!("Failed to render configuration: {}", e)))
    }
}

fn defaults() -> ConfigBuilder<DefaultState> {
    Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

fn finish(builder: ConfigBuilder<DefaultState>) -> Result<RelayConfig, ConfigError> {
    builder
        .build()
        .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
        .try_deserialize()
        .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))
}
