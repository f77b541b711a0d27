//! Per-channel cache of resolved replies.

use crate::{Staleness, TtlCache, TtlCacheConfig};
use derive_getters::Getters;
use relaybot_core::{Channel, Reply};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for [`ResponseCache`].
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
pub struct ResponseCacheConfig {
    /// How long a reply stays fresh (seconds)
    #[serde(default = "default_ttl_secs")]
    #[builder(default = "default_ttl_secs()")]
    ttl_secs: u64,

    /// Entry count above which an insert sweeps stale entries
    #[serde(default = "default_sweep_threshold")]
    #[builder(default = "default_sweep_threshold()")]
    sweep_threshold: usize,
}

fn default_ttl_secs() -> u64 {
    300
}

fn default_sweep_threshold() -> usize {
    1000
}

impl Default for ResponseCacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            sweep_threshold: default_sweep_threshold(),
        }
    }
}

/// Remembers replies keyed by channel and lowercased message text.
///
/// There is no background sweeper. Reads drop stale entries, and an insert
/// that pushes the size past the threshold removes every entry older than
/// the TTL.
///
/// # Example
///
/// ```
/// use relaybot_cache::ResponseCache;
/// use relaybot_core::{Channel, Reply};
///
/// let mut cache = ResponseCache::default();
/// let key = ResponseCache::key(Channel::Telegram, "Bye");
/// assert_eq!(key, "telegram:bye");
///
/// cache.insert(key.clone(), Reply::from("Goodbye! 👋 Come back anytime."));
/// assert!(cache.get(&key).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct ResponseCache {
    entries: TtlCache<Reply>,
    sweep_threshold: usize,
}

impl ResponseCache {
    /// Create a response cache.
    pub fn new(config: ResponseCacheConfig) -> Self {
        tracing::debug!(
            ttl_secs = config.ttl_secs,
            sweep_threshold = config.sweep_threshold,
            "Creating new ResponseCache"
        );
        let ttl_config = TtlCacheConfig::default()
            .with_default_ttl_secs(config.ttl_secs)
            .with_staleness(Staleness::PerEntry);
        Self {
            entries: TtlCache::new(ttl_config),
            sweep_threshold: config.sweep_threshold,
        }
    }

    /// Key for a message on a channel.
    pub fn key(channel: Channel, text: &str) -> String {
        format!("{}:{}", channel, text.to_lowercase())
    }

    /// Key for a message addressed to a specific page.
    ///
    /// Page overrides are cached per page. `None` gives the same key as
    /// [`ResponseCache::key`].
    pub fn key_for_page(channel: Channel, page_id: Option<&str>, text: &str) -> String {
        match page_id {
            Some(page) => format!(
                "{}@{}:{}",
                channel,
                page.replace('\\', "\\\\").replace(':', "\\:"),
                text.to_lowercase()
            ),
            None => Self::key(channel, text),
        }
    }

    /// Freshness window.
    pub fn ttl(&self) -> Duration {
        self.entries.config().default_ttl()
    }

    /// Fetch a fresh reply.
    pub fn get(&mut self, key: &str) -> Option<Reply> {
        self.entries.get(key)
    }

    /// Remember `reply`, sweeping stale entries when the cache is oversized.
    pub fn insert(&mut self, key: impl Into<String>, reply: Reply) {
        self.entries.set(key, reply, None);

        if self.entries.len() > self.sweep_threshold {
            let removed = self.entries.cleanup_expired();
            tracing::debug!(
                removed,
                remaining = self.entries.len(),
                "Swept response cache"
            );
        }
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(ResponseCacheConfig::default())
    }
}
