//! Generic TTL cache implementation.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;

/// Cache entry with value and expiration.
#[derive(Debug, Clone, Getters)]
pub struct CacheEntry<V> {
    value: V,
    stored_at: Instant,
    ttl: Duration,
}

impl<V> CacheEntry<V> {
    /// Check whether this entry is older than `limit`.
    pub fn is_older_than(&self, limit: Duration) -> bool {
        self.stored_at.elapsed() > limit
    }

    /// Get remaining time until expiration of the entry's own TTL.
    pub fn time_remaining(&self) -> Option<Duration> {
        self.ttl.checked_sub(self.stored_at.elapsed())
    }
}

/// How reads decide that an entry is stale.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Staleness {
    /// Compare each entry against the TTL it was stored with.
    #[default]
    PerEntry,
    /// Compare every entry against the cache-wide default TTL, ignoring
    /// the TTL passed to `set`. An entry stored with a longer TTL is evicted
    /// once the default elapses. Kept for parity with older deployments.
    CacheDefault,
}

/// Configuration for [`TtlCache`].
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
pub struct TtlCacheConfig {
    /// Default TTL for entries stored without an explicit one (seconds)
    #[serde(default = "default_ttl_secs")]
    #[builder(default = "default_ttl_secs()")]
    default_ttl_secs: u64,

    /// Staleness policy applied on reads
    #[serde(default)]
    #[builder(default)]
    staleness: Staleness,
}

fn default_ttl_secs() -> u64 {
    300 // 5 minutes
}

impl TtlCacheConfig {
    /// Default TTL as a duration.
    pub fn default_ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl_secs)
    }
}

impl Default for TtlCacheConfig {
    fn default() -> Self {
        Self {
            default_ttl_secs: default_ttl_secs(),
            staleness: Staleness::default(),
        }
    }
}

/// Key/value store with per-entry expiry.
///
/// # Example
///
/// ```
/// use relaybot_cache::{TtlCache, TtlCacheConfig};
/// use std::time::Duration;
///
/// let mut cache = TtlCache::new(TtlCacheConfig::default());
/// cache.set("greeting", "hello".to_string(), Some(Duration::from_secs(60)));
///
/// assert_eq!(cache.get("greeting").as_deref(), Some("hello"));
/// assert!(cache.has("greeting"));
///
/// cache.delete("greeting");
/// assert!(cache.get("greeting").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct TtlCache<V> {
    config: TtlCacheConfig,
    entries: HashMap<String, CacheEntry<V>>,
}

impl<V: Clone> TtlCache<V> {
    /// Create a new cache with configuration.
    pub fn new(config: TtlCacheConfig) -> Self {
        tracing::debug!(
            default_ttl_secs = config.default_ttl_secs,
            staleness = %config.staleness,
            "Creating new TtlCache"
        );
        Self {
            config,
            entries: HashMap::new(),
        }
    }

    /// Cache configuration.
    pub fn config(&self) -> &TtlCacheConfig {
        &self.config
    }

    /// Store `value` under `key`, replacing any previous entry.
    ///
    /// `ttl` falls back to the configured default. The stored value is
    /// returned so callers can cache-and-return in one expression.
    #[tracing::instrument(
        skip_all,
        fields(key = tracing::field::Empty, ttl_secs = tracing::field::Empty)
    )]
    pub fn set(&mut self, key: impl Into<String>, value: V, ttl: Option<Duration>) -> V {
        let key = key.into();
        let ttl = ttl.unwrap_or_else(|| self.config.default_ttl());
        tracing::Span::current().record("key", key.as_str());
        tracing::Span::current().record("ttl_secs", ttl.as_secs());

        let replaced = self
            .entries
            .insert(
                key,
                CacheEntry {
                    value: value.clone(),
                    stored_at: Instant::now(),
                    ttl,
                },
            )
            .is_some();

        tracing::debug!(replaced, cache_size = self.entries.len(), "Stored cache entry");
        value
    }

    /// Fetch a fresh value, evicting it if it went stale.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let entry = self.entries.get(key)?;
        if self.is_stale(entry) {
            tracing::debug!(key, "Cache entry expired, removing");
            self.entries.remove(key);
            return None;
        }

        tracing::debug!(key, time_remaining = ?entry.time_remaining(), "Cache hit");
        Some(entry.value.clone())
    }

    /// True iff [`get`](Self::get) would return a value.
    pub fn has(&mut self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove an entry. Removing a missing key is a no-op.
    pub fn delete(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            tracing::debug!(key, "Deleted cache entry");
        }
    }

    /// Clear all cache entries.
    pub fn clear(&mut self) {
        let count = self.entries.len();
        self.entries.clear();
        tracing::info!(cleared = count, "Cleared cache");
    }

    /// Remove every stale entry, returning how many were dropped.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        let staleness = self.config.staleness;
        let default_ttl = self.config.default_ttl();

        self.entries
            .retain(|_, entry| !Self::stale_under(staleness, default_ttl, entry));

        let removed = before - self.entries.len();
        if removed > 0 {
            tracing::info!(
                removed,
                remaining = self.entries.len(),
                "Cleaned up expired cache entries"
            );
        }
        removed
    }

    /// Number of stored entries, including ones not yet found stale.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored keys, for monitoring.
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    fn is_stale(&self, entry: &CacheEntry<V>) -> bool {
        Self::stale_under(self.config.staleness, self.config.default_ttl(), entry)
    }

    fn stale_under(staleness: Staleness, default_ttl: Duration, entry: &CacheEntry<V>) -> bool {
        match staleness {
            Staleness::PerEntry => entry.is_older_than(entry.ttl),
            Staleness::CacheDefault => entry.is_older_than(default_ttl),
        }
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new(TtlCacheConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_overwrite_resets_age() {
        let mut cache = TtlCache::new(TtlCacheConfig::default());
        cache.set("k", 1, Some(Duration::from_secs(10)));

        tokio::time::advance(Duration::from_secs(8)).await;
        cache.set("k", 2, Some(Duration::from_secs(10)));
        tokio::time::advance(Duration::from_secs(8)).await;

        assert_eq!(cache.get("k"), Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cleanup_expired_counts_removed() {
        let mut cache = TtlCache::new(TtlCacheConfig::default());
        cache.set("short", 1, Some(Duration::from_secs(1)));
        cache.set("long", 2, Some(Duration::from_secs(100)));

        tokio::time::advance(Duration::from_secs(2)).await;

        assert_eq!(cache.cleanup_expired(), 1);
        assert_eq!(cache.keys(), vec!["long".to_string()]);
    }

    #[test]
    fn test_staleness_parses_from_config_strings() {
        assert_eq!("per_entry".parse::<Staleness>().unwrap(), Staleness::PerEntry);
        assert_eq!(
            "cache_default".parse::<Staleness>().unwrap(),
            Staleness::CacheDefault
        );
    }
}
