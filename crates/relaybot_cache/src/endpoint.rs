//! GitHub endpoint cache policy.

use crate::{TtlCache, TtlCacheConfig};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

/// GitHub query type with its own freshness window.
///
/// # Examples
///
/// ```
/// use relaybot_cache::EndpointCategory;
/// use std::time::Duration;
///
/// assert_eq!(EndpointCategory::Runs.ttl(), Duration::from_secs(60));
/// assert_eq!(EndpointCategory::Audit.to_string(), "audit");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EndpointCategory {
    /// Repository summary
    Repo,
    /// Workflow runs
    Runs,
    /// Open issues
    Issues,
    /// Open pull requests
    Prs,
    /// Discussions
    Discussions,
    /// Organization audit log
    Audit,
}

impl EndpointCategory {
    /// Time-to-live for summaries of this category.
    pub fn ttl(self) -> Duration {
        match self {
            EndpointCategory::Repo => Duration::from_secs(300),
            EndpointCategory::Runs => Duration::from_secs(60),
            EndpointCategory::Issues => Duration::from_secs(120),
            EndpointCategory::Prs => Duration::from_secs(120),
            EndpointCategory::Discussions => Duration::from_secs(300),
            EndpointCategory::Audit => Duration::from_secs(900),
        }
    }
}

/// Cache of formatted GitHub summaries with per-category TTLs.
///
/// # Example
///
/// ```
/// use relaybot_cache::EndpointCache;
///
/// let mut cache = EndpointCache::default();
/// let key = EndpointCache::generate_key("runs", &["octo/repo", "list"]);
/// assert_eq!(key, "runs:octo/repo:list");
///
/// cache.set_with_endpoint("runs", key.clone(), "📋 Recent workflow runs".to_string());
/// assert!(cache.has(&key));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EndpointCache {
    inner: TtlCache<String>,
}

impl EndpointCache {
    /// Create an endpoint cache on top of a configured TTL cache.
    pub fn new(config: TtlCacheConfig) -> Self {
        Self {
            inner: TtlCache::new(config),
        }
    }

    /// Build the cache key for a query.
    ///
    /// Components are joined with `:`. Any `:` or `\` inside a component is
    /// backslash-escaped, so distinct (category, params) pairs always map
    /// to distinct keys.
    pub fn generate_key<S: AsRef<str>>(category: &str, params: &[S]) -> String {
        std::iter::once(category)
            .chain(params.iter().map(AsRef::as_ref))
            .map(escape_component)
            .collect::<Vec<_>>()
            .join(":")
    }

    /// TTL applied to `category`; unknown categories get the default TTL.
    pub fn ttl_for(&self, category: &str) -> Duration {
        EndpointCategory::from_str(category)
            .map(EndpointCategory::ttl)
            .unwrap_or_else(|_| self.inner.config().default_ttl())
    }

    /// Store `value` with the TTL of its endpoint category.
    #[tracing::instrument(skip(self, key, value))]
    pub fn set_with_endpoint(
        &mut self,
        category: &str,
        key: impl Into<String>,
        value: String,
    ) -> String {
        let ttl = self.ttl_for(category);
        tracing::debug!(ttl_secs = ttl.as_secs(), "Caching endpoint summary");
        self.inner.set(key, value, Some(ttl))
    }

    /// Fetch a fresh summary.
    pub fn get(&mut self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    /// True iff `get` would return a value.
    pub fn has(&mut self, key: &str) -> bool {
        self.inner.has(key)
    }

    /// Remove an entry.
    pub fn delete(&mut self, key: &str) {
        self.inner.delete(key)
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Remove stale entries.
    pub fn cleanup_expired(&mut self) -> usize {
        self.inner.cleanup_expired()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if cache is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Stored keys, for monitoring.
    pub fn keys(&self) -> Vec<String> {
        self.inner.keys()
    }
}

fn escape_component(component: &str) -> String {
    let mut escaped = String::with_capacity(component.len());
    for ch in component.chars() {
        if ch == ':' || ch == '\\' {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_category_round_trips_through_its_name() {
        for category in EndpointCategory::iter() {
            let parsed = EndpointCategory::from_str(&category.to_string()).unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_unknown_category_uses_default_ttl() {
        let cache = EndpointCache::default();
        assert_eq!(cache.ttl_for("gists"), Duration::from_secs(300));
        assert_eq!(cache.ttl_for("audit"), Duration::from_secs(900));
    }

    #[test]
    fn test_separator_inside_params_does_not_collide() {
        let a = EndpointCache::generate_key("runs", &["a:b", "c"]);
        let b = EndpointCache::generate_key("runs", &["a", "b:c"]);
        assert_ne!(a, b);
    }
}
