//! Tests for TTL, endpoint and response caching.

use relaybot_cache::{
    EndpointCache, EndpointCategory, ResponseCache, ResponseCacheConfigBuilder, Staleness,
    TtlCache, TtlCacheConfig, TtlCacheConfigBuilder,
};
use relaybot_core::{Channel, Reply};
use std::time::Duration;
use tokio::time::advance;

#[tokio::test(start_paused = true)]
async fn test_get_after_ttl_returns_none() {
    let mut cache = TtlCache::new(TtlCacheConfig::default());
    cache.set("k", "v".to_string(), Some(Duration::from_secs(5)));

    advance(Duration::from_secs(4)).await;
    assert_eq!(cache.get("k").as_deref(), Some("v"));

    advance(Duration::from_secs(2)).await;
    assert!(cache.get("k").is_none());
    assert!(cache.is_empty(), "stale entry should be evicted on read");
}

#[tokio::test(start_paused = true)]
async fn test_missing_ttl_uses_default() {
    let config = TtlCacheConfigBuilder::default()
        .default_ttl_secs(10)
        .build()
        .unwrap();
    let mut cache = TtlCache::new(config);
    cache.set("k", 1u32, None);

    advance(Duration::from_secs(9)).await;
    assert!(cache.has("k"));

    advance(Duration::from_secs(2)).await;
    assert!(!cache.has("k"));
}

#[tokio::test(start_paused = true)]
async fn test_cache_default_staleness_evicts_long_entries_early() {
    let config = TtlCacheConfigBuilder::default()
        .default_ttl_secs(300)
        .staleness(Staleness::CacheDefault)
        .build()
        .unwrap();
    let mut cache = TtlCache::new(config);
    cache.set("audit", "log".to_string(), Some(Duration::from_secs(900)));

    advance(Duration::from_secs(301)).await;
    assert!(cache.get("audit").is_none());
}

#[tokio::test(start_paused = true)]
async fn test_per_entry_staleness_keeps_long_entries() {
    let mut cache = TtlCache::new(TtlCacheConfig::default());
    cache.set("audit", "log".to_string(), Some(Duration::from_secs(900)));

    advance(Duration::from_secs(301)).await;
    assert!(cache.has("audit"));
}

#[test]
fn test_delete_and_clear() {
    let mut cache = TtlCache::new(TtlCacheConfig::default());
    cache.set("a", 1, None);
    cache.set("b", 2, None);

    cache.delete("a");
    cache.delete("missing");
    assert_eq!(cache.len(), 1);

    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn test_set_returns_stored_value() {
    let mut cache = TtlCache::new(TtlCacheConfig::default());
    let returned = cache.set("k", "value".to_string(), None);
    assert_eq!(returned, "value");
}

#[test]
fn test_generate_key_joins_components() {
    assert_eq!(
        EndpointCache::generate_key("repo", &["octo/repo"]),
        "repo:octo/repo"
    );
    assert_eq!(
        EndpointCache::generate_key("runs", &["octo/repo", "filter", "CI"]),
        "runs:octo/repo:filter:CI"
    );
}

#[test]
fn test_generate_key_escapes_separators() {
    assert_eq!(
        EndpointCache::generate_key("runs", &["a:b"]),
        r"runs:a\:b"
    );
    assert_eq!(
        EndpointCache::generate_key("runs", &[r"a\"]),
        r"runs:a\\"
    );

    let list = EndpointCache::generate_key("runs", &["octo/repo", "list"]);
    let filtered = EndpointCache::generate_key("runs", &["octo/repo:list"]);
    assert_ne!(list, filtered);
}

#[test]
fn test_generate_key_distinguishes_categories() {
    let issues = EndpointCache::generate_key("issues", &["octo/repo"]);
    let prs = EndpointCache::generate_key("prs", &["octo/repo"]);
    assert_ne!(issues, prs);
}

#[tokio::test(start_paused = true)]
async fn test_runs_expire_before_repo_summaries() {
    let mut cache = EndpointCache::default();
    let runs = EndpointCache::generate_key("runs", &["octo/repo", "list"]);
    let repo = EndpointCache::generate_key("repo", &["octo/repo"]);

    cache.set_with_endpoint("runs", runs.clone(), "runs".to_string());
    cache.set_with_endpoint("repo", repo.clone(), "repo".to_string());

    advance(Duration::from_secs(61)).await;
    assert!(!cache.has(&runs));
    assert!(cache.has(&repo));
}

#[tokio::test(start_paused = true)]
async fn test_audit_lives_fifteen_minutes() {
    let mut cache = EndpointCache::default();
    cache.set_with_endpoint("audit", "audit:octo", "log".to_string());

    advance(Duration::from_secs(899)).await;
    assert_eq!(cache.get("audit:octo").as_deref(), Some("log"));

    advance(Duration::from_secs(2)).await;
    assert!(cache.get("audit:octo").is_none());
}

#[test]
fn test_category_ttl_table() {
    assert_eq!(EndpointCategory::Repo.ttl(), Duration::from_secs(300));
    assert_eq!(EndpointCategory::Issues.ttl(), Duration::from_secs(120));
    assert_eq!(EndpointCategory::Prs.ttl(), Duration::from_secs(120));
    assert_eq!(EndpointCategory::Discussions.ttl(), Duration::from_secs(300));
}

#[test]
fn test_response_key_lowercases_text() {
    assert_eq!(ResponseCache::key(Channel::Telegram, "BYE"), "telegram:bye");
    assert_eq!(
        ResponseCache::key(Channel::Messenger, "Hello There"),
        "messenger:hello there"
    );
}

#[test]
fn test_response_key_separates_pages() {
    let studio = ResponseCache::key_for_page(Channel::Messenger, Some("1001"), "Quote");
    let collective = ResponseCache::key_for_page(Channel::Messenger, Some("1002"), "Quote");

    assert_eq!(studio, "messenger@1001:quote");
    assert_ne!(studio, collective);
    assert_ne!(studio, ResponseCache::key(Channel::Messenger, "quote"));
    assert_eq!(
        ResponseCache::key_for_page(Channel::Messenger, None, "Quote"),
        "messenger:quote"
    );
    // A colon in the page id cannot shift into the text
    assert_ne!(
        ResponseCache::key_for_page(Channel::Messenger, Some("a:b"), "c"),
        ResponseCache::key_for_page(Channel::Messenger, Some("a"), "b:c")
    );
}

#[tokio::test(start_paused = true)]
async fn test_response_cache_expires_after_ttl() {
    let config = ResponseCacheConfigBuilder::default()
        .ttl_secs(60)
        .build()
        .unwrap();
    let mut cache = ResponseCache::new(config);
    cache.insert("telegram:hi", Reply::from("Hey there! 👋 How can I help you today?"));

    advance(Duration::from_secs(59)).await;
    assert!(cache.get("telegram:hi").is_some());

    advance(Duration::from_secs(2)).await;
    assert!(cache.get("telegram:hi").is_none());
}

#[tokio::test(start_paused = true)]
async fn test_response_cache_sweeps_when_over_threshold() {
    let config = ResponseCacheConfigBuilder::default()
        .ttl_secs(10)
        .sweep_threshold(2_usize)
        .build()
        .unwrap();
    let mut cache = ResponseCache::new(config);
    cache.insert("telegram:a", Reply::from("a"));
    cache.insert("telegram:b", Reply::from("b"));

    advance(Duration::from_secs(11)).await;
    cache.insert("telegram:c", Reply::from("c"));

    assert_eq!(cache.len(), 1);
    assert!(cache.get("telegram:c").is_some());
}
