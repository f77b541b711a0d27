//! Time-bounded caches for the relay.
//!
//! - [`TtlCache`] is the generic key/value store with per-entry expiry.
//! - [`EndpointCache`] layers the GitHub per-category TTL table and key
//!   convention on top of it.
//! - [`ResponseCache`] remembers canned and model replies per channel and
//!   message text.
//!
//! Expiry is lazy: entries are checked on every read and swept on demand,
//! so there are no timers to cancel when a key is overwritten.

#![warn(missing_docs)]

mod endpoint;
mod response;
mod ttl;

pub use endpoint::{EndpointCache, EndpointCategory};
pub use response::{ResponseCache, ResponseCacheConfig, ResponseCacheConfigBuilder};
pub use ttl::{CacheEntry, Staleness, TtlCache, TtlCacheConfig, TtlCacheConfigBuilder};
