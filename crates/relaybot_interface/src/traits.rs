//! Collaborator traits.

use crate::{HttpResponse, RequestHeaders};
use async_trait::async_trait;
use relaybot_core::Reply;
use relaybot_error::{HttpResult, ModelResult, RelayResult};

/// Issues authenticated GET requests and decodes JSON bodies.
///
/// Implementations enforce their own per-call timeout. A non-2xx answer may
/// be reported either as an [`HttpResponse`] with that status or as an
/// `HttpErrorKind::Status` error; callers must handle both.
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    /// GET `url` with the given headers.
    async fn get_json(&self, url: &str, headers: &RequestHeaders) -> HttpResult<HttpResponse>;
}

/// Produces a free-form answer when no rule matched.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Answer `text`.
    ///
    /// `Ok(None)` means the model had nothing to say (or is disabled).
    /// Quota exhaustion is reported as `ModelErrorKind::QuotaExceeded` so the
    /// caller can tell it apart from ordinary failures.
    async fn respond(&self, text: &str) -> ModelResult<Option<String>>;

    /// Provider name for logs.
    fn provider_name(&self) -> &str;
}

/// Delivers a reply through a channel's send API.
#[async_trait]
pub trait ReplySender: Send + Sync {
    /// Send `reply` to `recipient_id`.
    async fn send(&self, recipient_id: &str, reply: &Reply) -> RelayResult<()>;
}
