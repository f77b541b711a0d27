//! reqwest-backed [`HttpFetcher`].

use async_trait::async_trait;
use relaybot_error::{HttpError, HttpErrorKind, HttpResult};
use relaybot_interface::{HttpFetcher, HttpResponse, RequestHeaders};
use serde_json::Value as JsonValue;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// HTTP fetcher with a per-request timeout.
///
/// Non-2xx answers are returned as responses, not errors.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    /// Build a fetcher whose requests time out after `timeout`.
    #[instrument(fields(timeout_secs = timeout.as_secs()))]
    pub fn new(timeout: Duration) -> HttpResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                error!("Failed to build HTTP client: {}", e);
                HttpError::new(HttpErrorKind::Transport(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;
        debug!("Created HTTP fetcher");
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    #[instrument(skip(self, headers), fields(header_count = headers.len()))]
    async fn get_json(&self, url: &str, headers: &RequestHeaders) -> HttpResult<HttpResponse> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await.map_err(|e| {
            error!("Request failed: {}", e);
            if e.is_timeout() {
                HttpError::new(HttpErrorKind::Timeout(e.to_string()))
            } else {
                HttpError::new(HttpErrorKind::Transport(e.to_string()))
            }
        })?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| {
            error!("Failed to read response body: {}", e);
            HttpError::new(HttpErrorKind::Transport(format!(
                "Failed to read response body: {}",
                e
            )))
        })?;

        let body = if text.trim().is_empty() {
            JsonValue::Null
        } else {
            match serde_json::from_str(&text) {
                Ok(body) => body,
                // Error pages are not always JSON; the status still matters.
                Err(_) if !(200..300).contains(&status) => JsonValue::Null,
                Err(e) => {
                    error!("Failed to parse response: {}", e);
                    return Err(HttpError::new(HttpErrorKind::Decode(e.to_string())));
                }
            }
        };

        debug!(status, "Received response");
        Ok(HttpResponse::new(status, body))
    }
}
