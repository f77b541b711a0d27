//! Value types exchanged with collaborators.

use serde_json::Value as JsonValue;

/// Header name/value pairs for an outgoing request.
pub type RequestHeaders = Vec<(String, String)>;

/// Response from the HTTP collaborator.
///
/// # Examples
///
/// ```
/// use relaybot_interface::HttpResponse;
/// use serde_json::json;
///
/// let ok = HttpResponse::new(200, json!({"full_name": "octo/repo"}));
/// assert!(ok.is_success());
///
/// let denied = HttpResponse::new(403, json!({}));
/// assert!(!denied.is_success());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    /// HTTP status code
    status: u16,
    /// Decoded JSON body (`Null` when the body was empty)
    body: JsonValue,
}

impl HttpResponse {
    /// Create a response.
    pub fn new(status: u16, body: JsonValue) -> Self {
        Self { status, body }
    }

    /// HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Decoded body.
    pub fn body(&self) -> &JsonValue {
        &self.body
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Take ownership of the body.
    pub fn into_body(self) -> JsonValue {
        self.body
    }
}
