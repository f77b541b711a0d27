//! HTTP collaborator error types.

/// Result type for HTTP collaborator calls.
pub type HttpResult<T> = Result<T, HttpError>;

/// Specific HTTP failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum HttpErrorKind {
    /// Server answered with a non-success status.
    #[display("HTTP status {}", _0)]
    Status(u16),
    /// Request did not complete within the per-call timeout.
    #[display("Request timed out: {}", _0)]
    Timeout(String),
    /// Connection or transport level failure.
    #[display("Transport failure: {}", _0)]
    Transport(String),
    /// Body could not be decoded as JSON.
    #[display("Failed to decode response body: {}", _0)]
    Decode(String),
}

/// HTTP error with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: {} at line {} in {}", kind, line, file)]
pub struct HttpError {
    /// The error kind
    pub kind: HttpErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Create a new HttpError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use relaybot_error::{HttpError, HttpErrorKind};
    ///
    /// let err = HttpError::new(HttpErrorKind::Status(404));
    /// assert_eq!(err.status(), Some(404));
    /// ```
    #[track_caller]
    pub fn new(kind: HttpErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Status code carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self.kind {
            HttpErrorKind::Status(status) => Some(status),
            _ => None,
        }
    }
}
