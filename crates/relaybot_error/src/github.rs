//! GitHub query error types.

use crate::HttpError;

/// GitHub query failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GithubErrorKind {
    /// GitHub answered with a non-success status.
    #[display("GitHub returned status {}", _0)]
    Status(u16),
    /// The request never produced a response.
    #[display("GitHub request failed: {}", _0)]
    Request(String),
    /// No usable token was configured.
    #[display("GitHub token is missing or blank")]
    MissingToken,
    /// Response body did not have the expected shape.
    #[display("Unexpected GitHub payload: {}", _0)]
    Payload(String),
}

/// GitHub error with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("GitHub Error: {} at line {} in {}", kind, line, file)]
pub struct GithubError {
    /// The error kind
    pub kind: GithubErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl GithubError {
    /// Create a new GithubError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GithubErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl From<HttpError> for GithubError {
    #[track_caller]
    fn from(err: HttpError) -> Self {
        match err.status() {
            Some(status) => GithubError::new(GithubErrorKind::Status(status)),
            None => GithubError::new(GithubErrorKind::Request(err.kind.to_string())),
        }
    }
}
