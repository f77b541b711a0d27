//! Language model error types.

/// Result type for language model calls.
pub type ModelResult<T> = Result<T, ModelError>;

/// Language model failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ModelErrorKind {
    /// The account ran out of quota; callers surface a usage-limit reply.
    #[display("Quota exceeded: {}", _0)]
    QuotaExceeded(String),
    /// Provider answered with an error status.
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Error body or message
        message: String,
    },
    /// Request could not be sent or timed out.
    #[display("Request failed: {}", _0)]
    Http(String),
    /// Response could not be parsed.
    #[display("Failed to parse response: {}", _0)]
    Parse(String),
    /// Client is missing required configuration.
    #[display("Configuration error: {}", _0)]
    Configuration(String),
}

impl ModelErrorKind {
    /// Whether retrying the same request could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ModelErrorKind::Api { status, .. } => {
                matches!(*status, 408 | 429 | 500 | 502 | 503 | 504)
            }
            ModelErrorKind::Http(_) => true,
            _ => false,
        }
    }
}

/// Language model error with source location tracking.
///
/// # Examples
///
/// ```
/// use relaybot_error::{ModelError, ModelErrorKind};
///
/// let err = ModelError::new(ModelErrorKind::QuotaExceeded("insufficient_quota".into()));
/// assert!(err.is_quota());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Model Error: {} at line {} in {}", kind, line, file)]
pub struct ModelError {
    /// The kind of error that occurred
    pub kind: ModelErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ModelError {
    /// Create a new ModelError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ModelErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// True for the distinguished quota condition.
    pub fn is_quota(&self) -> bool {
        matches!(self.kind, ModelErrorKind::QuotaExceeded(_))
    }
}
