//! Top-level error wrapper types.

use crate::{CommandError, ConfigError, GithubError, HttpError, ModelError};

/// Every error condition the relay can produce.
///
/// # Examples
///
/// ```
/// use relaybot_error::{HttpError, HttpErrorKind, RelayError};
///
/// let err: RelayError = HttpError::new(HttpErrorKind::Status(502)).into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum RelayErrorKind {
    /// HTTP collaborator error
    #[from(HttpError)]
    Http(HttpError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// GitHub query error
    #[from(GithubError)]
    Github(GithubError),
    /// Language model error
    #[from(ModelError)]
    Model(ModelError),
    /// Admin command error
    #[from(CommandError)]
    Command(CommandError),
}

/// Relay error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Relay Error: {}", _0)]
pub struct RelayError(Box<RelayErrorKind>);

impl RelayError {
    /// Create a new error from a kind.
    pub fn new(kind: RelayErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &RelayErrorKind {
        &self.0
    }
}

impl<T> From<T> for RelayError
where
    T: Into<RelayErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for relay operations.
pub type RelayResult<T> = std::result::Result<T, RelayError>;
