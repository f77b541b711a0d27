//! Error types for the relaybot workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! The relay never surfaces these errors to a chat user. They travel through
//! the pipeline as values and are converted to canned replies at the
//! boundary, so they mostly end up in logs.
//!
//! # Examples
//!
//! ```
//! use relaybot_error::{ConfigError, RelayResult};
//!
//! fn load() -> RelayResult<String> {
//!     Err(ConfigError::new("missing [github] section"))?
//! }
//!
//! assert!(load().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod command;
mod config;
mod error;
mod github;
mod http;
mod model;

pub use command::{CommandError, CommandErrorKind};
pub use config::ConfigError;
pub use error::{RelayError, RelayErrorKind, RelayResult};
pub use github::{GithubError, GithubErrorKind};
pub use http::{HttpError, HttpErrorKind, HttpResult};
pub use model::{ModelError, ModelErrorKind, ModelResult};
