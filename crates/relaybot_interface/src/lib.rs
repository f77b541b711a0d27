//! Trait definitions for the collaborators the relay pipeline consumes.
//!
//! The pipeline never talks to the network directly. GitHub queries go
//! through an [`HttpFetcher`], the fallback answer comes from a
//! [`LanguageModel`], and finished replies leave through a [`ReplySender`].
//! Production implementations live in `relaybot_github` and
//! `relaybot_models`; tests substitute counting mocks.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{HttpFetcher, LanguageModel, ReplySender};
pub use types::{HttpResponse, RequestHeaders};
