//! Canned reply matching.
//!
//! Two matchers run ahead of the language model:
//!
//! - [`standard_reply`] recognises greetings, help requests, farewells and
//!   thanks on every channel.
//! - [`MessengerReplies`] answers quick-reply payloads and Messenger keywords,
//!   including per-page overrides resolved through a [`PageDirectory`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod messenger;
mod pages;
mod standard;

pub use messenger::{MessengerPayload, MessengerReplies, MessengerTexts};
pub use pages::{PageDirectory, PageEntry, PageProfile};
pub use standard::{StandardIntent, standard_reply};
