//! The relay's message pipeline.
//!
//! [`IntentProcessor`] turns one inbound text into exactly one [`Reply`]:
//!
//! 1. sanitize, reject empty input
//! 2. serve a fresh cached reply
//! 3. Telegram admin commands through [`CommandHandler`]
//! 4. Messenger keywords, then the standard replies
//! 5. the language model
//! 6. a random "still learning" default
//!
//! Failures and panics anywhere in the pipeline become a fixed apology.
//! [`Relay`] routes inbound channel events through the processor and hands
//! the result to each channel's [`ReplySender`](relaybot_interface::ReplySender).
//!
//! [`Reply`]: relaybot_core::Reply

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod commands;
mod messages;
mod processor;
mod relay;

pub use commands::{CommandHandler, HELP_TEXT};
pub use messages::{
    APOLOGY_MESSAGE, DEFAULT_REPLIES, INVALID_MESSAGE, QUOTA_MESSAGE, REFUSAL_MESSAGE,
};
pub use processor::{IntentProcessor, IntentProcessorBuilder};
pub use relay::Relay;
