//! Core data types for the relaybot chatbot relay.
//!
//! This crate provides the values that flow between channel adapters and the
//! intent pipeline: the channel a message arrived on, the already-validated
//! inbound event, and the [`Reply`] handed back for delivery.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod channel;
mod event;
mod reply;
mod sanitize;

pub use channel::Channel;
pub use event::{InboundEvent, IncomingMessage, IncomingMessageBuilder};
pub use reply::{QuickReply, Reply};
pub use sanitize::{MAX_MESSAGE_CHARS, sanitize_input, truncate_chars};
