//! Inbound events as supplied by channel adapters.
//!
//! Adapters validate the webhook shape before constructing these; the relay
//! only sanitizes the text payload.

use crate::Channel;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A text message from a user.
///
/// # Examples
///
/// ```
/// use relaybot_core::{Channel, IncomingMessageBuilder};
///
/// let message = IncomingMessageBuilder::default()
///     .channel(Channel::Telegram)
///     .sender_id("42")
///     .text("hello")
///     .build()
///     .unwrap();
///
/// assert_eq!(message.sender_id(), "42");
/// assert!(message.page_id().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct IncomingMessage {
    /// Channel the message arrived on
    channel: Channel,
    /// Sender identifier (Telegram user id, Messenger PSID)
    sender_id: String,
    /// Where the reply goes (Telegram chat id); defaults to the sender
    #[builder(default, setter(into, strip_option))]
    recipient_id: Option<String>,
    /// Messenger page the event was addressed to
    #[builder(default, setter(into, strip_option))]
    page_id: Option<String>,
    /// Raw message text
    text: String,
}

impl IncomingMessage {
    /// Message without recipient or page context.
    pub fn new(channel: Channel, sender_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            channel,
            sender_id: sender_id.into(),
            recipient_id: None,
            page_id: None,
            text: text.into(),
        }
    }

    /// Identifier the reply should be delivered to.
    pub fn reply_to(&self) -> &str {
        self.recipient_id.as_deref().unwrap_or(&self.sender_id)
    }
}

/// Every event kind a channel adapter can hand to the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InboundEvent {
    /// Free text message
    Message(IncomingMessage),
    /// Messenger quick-reply tap
    QuickReply {
        /// Sender PSID
        sender_id: String,
        /// Tapped option token
        payload: String,
    },
    /// Messenger postback button
    Postback {
        /// Sender PSID
        sender_id: String,
        /// Postback payload
        payload: String,
    },
}

impl InboundEvent {
    /// Identifier of whoever triggered the event.
    pub fn sender_id(&self) -> &str {
        match self {
            InboundEvent::Message(message) => message.sender_id(),
            InboundEvent::QuickReply { sender_id, .. } => sender_id,
            InboundEvent::Postback { sender_id, .. } => sender_id,
        }
    }
}
