//! Chat channels the relay serves.

use serde::{Deserialize, Serialize};

/// Channel a message arrived on.
///
/// The string form is used in response cache keys (`telegram:hello`).
///
/// # Examples
///
/// ```
/// use relaybot_core::Channel;
/// use std::str::FromStr;
///
/// assert_eq!(Channel::Telegram.to_string(), "telegram");
/// assert_eq!(Channel::from_str("messenger").unwrap(), Channel::Messenger);
/// assert!(Channel::Telegram.accepts_commands());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Channel {
    /// Telegram bot updates
    Telegram,
    /// Facebook Messenger page events
    Messenger,
    /// Local console, used by the CLI
    Console,
}

impl Channel {
    /// Whether slash commands (`/gh`, `/help`) are honoured on this channel.
    pub fn accepts_commands(self) -> bool {
        matches!(self, Channel::Telegram)
    }

    /// Whether the Messenger keyword and quick-reply tables apply.
    pub fn uses_keyword_replies(self) -> bool {
        matches!(self, Channel::Messenger)
    }
}
