//! Replies handed back to channel adapters.

use serde::{Deserialize, Serialize};

/// One tappable option attached to a structured reply.
///
/// Serializes to the Messenger `quick_replies` element shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuickReply {
    /// Always `"text"` for the options the relay produces
    pub content_type: String,
    /// Label shown to the user
    pub title: String,
    /// Token sent back when the option is tapped
    pub payload: String,
}

impl QuickReply {
    /// Create a text quick reply.
    pub fn text(title: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            content_type: "text".to_string(),
            title: title.into(),
            payload: payload.into(),
        }
    }
}

/// The unit of output from the relay to a channel adapter.
///
/// # Examples
///
/// ```
/// use relaybot_core::{QuickReply, Reply};
///
/// let plain = Reply::from("Goodbye! 👋 Come back anytime.");
/// assert_eq!(plain.text(), "Goodbye! 👋 Come back anytime.");
///
/// let menu = Reply::with_options("Pick one", vec![QuickReply::text("Site", "SITE")]);
/// assert_eq!(menu.options().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reply {
    /// Plain text
    Text(String),
    /// Text plus a list of quick-reply options
    QuickReplies {
        /// Message text
        text: String,
        /// Options offered below the text
        quick_replies: Vec<QuickReply>,
    },
}

impl Reply {
    /// Build a structured reply.
    pub fn with_options(text: impl Into<String>, options: Vec<QuickReply>) -> Self {
        Reply::QuickReplies {
            text: text.into(),
            quick_replies: options,
        }
    }

    /// Text portion of the reply.
    pub fn text(&self) -> &str {
        match self {
            Reply::Text(text) => text,
            Reply::QuickReplies { text, .. } => text,
        }
    }

    /// Quick-reply options, empty for plain text.
    pub fn options(&self) -> &[QuickReply] {
        match self {
            Reply::Text(_) => &[],
            Reply::QuickReplies { quick_replies, .. } => quick_replies,
        }
    }
}

impl From<String> for Reply {
    fn from(text: String) -> Self {
        Reply::Text(text)
    }
}

impl From<&str> for Reply {
    fn from(text: &str) -> Self {
        Reply::Text(text.to_string())
    }
}

impl std::fmt::Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())?;
        for option in self.options() {
            write!(f, "\n  [{}] {}", option.payload, option.title)?;
        }
        Ok(())
    }
}
