//! Greeting, help, farewell and thanks replies.

use regex::Regex;
use relaybot_core::{Channel, Reply};
use std::sync::LazyLock;

const COMMAND_HINT: &str =
    " Try typing `/gh <repo>` to check GitHub status or `/gh audit` for org logs.";

static GREETING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(hi|hello)\b").expect("Valid greeting regex"));
static HELP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(help|support)\b").expect("Valid help regex"));
static FAREWELL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(bye|goodbye|see ya)\b").expect("Valid farewell regex")
});
static THANKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(thanks|thank you)\b").expect("Valid thanks regex"));

/// Intents recognised by the standard matcher, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum StandardIntent {
    /// "hi", "hello"
    Greeting,
    /// "help", "support"
    Help,
    /// "bye", "goodbye", "see ya"
    Farewell,
    /// "thanks", "thank you"
    Thanks,
}

impl StandardIntent {
    /// First intent whose pattern matches `message` as a whole word.
    pub fn classify(message: &str) -> Option<Self> {
        let message = message.trim();
        [
            (StandardIntent::Greeting, &GREETING),
            (StandardIntent::Help, &HELP),
            (StandardIntent::Farewell, &FAREWELL),
            (StandardIntent::Thanks, &THANKS),
        ]
        .into_iter()
        .find(|(_, pattern)| pattern.is_match(message))
        .map(|(intent, _)| intent)
    }

    /// Reply text for this intent on `channel`.
    pub fn reply_text(self, channel: Channel) -> String {
        match self {
            StandardIntent::Greeting => "Hey there! 👋 How can I help you today?".to_string(),
            StandardIntent::Help => {
                let mut text =
                    "I can help answer questions, offer basic replies, or just chat.".to_string();
                if channel.accepts_commands() {
                    text.push_str(COMMAND_HINT);
                }
                text
            }
            StandardIntent::Farewell => "Goodbye! 👋 Come back anytime.".to_string(),
            StandardIntent::Thanks => "You’re welcome! 😊".to_string(),
        }
    }
}

/// Canned reply for common conversational openers and closers.
///
/// # Examples
///
/// ```
/// use relaybot_core::Channel;
/// use relaybot_replies::standard_reply;
///
/// let reply = standard_reply("Hello!", Channel::Messenger).unwrap();
/// assert_eq!(reply.text(), "Hey there! 👋 How can I help you today?");
///
/// assert!(standard_reply("this", Channel::Telegram).is_none());
/// ```
pub fn standard_reply(message: &str, channel: Channel) -> Option<Reply> {
    let intent = StandardIntent::classify(message)?;
    tracing::debug!(%intent, %channel, "Standard reply matched");
    Some(Reply::Text(intent.reply_text(channel)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_boundaries_are_respected() {
        assert_eq!(StandardIntent::classify("this"), None);
        assert_eq!(StandardIntent::classify("shipping"), None);
        assert_eq!(StandardIntent::classify("byebye"), None);
    }

    #[test]
    fn test_earlier_intent_wins() {
        assert_eq!(
            StandardIntent::classify("hi, thanks for the help"),
            Some(StandardIntent::Greeting)
        );
        assert_eq!(
            StandardIntent::classify("thanks for the support"),
            Some(StandardIntent::Help)
        );
    }

    #[test]
    fn test_matching_ignores_case() {
        assert_eq!(StandardIntent::classify("SEE YA"), Some(StandardIntent::Farewell));
        assert_eq!(StandardIntent::classify("Thank You"), Some(StandardIntent::Thanks));
    }
}
