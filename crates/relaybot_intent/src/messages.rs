//! Fixed user-facing texts.

/// Reply to empty or whitespace-only input.
pub const INVALID_MESSAGE: &str = "Please send a valid message.";

/// Reply to admin commands from anyone but the admin.
pub const REFUSAL_MESSAGE: &str = "🚫 You are not authorized to use GitHub commands.";

/// Reply when the language model reports exhausted quota.
pub const QUOTA_MESSAGE: &str =
    "I'm currently unable to respond due to usage limits. Please try again later.";

/// Reply when the pipeline fails.
pub const APOLOGY_MESSAGE: &str = "Sorry, something went wrong. Please try again later.";

/// Fallbacks when nothing else answered; one is picked at random.
pub const DEFAULT_REPLIES: &[&str] = &[
    "I'm not sure how to respond to that yet, but I'm learning! 🤖",
    "I'm still learning. Could you try rephrasing that? 🤖",
    "That one's new to me. I'm still learning! 📚",
    "Hmm, I don't have an answer for that yet, but I'm getting smarter every day! 🌱",
];
