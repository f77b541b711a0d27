//! Messenger quick-reply payloads and keyword replies.

use crate::PageDirectory;
use derive_getters::Getters;
use relaybot_core::{QuickReply, Reply};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Quick-reply payload tokens offered by the help menu.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum MessengerPayload {
    /// Website link
    Site,
    /// Portfolio link
    Portfolio,
    /// Contact address
    Email,
    /// Short bio
    About,
}

impl MessengerPayload {
    /// Button label for the help menu.
    pub fn title(self) -> &'static str {
        match self {
            MessengerPayload::Site => "Site",
            MessengerPayload::Portfolio => "Portfolio",
            MessengerPayload::Email => "Email",
            MessengerPayload::About => "About",
        }
    }
}

/// Texts used by the Messenger keyword matcher (`[messenger]` section).
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_setters::Setters,
)]
#[setters(prefix = "with_", into)]
pub struct MessengerTexts {
    /// Reply for `SITE` and "site"/"website"
    #[serde(default = "default_site")]
    site: String,
    /// Reply for `PORTFOLIO` and "portfolio"/"projects"
    #[serde(default = "default_portfolio")]
    portfolio: String,
    /// Reply for `EMAIL` and "email"/"contact"
    #[serde(default = "default_email")]
    email: String,
    /// Reply for `ABOUT` and "about"
    #[serde(default = "default_about")]
    about: String,
    /// Text above the help menu options
    #[serde(default = "default_help_prompt")]
    help_prompt: String,
}

fn default_site() -> String {
    "🌐 Visit my site: https://example.com".to_string()
}

fn default_portfolio() -> String {
    "🧑‍💻 Check out my GitHub: https://github.com/octocat".to_string()
}

fn default_email() -> String {
    "📧 Contact me at: hello@example.com".to_string()
}

fn default_about() -> String {
    "I’m a dev and creative technologist. I build things across web, infra, and content."
        .to_string()
}

fn default_help_prompt() -> String {
    "Here’s what I can help you with:".to_string()
}

impl Default for MessengerTexts {
    fn default() -> Self {
        Self {
            site: default_site(),
            portfolio: default_portfolio(),
            email: default_email(),
            about: default_about(),
            help_prompt: default_help_prompt(),
        }
    }
}

impl MessengerTexts {
    /// Text answering `payload`.
    pub fn for_payload(&self, payload: MessengerPayload) -> &str {
        match payload {
            MessengerPayload::Site => &self.site,
            MessengerPayload::Portfolio => &self.portfolio,
            MessengerPayload::Email => &self.email,
            MessengerPayload::About => &self.about,
        }
    }
}

/// Keyword and payload matcher for the Messenger channel.
///
/// # Examples
///
/// ```
/// use relaybot_replies::{MessengerReplies, MessengerTexts, PageDirectory};
///
/// let replies = MessengerReplies::new(MessengerTexts::default(), PageDirectory::default());
///
/// let menu = replies.keyword_reply("help me", None).unwrap();
/// assert_eq!(menu.options().len(), 4);
///
/// assert!(replies.quick_reply_payload("SITE").is_some());
/// assert!(replies.quick_reply_payload("site").is_none());
/// ```
#[derive(Debug, Clone, Default, Getters)]
pub struct MessengerReplies {
    texts: MessengerTexts,
    pages: PageDirectory,
}

impl MessengerReplies {
    /// Create a matcher from configured texts and pages.
    pub fn new(texts: MessengerTexts, pages: PageDirectory) -> Self {
        Self { texts, pages }
    }

    /// Reply for an exact quick-reply payload token.
    pub fn quick_reply_payload(&self, payload: &str) -> Option<Reply> {
        let payload = MessengerPayload::from_str(payload).ok()?;
        tracing::debug!(%payload, "Quick reply payload matched");
        Some(Reply::from(self.texts.for_payload(payload)))
    }

    /// Reply for keywords contained anywhere in `text`.
    ///
    /// Shared keywords win over page overrides.
    pub fn keyword_reply(&self, text: &str, page_id: Option<&str>) -> Option<Reply> {
        let lower = text.to_lowercase();

        let payload = if lower.contains("site") || lower.contains("website") {
            Some(MessengerPayload::Site)
        } else if lower.contains("portfolio") || lower.contains("projects") {
            Some(MessengerPayload::Portfolio)
        } else if lower.contains("email") || lower.contains("contact") {
            Some(MessengerPayload::Email)
        } else if lower.contains("about") {
            Some(MessengerPayload::About)
        } else {
            None
        };

        if let Some(payload) = payload {
            tracing::debug!(%payload, "Messenger keyword matched");
            return Some(Reply::from(self.texts.for_payload(payload)));
        }

        if lower.contains("help") {
            return Some(self.help_menu());
        }

        let profile = page_id.and_then(|id| self.pages.profile_for(id))?;
        let text = profile.override_for(&lower)?;
        tracing::debug!(%profile, "Page override matched");
        Some(Reply::from(text))
    }

    /// Structured reply listing every payload option.
    pub fn help_menu(&self) -> Reply {
        use strum::IntoEnumIterator;

        let options = MessengerPayload::iter()
            .map(|payload| QuickReply::text(payload.title(), payload.to_string()))
            .collect();
        Reply::with_options(self.texts.help_prompt.clone(), options)
    }
}
