//! Per-page reply overrides for Messenger.

use relaybot_error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Reply personality assigned to a Messenger page.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PageProfile {
    /// Consulting studio page
    Studio,
    /// Small remote team page
    Collective,
}

impl PageProfile {
    /// Keyword overrides for this profile, checked in order.
    pub fn overrides(self) -> &'static [(&'static str, &'static str)] {
        match self {
            PageProfile::Studio => &[
                ("quote", "📘 Page A says: \"Inspiration comes from within.\""),
                ("services", "Page A offers consulting and creative dev services."),
            ],
            PageProfile::Collective => &[
                ("quote", "📗 Page B reflects: \"Code is poetry.\""),
                ("team", "Our team is small, creative, and remote-first!"),
            ],
        }
    }

    /// Override text for the first key contained in `lowercased`.
    pub fn override_for(self, lowercased: &str) -> Option<&'static str> {
        self.overrides()
            .iter()
            .find(|(key, _)| lowercased.contains(key))
            .map(|(_, text)| *text)
    }
}

/// One `[[messenger.pages]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    /// Messenger page id
    pub id: String,
    /// Profile answering on that page
    pub profile: PageProfile,
}

impl PageEntry {
    /// Create a page entry.
    pub fn new(id: impl Into<String>, profile: PageProfile) -> Self {
        Self {
            id: id.into(),
            profile,
        }
    }
}

/// Validated page id to profile table.
///
/// # Examples
///
/// ```
/// use relaybot_replies::{PageDirectory, PageEntry, PageProfile};
///
/// let pages = PageDirectory::from_entries(vec![
///     PageEntry::new("1001", PageProfile::Studio),
///     PageEntry::new("1002", PageProfile::Collective),
/// ])
/// .unwrap();
///
/// assert_eq!(pages.profile_for("1002"), Some(PageProfile::Collective));
/// assert_eq!(pages.profile_for("9999"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageDirectory {
    profiles: HashMap<String, PageProfile>,
}

impl PageDirectory {
    /// Build the table, rejecting blank ids and ids listed twice.
    pub fn from_entries(entries: impl IntoIterator<Item = PageEntry>) -> Result<Self, ConfigError> {
        let mut profiles = HashMap::new();
        for entry in entries {
            let id = entry.id.trim();
            if id.is_empty() {
                return Err(ConfigError::new(format!(
                    "Messenger page id for profile '{}' is empty",
                    entry.profile
                )));
            }
            if let Some(existing) = profiles.insert(id.to_string(), entry.profile) {
                return Err(ConfigError::new(format!(
                    "Messenger page '{}' is mapped twice ({} and {})",
                    id, existing, entry.profile
                )));
            }
        }

        tracing::debug!(pages = profiles.len(), "Built page directory");
        Ok(Self { profiles })
    }

    /// Profile configured for `page_id`.
    pub fn profile_for(&self, page_id: &str) -> Option<PageProfile> {
        self.profiles.get(page_id).copied()
    }

    /// Number of configured pages.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Check if no pages are configured.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let result = PageDirectory::from_entries(vec![
            PageEntry::new("42", PageProfile::Studio),
            PageEntry::new("42", PageProfile::Collective),
        ]);
        let err = result.unwrap_err();
        assert!(err.message.contains("mapped twice"));
    }

    #[test]
    fn test_blank_ids_are_rejected() {
        let result = PageDirectory::from_entries(vec![PageEntry::new("  ", PageProfile::Studio)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_override_order() {
        assert_eq!(
            PageProfile::Collective.override_for("quote about the team"),
            Some("📗 Page B reflects: \"Code is poetry.\"")
        );
        assert_eq!(PageProfile::Studio.override_for("team"), None);
    }
}
