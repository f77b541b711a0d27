//! Admin identity checks.

use derive_getters::Getters;
use relaybot_core::Channel;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// `[telegram]` configuration section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct AdminConfig {
    /// Telegram user id allowed to run commands
    #[serde(default)]
    admin_id: Option<String>,
}

impl AdminConfig {
    /// Config granting command access to `admin_id`.
    pub fn with_admin(admin_id: impl Into<String>) -> Self {
        Self {
            admin_id: Some(admin_id.into()),
        }
    }
}

/// Outcome of an admin check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminDecision {
    /// Sender is the configured admin
    Allowed,
    /// Sender is someone else, or no admin is configured
    Denied,
}

impl AdminDecision {
    /// True for [`AdminDecision::Allowed`].
    pub fn is_allowed(self) -> bool {
        matches!(self, AdminDecision::Allowed)
    }
}

/// Decides whether a sender may run admin commands.
///
/// # Examples
///
/// ```
/// use relaybot_core::Channel;
/// use relaybot_security::{AdminConfig, AdminGate};
///
/// let gate = AdminGate::new(AdminConfig::with_admin("42"));
/// assert!(gate.check(Channel::Telegram, "42").is_allowed());
/// assert!(!gate.check(Channel::Telegram, "7").is_allowed());
/// assert!(!gate.check(Channel::Messenger, "42").is_allowed());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdminGate {
    admin_id: Option<String>,
}

impl AdminGate {
    /// Create a gate from configuration. Blank ids disable the gate.
    pub fn new(config: AdminConfig) -> Self {
        let admin_id = config
            .admin_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());
        if admin_id.is_none() {
            debug!("No Telegram admin configured, admin commands are disabled");
        }
        Self { admin_id }
    }

    /// Whether an admin is configured at all.
    pub fn is_configured(&self) -> bool {
        self.admin_id.is_some()
    }

    /// Check `sender_id` on `channel`.
    ///
    /// Only senders on a command-capable channel whose id equals the
    /// configured admin id are allowed.
    #[instrument(skip(self), fields(channel = %channel))]
    pub fn check(&self, channel: Channel, sender_id: &str) -> AdminDecision {
        let allowed = channel.accepts_commands()
            && self
                .admin_id
                .as_deref()
                .is_some_and(|admin| admin == sender_id.trim());

        if allowed {
            debug!("Admin command permitted");
            AdminDecision::Allowed
        } else {
            debug!("Admin command denied");
            AdminDecision::Denied
        }
    }
}
