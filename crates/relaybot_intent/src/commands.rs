//! Telegram admin commands.

use relaybot_core::Channel;
use relaybot_error::{CommandError, CommandErrorKind};
use relaybot_github::GithubCommandExecutor;
use relaybot_security::AdminGate;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::REFUSAL_MESSAGE;

/// Answer to `/help`.
pub const HELP_TEXT: &str = "🤖 Admin commands:\n\
/gh - GitHub repository, workflow, issue, PR, discussion and audit summaries\n\
/help - show this message\n\n\
Run /gh on its own for the full list of forms.";

/// Handles slash commands from the command-capable channel.
///
/// Every command, `/help` included, is gated on the admin identity.
#[derive(Debug, Clone, Default)]
pub struct CommandHandler {
    gate: AdminGate,
    github: Option<Arc<GithubCommandExecutor>>,
}

impl CommandHandler {
    /// Create a handler. `github` is `None` when no token is configured.
    pub fn new(gate: AdminGate, github: Option<Arc<GithubCommandExecutor>>) -> Self {
        Self { gate, github }
    }

    /// The GitHub executor, if configured.
    pub fn github(&self) -> Option<&Arc<GithubCommandExecutor>> {
        self.github.as_ref()
    }

    /// Whether `text` is a command invocation on `channel`.
    pub fn is_command(channel: Channel, text: &str) -> bool {
        channel.accepts_commands() && text.starts_with('/')
    }

    /// Run the command in `text`.
    ///
    /// Returns `Ok(None)` for unknown commands so the caller can keep
    /// resolving the text as a normal message.
    ///
    /// # Errors
    ///
    /// Returns [`CommandErrorKind::Unavailable`] when `/gh` is used without
    /// a configured GitHub executor.
    #[instrument(skip(self, text), fields(channel = %channel))]
    pub async fn handle(
        &self,
        channel: Channel,
        sender_id: &str,
        text: &str,
    ) -> Result<Option<String>, CommandError> {
        let mut words = text.split_whitespace();
        let Some(first) = words.next() else {
            return Ok(None);
        };
        // Telegram appends the bot name in groups: `/gh@relay_bot`.
        let command = first.split('@').next().unwrap_or(first);

        if !self.gate.check(channel, sender_id).is_allowed() {
            info!(command, "Refusing admin command");
            return Ok(Some(REFUSAL_MESSAGE.to_string()));
        }

        match command {
            "/gh" => {
                let github = self.github.as_ref().ok_or_else(|| {
                    CommandError::new(CommandErrorKind::Unavailable {
                        command: "/gh".to_string(),
                        reason: "no GitHub token configured".to_string(),
                    })
                })?;
                let args: Vec<&str> = words.collect();
                Ok(Some(github.dispatch(&args).await))
            }
            "/help" => Ok(Some(HELP_TEXT.to_string())),
            other => {
                debug!(command = other, "Unknown command, continuing as text");
                Ok(None)
            }
        }
    }
}
