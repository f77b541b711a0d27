//! Admin command error types.

/// Admin command failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CommandErrorKind {
    /// A command needs a collaborator that was not configured.
    #[display("Command '{}' is unavailable: {}", command, reason)]
    Unavailable {
        /// Command name
        command: String,
        /// Why it cannot run
        reason: String,
    },
    /// Reply delivery failed.
    #[display("Failed to deliver reply to {}: {}", recipient, reason)]
    Delivery {
        /// Recipient identifier
        recipient: String,
        /// Underlying failure
        reason: String,
    },
}

/// Command error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Command Error: {} at line {} in {}", kind, line, file)]
pub struct CommandError {
    /// The error kind
    pub kind: CommandErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl CommandError {
    /// Create a new CommandError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CommandErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
