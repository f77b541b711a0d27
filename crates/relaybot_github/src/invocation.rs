//! `/gh` argument parsing.

use std::str::FromStr;

/// Usage text shown for a bare `/gh`.
pub const USAGE: &str = "Usage:\n\
/gh <repo>\n\
/gh <repo> <workflow>\n\
/gh audit [org]\n\
/gh discuss <repo>\n\
/gh runs <repo>\n\
/gh issues <repo>\n\
/gh prs <repo>";

/// Named `/gh` subcommands.
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
#[strum(serialize_all = "lowercase")]
pub enum GhSubcommand {
    /// Repository summary
    Repo,
    /// Organization audit log
    Audit,
    /// Latest discussions
    Discuss,
    /// Latest workflow runs
    Runs,
    /// Open issues
    Issues,
    /// Open pull requests
    Prs,
}

impl GhSubcommand {
    /// Hint shown when a required parameter is missing.
    pub fn usage_hint(self) -> String {
        match self {
            GhSubcommand::Repo => "Usage: /gh repo <owner>/<repo>".to_string(),
            GhSubcommand::Audit => "Usage: /gh audit [org]".to_string(),
            other => format!("Usage: /gh {} <repo>", other),
        }
    }
}

/// Raw `/gh` arguments: the first two whitespace-separated words.
///
/// # Examples
///
/// ```
/// use relaybot_github::CommandInvocation;
///
/// let invocation = CommandInvocation::from_args(&["runs", "octo/repo"]);
/// assert_eq!(invocation.subcommand.as_deref(), Some("runs"));
/// assert_eq!(invocation.parameter.as_deref(), Some("octo/repo"));
///
/// assert!(CommandInvocation::from_args::<&str>(&[]).subcommand.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandInvocation {
    /// First argument
    pub subcommand: Option<String>,
    /// Second argument
    pub parameter: Option<String>,
}

impl CommandInvocation {
    /// Build from already-split arguments. Blank arguments count as missing.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        let mut words = args
            .iter()
            .map(|arg| arg.as_ref().trim())
            .filter(|arg| !arg.is_empty())
            .map(str::to_string);
        Self {
            subcommand: words.next(),
            parameter: words.next(),
        }
    }

    /// Split the text following `/gh`.
    pub fn parse(text: &str) -> Self {
        let words: Vec<&str> = text.split_whitespace().collect();
        Self::from_args(&words)
    }
}

/// A resolved `/gh` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GhCommand {
    /// No arguments: show usage
    Usage,
    /// A subcommand that needs a repository got none
    MissingParameter(GhSubcommand),
    /// `/gh repo <repo>`
    Repo(String),
    /// `/gh audit [org]`
    Audit(String),
    /// `/gh discuss <repo>`
    Discussions(String),
    /// `/gh runs <repo>`
    Runs(String),
    /// `/gh issues <repo>`
    Issues(String),
    /// `/gh prs <repo>`
    Prs(String),
    /// `/gh <repo> [workflow]`
    WorkflowRun {
        /// Repository
        repo: String,
        /// Case-insensitive workflow name filter
        filter: Option<String>,
    },
}

impl GhCommand {
    /// Resolve an invocation, filling the audit org from `default_org`.
    ///
    /// # Examples
    ///
    /// ```
    /// use relaybot_github::{CommandInvocation, GhCommand};
    ///
    /// let command = GhCommand::resolve(CommandInvocation::parse("octo/repo CI"), "octocat");
    /// assert_eq!(
    ///     command,
    ///     GhCommand::WorkflowRun { repo: "octo/repo".into(), filter: Some("CI".into()) }
    /// );
    ///
    /// let audit = GhCommand::resolve(CommandInvocation::parse("audit"), "octocat");
    /// assert_eq!(audit, GhCommand::Audit("octocat".into()));
    /// ```
    pub fn resolve(invocation: CommandInvocation, default_org: &str) -> Self {
        let CommandInvocation {
            subcommand,
            parameter,
        } = invocation;
        let Some(subcommand) = subcommand else {
            return GhCommand::Usage;
        };

        let Ok(named) = GhSubcommand::from_str(&subcommand) else {
            return GhCommand::WorkflowRun {
                repo: subcommand,
                filter: parameter,
            };
        };

        match (named, parameter) {
            (GhSubcommand::Audit, org) => {
                GhCommand::Audit(org.unwrap_or_else(|| default_org.to_string()))
            }
            (sub, None) => GhCommand::MissingParameter(sub),
            (GhSubcommand::Repo, Some(repo)) => GhCommand::Repo(repo),
            (GhSubcommand::Discuss, Some(repo)) => GhCommand::Discussions(repo),
            (GhSubcommand::Runs, Some(repo)) => GhCommand::Runs(repo),
            (GhSubcommand::Issues, Some(repo)) => GhCommand::Issues(repo),
            (GhSubcommand::Prs, Some(repo)) => GhCommand::Prs(repo),
        }
    }
}
