//! JSON shapes of the GitHub REST responses the dispatcher reads.
//!
//! Only the fields used in summaries are modelled; everything else is ignored.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Account reference (`owner`, `user`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Owner {
    /// Login name
    login: String,
}

/// `GET /repos/{repo}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct Repository {
    /// `owner/name`
    full_name: String,
    /// Free-form description
    #[serde(default)]
    description: Option<String>,
    /// Owning account
    owner: Owner,
    /// Default branch name
    default_branch: String,
    /// Star count
    #[serde(default)]
    stargazers_count: u64,
    /// Fork count
    #[serde(default)]
    forks_count: u64,
    /// Open issue count (includes pull requests)
    #[serde(default)]
    open_issues_count: u64,
    /// Creation time
    created_at: DateTime<Utc>,
    /// Last update time
    updated_at: DateTime<Utc>,
    /// Web URL
    html_url: String,
}

/// One entry of `GET /orgs/{org}/audit-log`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct AuditEvent {
    /// Acting user
    #[serde(default)]
    actor: Option<String>,
    /// Action name, e.g. `repo.create`
    #[serde(default)]
    action: Option<String>,
    /// Affected repository
    #[serde(default)]
    repo: Option<String>,
    /// Affected user
    #[serde(default)]
    user: Option<String>,
    /// Event time, epoch milliseconds or a timestamp string
    #[serde(default)]
    created_at: JsonValue,
}

/// Discussion category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct DiscussionCategory {
    /// Category name
    name: String,
}

/// One entry of `GET /repos/{repo}/discussions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Discussion {
    /// Title
    title: String,
    /// Category
    category: DiscussionCategory,
    /// Author
    user: Owner,
    /// Web URL
    html_url: String,
}

/// `GET /repos/{repo}/actions/runs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct WorkflowRuns {
    /// Runs, newest first
    #[serde(default)]
    workflow_runs: Vec<WorkflowRun>,
}

/// One workflow run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct WorkflowRun {
    /// Workflow name
    #[serde(default)]
    name: String,
    /// `queued`, `in_progress`, `completed`, ...
    #[serde(default)]
    status: Option<String>,
    /// `success`, `failure`, ... once completed
    #[serde(default)]
    conclusion: Option<String>,
    /// Start time as reported by GitHub
    #[serde(default)]
    run_started_at: Option<String>,
    /// Web URL
    html_url: String,
}

/// One entry of `GET /repos/{repo}/issues`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct Issue {
    /// Issue number
    number: u64,
    /// Title
    title: String,
    /// Author
    user: Owner,
    /// Web URL
    html_url: String,
    /// Present when the entry is a pull request
    #[serde(default)]
    pull_request: Option<JsonValue>,
}

impl Issue {
    /// The issues endpoint also lists pull requests.
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

/// One entry of `GET /repos/{repo}/pulls`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct PullRequest {
    /// PR number
    number: u64,
    /// Title
    title: String,
    /// Author
    user: Owner,
    /// Web URL
    html_url: String,
}
