//! `/gh` command execution.

use crate::{
    AuditEvent, CommandInvocation, Discussion, GhCommand, GithubConfig, Issue, PullRequest,
    Repository, USAGE, WorkflowRuns, format,
};
use parking_lot::Mutex;
use relaybot_cache::{EndpointCache, EndpointCategory};
use relaybot_error::{GithubError, GithubErrorKind};
use relaybot_interface::{HttpFetcher, RequestHeaders};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

const EXTENDED_ACCEPT: &str = "application/vnd.github.v3+json";

/// Entries shown by the list summaries.
const SHOWN: usize = 3;

/// Result of rendering a GitHub payload.
enum Summary {
    /// Formatted data, cached under the query key
    Found(String),
    /// "Nothing found" notice, returned but never cached
    Empty(String),
}

/// One cacheable GitHub query.
struct Query<'a> {
    category: EndpointCategory,
    key: String,
    path: String,
    extended: bool,
    failure: &'a str,
    denied: Option<String>,
}

/// Runs `/gh` commands against the GitHub REST API.
///
/// Every request carries the configured token as a bearer token, so an
/// executor cannot be built without one.
///
/// Summaries are cached per endpoint category. The cache lock is never held
/// across a request, so concurrent identical misses may both fetch.
pub struct GithubCommandExecutor {
    config: GithubConfig,
    token: String,
    fetcher: Arc<dyn HttpFetcher>,
    cache: Mutex<EndpointCache>,
}

impl std::fmt::Debug for GithubCommandExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubCommandExecutor")
            .field("api_base", self.config.api_base())
            .field("cached", &self.cache.lock().len())
            .finish()
    }
}

impl GithubCommandExecutor {
    /// Create an executor with its own endpoint cache.
    ///
    /// # Errors
    ///
    /// Returns `GithubErrorKind::MissingToken` if the config has no usable
    /// token.
    pub fn new(config: GithubConfig, fetcher: Arc<dyn HttpFetcher>) -> Result<Self, GithubError> {
        Self::with_cache(config, fetcher, EndpointCache::default())
    }

    /// Create an executor around an existing endpoint cache.
    ///
    /// # Errors
    ///
    /// Returns `GithubErrorKind::MissingToken` if the config has no usable
    /// token.
    pub fn with_cache(
        config: GithubConfig,
        fetcher: Arc<dyn HttpFetcher>,
        cache: EndpointCache,
    ) -> Result<Self, GithubError> {
        let token = config
            .usable_token()
            .ok_or_else(|| GithubError::new(GithubErrorKind::MissingToken))?
            .to_string();

        debug!(api_base = %config.api_base(), "Creating GitHub command executor");
        Ok(Self {
            config,
            token,
            fetcher,
            cache: Mutex::new(cache),
        })
    }

    /// Executor configuration.
    pub fn config(&self) -> &GithubConfig {
        &self.config
    }

    /// Number of cached summaries.
    pub fn cache_len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Cached summary keys.
    pub fn cache_keys(&self) -> Vec<String> {
        self.cache.lock().keys()
    }

    /// Drop every cached summary.
    pub fn clear_cache(&self) {
        self.cache.lock().clear()
    }

    /// Run the words following `/gh`.
    ///
    /// Never fails: errors come back as user-facing text.
    pub async fn dispatch(&self, args: &[&str]) -> String {
        self.execute(CommandInvocation::from_args(args)).await
    }

    /// Run a parsed invocation.
    #[instrument(skip(self, invocation), fields(subcommand = ?invocation.subcommand))]
    pub async fn execute(&self, invocation: CommandInvocation) -> String {
        let command = GhCommand::resolve(invocation, self.config.default_org());
        info!(?command, "Running GitHub command");

        match command {
            GhCommand::Usage => USAGE.to_string(),
            GhCommand::MissingParameter(sub) => sub.usage_hint(),
            GhCommand::Repo(repo) => self.repository(&repo).await,
            GhCommand::Audit(org) => self.audit_log(&org).await,
            GhCommand::Discussions(repo) => self.discussions(&repo).await,
            GhCommand::Runs(repo) => self.workflow_runs(&repo).await,
            GhCommand::Issues(repo) => self.issues(&repo).await,
            GhCommand::Prs(repo) => self.pull_requests(&repo).await,
            GhCommand::WorkflowRun { repo, filter } => {
                self.workflow_run(&repo, filter.as_deref()).await
            }
        }
    }

    async fn repository(&self, repo: &str) -> String {
        let query = Query {
            category: EndpointCategory::Repo,
            key: EndpointCache::generate_key("repo", &[repo]),
            path: format!("/repos/{}", repo),
            extended: false,
            failure: "❌ Failed to fetch repository info.",
            denied: None,
        };
        self.cached(query, |body| {
            let data: Repository = decode(body)?;
            Ok(Summary::Found(format::repository(&data)))
        })
        .await
    }

    async fn audit_log(&self, org: &str) -> String {
        let query = Query {
            category: EndpointCategory::Audit,
            key: EndpointCache::generate_key("audit", &[org]),
            path: format!("/orgs/{}/audit-log?per_page=5", org),
            extended: true,
            failure: "❌ Failed to fetch audit logs.",
            denied: Some(format!(
                "🚫 Access denied. \"{}\" is not accessible or not Enterprise.",
                org
            )),
        };
        self.cached(query, |body| {
            let events: Vec<AuditEvent> = decode(body)?;
            if events.is_empty() {
                return Ok(Summary::Empty(format!("No audit logs found for {}.", org)));
            }
            let shown = &events[..events.len().min(SHOWN)];
            Ok(Summary::Found(format::audit_log(org, shown)))
        })
        .await
    }

    async fn discussions(&self, repo: &str) -> String {
        let query = Query {
            category: EndpointCategory::Discussions,
            key: EndpointCache::generate_key("discussions", &[repo]),
            path: format!("/repos/{}/discussions?per_page=3", repo),
            extended: true,
            failure: "❌ Failed to fetch discussions.",
            denied: None,
        };
        self.cached(query, |body| {
            let data: Vec<Discussion> = decode(body)?;
            if data.is_empty() {
                return Ok(Summary::Empty(format!("No discussions found for {}.", repo)));
            }
            let shown = &data[..data.len().min(SHOWN)];
            Ok(Summary::Found(format::discussions(repo, shown)))
        })
        .await
    }

    async fn workflow_run(&self, repo: &str, filter: Option<&str>) -> String {
        let key = match filter {
            Some(name) => EndpointCache::generate_key("runs", &[repo, "filter", name]),
            None => EndpointCache::generate_key("runs", &[repo, "latest"]),
        };
        let query = Query {
            category: EndpointCategory::Runs,
            key,
            path: format!("/repos/{}/actions/runs?per_page=5", repo),
            extended: false,
            failure: "❌ Failed to fetch workflow run.",
            denied: None,
        };
        self.cached(query, |body| {
            let data: WorkflowRuns = decode(body)?;
            let run = match filter {
                Some(name) => {
                    let needle = name.to_lowercase();
                    data.workflow_runs()
                        .iter()
                        .find(|run| run.name().to_lowercase().contains(&needle))
                }
                None => data.workflow_runs().first(),
            };

            match run {
                Some(run) => Ok(Summary::Found(format::workflow_run(repo, run))),
                None => {
                    let note = filter
                        .map(|name| format!(" with filter \"{}\"", name))
                        .unwrap_or_default();
                    Ok(Summary::Empty(format!(
                        "No recent runs found for {}{}.",
                        repo, note
                    )))
                }
            }
        })
        .await
    }

    async fn workflow_runs(&self, repo: &str) -> String {
        let query = Query {
            category: EndpointCategory::Runs,
            key: EndpointCache::generate_key("runs", &[repo, "list"]),
            path: format!("/repos/{}/actions/runs?per_page=3", repo),
            extended: false,
            failure: "❌ Failed to fetch workflow runs.",
            denied: None,
        };
        self.cached(query, |body| {
            let data: WorkflowRuns = decode(body)?;
            if data.workflow_runs().is_empty() {
                return Ok(Summary::Empty(format!("No runs found for {}.", repo)));
            }
            let runs = data.workflow_runs();
            let shown = &runs[..runs.len().min(SHOWN)];
            Ok(Summary::Found(format::workflow_runs(repo, shown)))
        })
        .await
    }

    async fn issues(&self, repo: &str) -> String {
        let query = Query {
            category: EndpointCategory::Issues,
            key: EndpointCache::generate_key("issues", &[repo]),
            path: format!("/repos/{}/issues?per_page=3&state=open", repo),
            extended: false,
            failure: "❌ Failed to fetch issues.",
            denied: None,
        };
        self.cached(query, |body| {
            let data: Vec<Issue> = decode(body)?;
            let issues: Vec<&Issue> = data
                .iter()
                .filter(|i| !i.is_pull_request())
                .take(SHOWN)
                .collect();
            if issues.is_empty() {
                return Ok(Summary::Empty(format!("No open issues found for {}.", repo)));
            }
            Ok(Summary::Found(format::issues(repo, &issues)))
        })
        .await
    }

    async fn pull_requests(&self, repo: &str) -> String {
        let query = Query {
            category: EndpointCategory::Prs,
            key: EndpointCache::generate_key("prs", &[repo]),
            path: format!("/repos/{}/pulls?per_page=3&state=open", repo),
            extended: false,
            failure: "❌ Failed to fetch pull requests.",
            denied: None,
        };
        self.cached(query, |body| {
            let data: Vec<PullRequest> = decode(body)?;
            if data.is_empty() {
                return Ok(Summary::Empty(format!(
                    "No open pull requests found for {}.",
                    repo
                )));
            }
            let shown = &data[..data.len().min(SHOWN)];
            Ok(Summary::Found(format::pull_requests(repo, shown)))
        })
        .await
    }

    /// Serve `query` from cache, or fetch, render and cache it.
    #[instrument(skip_all, fields(category = %query.category, key = %query.key))]
    async fn cached<F>(&self, query: Query<'_>, render: F) -> String
    where
        F: FnOnce(JsonValue) -> Result<Summary, GithubError>,
    {
        let hit = self.cache.lock().get(&query.key);
        if let Some(hit) = hit {
            debug!("Serving GitHub summary from cache");
            return hit;
        }

        let outcome = match self.fetch(&query.path, query.extended).await {
            Ok(body) => render(body),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(Summary::Found(text)) => {
                self.cache
                    .lock()
                    .set_with_endpoint(&query.category.to_string(), query.key, text)
            }
            Ok(Summary::Empty(text)) => text,
            Err(e) => self.describe_failure(&query, e),
        }
    }

    fn describe_failure(&self, query: &Query<'_>, err: GithubError) -> String {
        match (&err.kind, &query.denied) {
            (GithubErrorKind::Status(403), Some(denied)) => {
                warn!("GitHub access denied");
                denied.clone()
            }
            (GithubErrorKind::Status(status), _) => {
                warn!(status, "GitHub returned an error status");
                format!("❌ GitHub error: {}", status)
            }
            _ => {
                error!(error = %err, "GitHub query failed");
                query.failure.to_string()
            }
        }
    }

    async fn fetch(&self, path: &str, extended: bool) -> Result<JsonValue, GithubError> {
        let url = format!("{}{}", self.config.api_base().trim_end_matches('/'), path);
        debug!(%url, "Fetching from GitHub");

        let response = self.fetcher.get_json(&url, &self.headers(extended)).await?;
        if !response.is_success() {
            return Err(GithubError::new(GithubErrorKind::Status(response.status())));
        }
        Ok(response.into_body())
    }

    fn headers(&self, extended: bool) -> RequestHeaders {
        let mut headers = vec![(
            "Authorization".to_string(),
            format!("Bearer {}", self.token),
        )];
        headers.push(("User-Agent".to_string(), self.config.user_agent().clone()));
        if extended {
            headers.push(("Accept".to_string(), EXTENDED_ACCEPT.to_string()));
        }
        headers
    }
}

fn decode<T: DeserializeOwned>(body: JsonValue) -> Result<T, GithubError> {
    serde_json::from_value(body)
        .map_err(|e| GithubError::new(GithubErrorKind::Payload(e.to_string())))
}
