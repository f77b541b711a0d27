//! GitHub status queries behind the `/gh` admin command.
//!
//! [`GithubCommandExecutor`] parses `/gh` arguments, serves summaries from an
//! [`EndpointCache`](relaybot_cache::EndpointCache) when fresh, and otherwise
//! issues one authenticated GET through an
//! [`HttpFetcher`](relaybot_interface::HttpFetcher). Every outcome, including
//! failures, is a user-facing string.
//!
//! [`ReqwestFetcher`] is the production fetcher.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod executor;
mod fetcher;
mod format;
mod invocation;
mod models;

pub use config::{GithubConfig, GithubConfigBuilder};
pub use executor::GithubCommandExecutor;
pub use fetcher::ReqwestFetcher;
pub use invocation::{CommandInvocation, GhCommand, GhSubcommand, USAGE};
pub use models::{
    AuditEvent, Discussion, DiscussionCategory, Issue, Owner, PullRequest, Repository,
    WorkflowRun, WorkflowRuns,
};
