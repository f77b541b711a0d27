//! Summary templates.

use crate::{AuditEvent, Discussion, Issue, PullRequest, Repository, WorkflowRun};
use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;

const NOT_AVAILABLE: &str = "N/A";

fn short_date(at: &DateTime<Utc>) -> String {
    at.format("%-m/%-d/%Y").to_string()
}

fn plain(value: &JsonValue) -> String {
    match value {
        JsonValue::String(text) => text.clone(),
        JsonValue::Null => NOT_AVAILABLE.to_string(),
        other => other.to_string(),
    }
}

pub(crate) fn repository(repo: &Repository) -> String {
    let mut out = format!("📘 *{}*\n", repo.full_name());
    if let Some(description) = repo.description().as_deref().filter(|d| !d.is_empty()) {
        out.push_str(&format!("📝 {}\n", description));
    }
    out.push_str(&format!("👤 Owner: {}\n", repo.owner().login()));
    out.push_str(&format!("🔄 Default Branch: {}\n", repo.default_branch()));
    out.push_str(&format!(
        "⭐ Stars: {}   🍴 Forks: {}   🐛 Issues: {}\n",
        repo.stargazers_count(),
        repo.forks_count(),
        repo.open_issues_count()
    ));
    out.push_str(&format!(
        "🆕 Created: {}   🔄 Updated: {}\n",
        short_date(repo.created_at()),
        short_date(repo.updated_at())
    ));
    out.push_str(&format!("🔗 {}", repo.html_url()));
    out
}

pub(crate) fn audit_log(org: &str, events: &[AuditEvent]) -> String {
    let lines = events
        .iter()
        .map(|event| {
            let target = event
                .repo()
                .as_deref()
                .or(event.user().as_deref())
                .unwrap_or("n/a");
            format!(
                "• {} {} on {} at {}",
                event.actor().as_deref().unwrap_or(NOT_AVAILABLE),
                event.action().as_deref().unwrap_or(NOT_AVAILABLE),
                target,
                plain(event.created_at())
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("📜 Audit log for *{}*:\n{}", org, lines)
}

pub(crate) fn discussions(repo: &str, discussions: &[Discussion]) -> String {
    let entries = discussions
        .iter()
        .map(|d| {
            format!(
                "• *{}* (_{}_) by {}\n🔗 {}",
                d.title(),
                d.category().name(),
                d.user().login(),
                d.html_url()
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    format!("🗣️ Latest discussions on *{}*:\n\n{}", repo, entries)
}

pub(crate) fn workflow_run(repo: &str, run: &WorkflowRun) -> String {
    format!(
        "📦 *{}* on _{}_\nStatus: {}\nConclusion: {}\n⏱️ Triggered: {}\n🔗 {}",
        run.name(),
        repo,
        run.status().as_deref().unwrap_or(NOT_AVAILABLE),
        run.conclusion().as_deref().unwrap_or(NOT_AVAILABLE),
        run.run_started_at().as_deref().unwrap_or(NOT_AVAILABLE),
        run.html_url()
    )
}

pub(crate) fn workflow_runs(repo: &str, runs: &[WorkflowRun]) -> String {
    let entries = runs
        .iter()
        .map(|r| {
            format!(
                "• {} — {}/{}\n🔗 {}",
                r.name(),
                r.status().as_deref().unwrap_or(NOT_AVAILABLE),
                r.conclusion().as_deref().unwrap_or(NOT_AVAILABLE),
                r.html_url()
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    format!("📋 Recent workflow runs for *{}*:\n\n{}", repo, entries)
}

pub(crate) fn issues(repo: &str, issues: &[&Issue]) -> String {
    let entries = issues
        .iter()
        .map(|i| {
            format!(
                "• #{}: *{}* by {}\n🔗 {}",
                i.number(),
                i.title(),
                i.user().login(),
                i.html_url()
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    format!("🐛 Open issues on *{}*:\n\n{}", repo, entries)
}

pub(crate) fn pull_requests(repo: &str, prs: &[PullRequest]) -> String {
    let entries = prs
        .iter()
        .map(|pr| {
            format!(
                "• #{}: *{}* by {}\n🔗 {}",
                pr.number(),
                pr.title(),
                pr.user().login(),
                pr.html_url()
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    format!("📥 Open pull requests on *{}*:\n\n{}", repo, entries)
}
