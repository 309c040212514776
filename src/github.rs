//! GitHub integration
//!
//! This module handles:
//! - Reading the pull request out of the workflow event payload
//! - Posting the rendered report as a pull request comment

use crate::error::{CoverageError, Result};
use log::{debug, info};
use serde::Deserialize;
use std::path::Path;

const USER_AGENT: &str = "cov-comment/0.1.0 (https://github.com/imazen/cov-comment)";

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Event name for which changed files are computed and a comment is posted
pub const PULL_REQUEST_EVENT: &str = "pull_request";

/// The parts of the `pull_request` event payload we use
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PullRequestEvent {
    pub pull_request: PullRequest,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub base: CommitRef,
    pub head: CommitRef,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommitRef {
    pub sha: String,
}

/// Parse a workflow event payload
pub fn parse_event(text: &str) -> Result<PullRequestEvent> {
    serde_json::from_str(text).map_err(|e| CoverageError::json("pull request event payload", e))
}

/// Read and parse the workflow event payload at `path`
pub fn read_event(path: &Path) -> Result<PullRequestEvent> {
    let text = std::fs::read_to_string(path).map_err(|e| CoverageError::io(path, e))?;
    parse_event(&text)
}

/// `owner/repo`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub repo: String,
}

impl RepoSlug {
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
                Ok(RepoSlug { owner: owner.to_string(), repo: repo.to_string() })
            }
            _ => Err(CoverageError::Config(format!("repository must be `owner/repo`, got `{}`", s))),
        }
    }
}

impl std::fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Build the issue-comments endpoint for a pull request
pub fn comments_url(api_url: &str, repo: &RepoSlug, number: u64) -> String {
    format!("{}/repos/{}/{}/issues/{}/comments", api_url.trim_end_matches('/'), repo.owner, repo.repo, number)
}

/// Build the JSON body for a new comment
pub fn comment_payload(body: &str) -> String {
    serde_json::json!({ "body": body }).to_string()
}

/// Post `body` as a comment on pull request `number`
pub fn create_comment(api_url: &str, token: &str, repo: &RepoSlug, number: u64, body: &str) -> Result<()> {
    let url = comments_url(api_url, repo, number);
    debug!("posting {} byte comment to {}", body.len(), url);

    let resp = ureq::post(&url)
        .set("User-Agent", USER_AGENT)
        .set("Accept", "application/vnd.github+json")
        .set("Authorization", &format!("Bearer {}", token))
        .set("Content-Type", "application/json")
        .send_string(&comment_payload(body));

    match resp {
        Ok(resp) => {
            info!("posted coverage comment to {}#{} (HTTP {})", repo, number, resp.status());
            Ok(())
        }
        Err(ureq::Error::Status(code, resp)) => {
            let detail = resp.into_string().unwrap_or_default();
            Err(CoverageError::Comment(format!("HTTP {} from {}: {}", code, url, detail.trim())))
        }
        Err(e) => Err(CoverageError::Comment(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pull_request_event() {
        let payload = r#"{
            "action": "synchronize",
            "pull_request": {
                "number": 42,
                "title": "Add feature",
                "base": {"sha": "aaa111", "ref": "main"},
                "head": {"sha": "bbb222", "ref": "feature"}
            }
        }"#;
        let event = parse_event(payload).unwrap();
        assert_eq!(event.pull_request.number, 42);
        assert_eq!(event.pull_request.base.sha, "aaa111");
        assert_eq!(event.pull_request.head.sha, "bbb222");
    }

    #[test]
    fn test_parse_event_without_pull_request_fails() {
        assert!(parse_event(r#"{"ref": "refs/heads/main"}"#).is_err());
    }

    #[test]
    fn test_repo_slug() {
        let slug = RepoSlug::parse("imazen/cov-comment").unwrap();
        assert_eq!(slug.owner, "imazen");
        assert_eq!(slug.repo, "cov-comment");
        assert_eq!(slug.to_string(), "imazen/cov-comment");

        assert!(RepoSlug::parse("no-slash").is_err());
        assert!(RepoSlug::parse("/repo").is_err());
        assert!(RepoSlug::parse("a/b/c").is_err());
    }

    #[test]
    fn test_comments_url() {
        let slug = RepoSlug::parse("o/r").unwrap();
        assert_eq!(comments_url("https://api.github.com/", &slug, 7), "https://api.github.com/repos/o/r/issues/7/comments");
    }

    #[test]
    fn test_comment_payload_escapes_body() {
        let payload = comment_payload("line \"one\"\n<table>");
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(value["body"], "line \"one\"\n<table>");
    }
}
