//! Configuration resolution module
//!
//! This module handles:
//! - Building a RunConfig from CLI arguments and the workflow environment
//! - Deciding whether this run has a pull request context
//! - Choosing where the changed-file list comes from
//!
//! Everything is resolved before any work starts, so the runner receives a
//! fully validated, immutable description of the run.

use crate::cli::CliArgs;
use crate::error::{CoverageError, Result};
use crate::github::{self, PULL_REQUEST_EVENT, PullRequestEvent, RepoSlug};
use log::{debug, warn};
use std::path::PathBuf;

/// Where the changed-file list for this run comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangedFilesSource {
    /// No pull request context: every file is reported, no changed-files subset
    NotApplicable,
    /// Supplied on the command line
    Explicit(Vec<String>),
    /// `git diff` between two commits
    GitDiff { base: String, head: String },
}

/// Pull request the comment is posted to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentTarget {
    pub repo: RepoSlug,
    pub number: u64,
    pub token: String,
    pub api_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub summary_path: PathBuf,
    pub template_path: PathBuf,
    pub base_path: String,
    pub repo_dir: PathBuf,
    pub changed_files: ChangedFilesSource,
    /// `Some` only with a token in a pull request context
    pub comment_target: Option<CommentTarget>,
    pub output_file: Option<PathBuf>,
    pub json: bool,
    pub dry_run: bool,
}

impl RunConfig {
    /// Whether a comment body has to be rendered at all
    pub fn renders_comment(&self) -> bool {
        self.comment_target.is_some() || self.dry_run
    }
}

/// Build a complete RunConfig from CLI arguments
pub fn build_run_config(args: &CliArgs) -> Result<RunConfig> {
    let token = args.github_token.as_deref().map(str::trim).filter(|t| !t.is_empty()).map(String::from);
    let is_pull_request = args.event_name.as_deref() == Some(PULL_REQUEST_EVENT);

    debug!("token present: {}, event: {:?}", token.is_some(), args.event_name);

    // Like the workflow, PR features need both a token and a pull_request event
    let event = match (&token, is_pull_request, &args.event_path) {
        (Some(_), true, Some(path)) => Some(github::read_event(path)?),
        _ => None,
    };

    let comment_target = match (&token, is_pull_request) {
        (Some(token), true) => Some(resolve_comment_target(args, token, event.as_ref())?),
        _ => None,
    };

    let changed_files = resolve_changed_files(args, comment_target.is_some(), event.as_ref());
    debug!("changed files source: {:?}", changed_files);

    Ok(RunConfig {
        summary_path: args.coverage_summary_path(),
        template_path: args.comment_template.clone(),
        base_path: args.sources_base_path.clone(),
        repo_dir: PathBuf::from("."),
        changed_files,
        comment_target,
        output_file: args.output_file.clone(),
        json: args.json,
        dry_run: args.dry_run,
    })
}

fn resolve_comment_target(args: &CliArgs, token: &str, event: Option<&PullRequestEvent>) -> Result<CommentTarget> {
    let number = args.pr_number.or(event.map(|e| e.pull_request.number)).ok_or_else(|| {
        CoverageError::Config("pull request number unknown: pass --pr-number or set GITHUB_EVENT_PATH".to_string())
    })?;

    let repository = args
        .repository
        .as_deref()
        .ok_or_else(|| CoverageError::Config("repository unknown: pass --repository or set GITHUB_REPOSITORY".to_string()))?;

    Ok(CommentTarget {
        repo: RepoSlug::parse(repository)?,
        number,
        token: token.to_string(),
        api_url: args.api_url.clone(),
    })
}

fn resolve_changed_files(args: &CliArgs, in_pull_request: bool, event: Option<&PullRequestEvent>) -> ChangedFilesSource {
    if let Some(ref files) = args.changed_files {
        return ChangedFilesSource::Explicit(files.clone());
    }

    if let (Some(base), Some(head)) = (&args.base_sha, &args.head_sha) {
        return ChangedFilesSource::GitDiff { base: base.clone(), head: head.clone() };
    }

    if !in_pull_request {
        return ChangedFilesSource::NotApplicable;
    }

    match event {
        Some(e) => ChangedFilesSource::GitDiff {
            base: e.pull_request.base.sha.clone(),
            head: e.pull_request.head.sha.clone(),
        },
        None => {
            warn!("pull request commits unknown (no event payload); reporting without changed files");
            ChangedFilesSource::NotApplicable
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
