use crate::config::{ChangedFilesSource, RunConfig};
use crate::error::{CoverageError, Result};
use crate::git;
use crate::github;
use crate::report::{self, TokenMap};
use crate::summary::{ParseOptions, parse_summary_str};
use crate::types::ParsedSummary;
use crate::ui;
use log::{debug, info, warn};

/// Everything a run produced
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub summary: ParsedSummary,
    pub tokens: TokenMap,
    /// Rendered comment body, when one was needed
    pub comment: Option<String>,
    /// Whether the comment was posted to the pull request
    pub comment_posted: bool,
}

/// Resolve the changed-file list
///
/// A failing diff is not fatal: the run continues without a changed-files subset.
pub fn resolve_changed_files(config: &RunConfig) -> Option<Vec<String>> {
    match &config.changed_files {
        ChangedFilesSource::NotApplicable => None,
        ChangedFilesSource::Explicit(files) => Some(files.clone()),
        ChangedFilesSource::GitDiff { base, head } => match git::get_changed_files(&config.repo_dir, base, head) {
            Ok(files) => Some(files),
            Err(e) => {
                warn!("{}", e);
                ui::print_warning(&format!("{}; reporting without changed files", e));
                None
            }
        },
    }
}

/// Execute a full run: parse, render, comment, export
pub fn run(config: &RunConfig) -> Result<RunReport> {
    let changed_files = resolve_changed_files(config);

    debug!("reading coverage summary from {}", config.summary_path.display());
    let text = std::fs::read_to_string(&config.summary_path).map_err(|e| CoverageError::io(&config.summary_path, e))?;

    let options = ParseOptions { base_path: config.base_path.clone(), changed_files };
    let summary = parse_summary_str(&text, &options)?;
    let tokens = report::build_token_map(&summary);

    let comment = if config.renders_comment() {
        let template =
            std::fs::read_to_string(&config.template_path).map_err(|e| CoverageError::io(&config.template_path, e))?;
        Some(report::replace_tokens(&template, &tokens))
    } else {
        None
    };

    let mut comment_posted = false;
    if let (Some(target), Some(body)) = (&config.comment_target, &comment) {
        if config.dry_run {
            info!("dry run: not posting comment to {}#{}", target.repo, target.number);
        } else {
            github::create_comment(&target.api_url, &target.token, &target.repo, target.number, body)?;
            ui::status(&format!("commented on {}#{}", target.repo, target.number));
            comment_posted = true;
        }
    }

    if let Some(ref path) = config.output_file {
        report::write_outputs(path, &tokens)?;
    }

    Ok(RunReport { summary, tokens, comment, comment_posted })
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod runner_test;
