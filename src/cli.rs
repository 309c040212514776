use clap::Parser;
use std::path::PathBuf;

/// File name Istanbul's `json-summary` reporter writes
pub const DEFAULT_COVERAGE_SUMMARY_JSON_FILENAME: &str = "coverage-summary.json";

/// Comment template looked up relative to the working directory
pub const DEFAULT_COMMENT_TEMPLATE_MD_FILENAME: &str = "coverage-comment-template.md";

#[derive(Parser, Debug, Clone)]
#[command(name = "cov-comment")]
#[command(about = "Report Istanbul coverage as step outputs and a pull request comment")]
#[command(version)]
pub struct CliArgs {
    /// Directory containing coverage-summary.json
    #[arg(long, env = "INPUT_COVERAGE_OUTPUT_DIRECTORY", default_value = "coverage", value_name = "DIR")]
    pub coverage_output_directory: PathBuf,

    /// Prefix stripped from file paths in the summary so they match git paths
    #[arg(long, env = "INPUT_SOURCES_BASE_PATH", default_value = "", value_name = "PATH")]
    pub sources_base_path: String,

    /// GitHub token; without it no changed files are computed and no comment is posted
    #[arg(long, env = "INPUT_GITHUB_TOKEN", hide_env_values = true, value_name = "TOKEN")]
    pub github_token: Option<String>,

    /// Markdown template for the pull request comment
    #[arg(long, default_value = DEFAULT_COMMENT_TEMPLATE_MD_FILENAME, value_name = "FILE")]
    pub comment_template: PathBuf,

    /// Use these changed files instead of running git diff
    /// Can specify multiple: --changed-files src/a.js src/b.js
    #[arg(long, value_name = "PATH", num_args = 0..)]
    pub changed_files: Option<Vec<String>>,

    /// Base commit for the diff (default: from the pull request event)
    #[arg(long, value_name = "SHA")]
    pub base_sha: Option<String>,

    /// Head commit for the diff (default: from the pull request event)
    #[arg(long, value_name = "SHA")]
    pub head_sha: Option<String>,

    /// Pull request number to comment on (default: from the pull request event)
    #[arg(long, value_name = "NUMBER")]
    pub pr_number: Option<u64>,

    /// Repository as owner/repo
    #[arg(long, env = "GITHUB_REPOSITORY", value_name = "OWNER/REPO")]
    pub repository: Option<String>,

    /// Workflow event name; changed files and comments need "pull_request"
    #[arg(long, env = "GITHUB_EVENT_NAME", value_name = "NAME")]
    pub event_name: Option<String>,

    /// Path to the workflow event payload
    #[arg(long, env = "GITHUB_EVENT_PATH", value_name = "FILE")]
    pub event_path: Option<PathBuf>,

    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = crate::github::DEFAULT_API_URL, value_name = "URL")]
    pub api_url: String,

    /// File that step outputs are appended to
    #[arg(long, env = "GITHUB_OUTPUT", value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Print outputs and the parsed summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the rendered comment instead of posting it
    #[arg(long)]
    pub dry_run: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        let mut args = CliArgs::parse();

        // Accept a newline-separated list (e.g. raw `git diff --name-only` output) in a single value
        args.changed_files = args.changed_files.map(|files| {
            files.iter().flat_map(|s| crate::git::parse_name_only_output(s)).collect()
        });

        args
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.base_sha.is_some() != self.head_sha.is_some() {
            return Err("--base-sha and --head-sha must be given together".to_string());
        }

        if self.changed_files.is_some() && self.base_sha.is_some() {
            return Err("Cannot specify both --changed-files and --base-sha/--head-sha".to_string());
        }

        Ok(())
    }

    /// Full path of coverage-summary.json
    pub fn coverage_summary_path(&self) -> PathBuf {
        self.coverage_output_directory.join(DEFAULT_COVERAGE_SUMMARY_JSON_FILENAME)
    }
}
