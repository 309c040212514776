//! Git repository utilities
//!
//! This module handles:
//! - Listing the files changed between two commits
//! - Splitting `git diff --name-only` output into paths

use crate::error::{CoverageError, Result};
use log::debug;
use std::path::Path;
use std::process::Command;

/// Added, copied, modified, renamed, or type-changed. Deleted files have no coverage.
const DIFF_FILTER: &str = "--diff-filter=ACMRT";

/// Split `git diff --name-only` output into paths, dropping empty lines
pub fn parse_name_only_output(output: &str) -> Vec<String> {
    output.split('\n').map(|line| line.trim_end_matches('\r')).filter(|line| !line.is_empty()).map(String::from).collect()
}

/// Files changed between `base` and `head`, relative to the repository root
pub fn get_changed_files(repo_dir: &Path, base: &str, head: &str) -> Result<Vec<String>> {
    debug!("running git diff --name-only {} {} {} in {:?}", DIFF_FILTER, base, head, repo_dir);

    let output = Command::new("git")
        .args(["diff", "--name-only", DIFF_FILTER, base, head])
        .current_dir(repo_dir)
        .output()
        .map_err(|e| CoverageError::ChangedFilesUnavailable(format!("failed to run git: {}", e)))?;

    if !output.status.success() {
        return Err(CoverageError::ChangedFilesUnavailable(format!(
            "git diff exited with {:?}: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let files = parse_name_only_output(&stdout);
    debug!("git reported {} changed files", files.len());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_only_output() {
        let files = parse_name_only_output("src/a.js\r\nsrc/b.js\n\nREADME.md\n");
        assert_eq!(files, vec!["src/a.js", "src/b.js", "README.md"]);
    }

    #[test]
    fn test_parse_empty_output() {
        assert!(parse_name_only_output("").is_empty());
        assert!(parse_name_only_output("\n\n").is_empty());
    }

    #[test]
    fn test_unknown_revisions_are_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let result = get_changed_files(dir.path(), "deadbeef", "cafebabe");
        assert!(matches!(result, Err(CoverageError::ChangedFilesUnavailable(_))));
    }
}
