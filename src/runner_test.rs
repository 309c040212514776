/// Tests for runner module
#[cfg(test)]
mod tests {
    use crate::config::{ChangedFilesSource, CommentTarget, RunConfig};
    use crate::error::CoverageError;
    use crate::github::RepoSlug;
    use crate::runner::{resolve_changed_files, run};
    use std::path::{Path, PathBuf};

    const SUMMARY: &str = r#"{
        "total": {
            "lines": {"total": 10, "covered": 8, "skipped": 0, "pct": 80},
            "statements": {"total": 10, "covered": 7, "skipped": 0, "pct": 70},
            "functions": {"total": 4, "covered": 2, "skipped": 0, "pct": 50},
            "branches": {"total": 0, "covered": 0, "skipped": 0, "pct": 100}
        },
        "/work/app/src/a.js": {
            "lines": {"total": 10, "covered": 8, "skipped": 0, "pct": 80},
            "statements": {"total": 10, "covered": 7, "skipped": 0, "pct": 70},
            "functions": {"total": 4, "covered": 2, "skipped": 0, "pct": 50},
            "branches": {"total": 0, "covered": 0, "skipped": 0, "pct": 100}
        }
    }"#;

    const TEMPLATE: &str = "Lines: {{total_lines_coverage_percent}}%\n{{changed_files_coverage_table}}\n{{not_a_token}}";

    /// Helper to lay out a summary and template in a scratch directory
    fn create_test_config(dir: &Path) -> RunConfig {
        let summary_path = dir.join("coverage-summary.json");
        std::fs::write(&summary_path, SUMMARY).unwrap();
        let template_path = dir.join("template.md");
        std::fs::write(&template_path, TEMPLATE).unwrap();

        RunConfig {
            summary_path,
            template_path,
            base_path: "/work/app".to_string(),
            repo_dir: dir.to_path_buf(),
            changed_files: ChangedFilesSource::NotApplicable,
            comment_target: None,
            output_file: None,
            json: false,
            dry_run: false,
        }
    }

    #[test]
    fn test_run_without_pr_context() {
        let dir = tempfile::tempdir().unwrap();
        let config = create_test_config(dir.path());

        let report = run(&config).expect("run should succeed");
        assert_eq!(report.summary.total_lines_coverage_percent, 80.0);
        assert_eq!(report.summary.files_coverage_data[0].file_path, "src/a.js");
        assert!(report.summary.changed_files_coverage_data.is_none());
        assert_eq!(report.tokens.len(), 6);
        assert!(report.comment.is_none());
        assert!(!report.comment_posted);
    }

    #[test]
    fn test_run_with_explicit_changed_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = create_test_config(dir.path());
        config.changed_files = ChangedFilesSource::Explicit(vec!["src/a.js".to_string()]);

        let report = run(&config).unwrap();
        assert_eq!(report.summary.changed_files_coverage_data.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_failed_diff_degrades_to_no_changed_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = create_test_config(dir.path());
        config.changed_files = ChangedFilesSource::GitDiff { base: "nope".to_string(), head: "nada".to_string() };

        assert_eq!(resolve_changed_files(&config), None);
        let report = run(&config).unwrap();
        assert!(report.summary.changed_files_coverage_data.is_none());
    }

    #[test]
    fn test_dry_run_renders_template_without_posting() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = create_test_config(dir.path());
        config.dry_run = true;
        config.changed_files = ChangedFilesSource::Explicit(vec![]);
        config.comment_target = Some(CommentTarget {
            repo: RepoSlug::parse("imazen/app").unwrap(),
            number: 3,
            token: "t0ken".to_string(),
            api_url: "http://127.0.0.1:9".to_string(),
        });

        let report = run(&config).unwrap();
        let comment = report.comment.expect("comment should be rendered");
        assert!(comment.starts_with("Lines: 80%\n<table>"));
        assert!(comment.contains("No files found."));
        assert!(comment.ends_with("{{not_a_token}}"));
        assert!(!report.comment_posted);
    }

    #[test]
    fn test_outputs_written_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = create_test_config(dir.path());
        let output = dir.path().join("github_output");
        config.output_file = Some(output.clone());

        run(&config).unwrap();
        let content = std::fs::read_to_string(output).unwrap();
        assert!(content.contains("total_branches_coverage_percent<<COV_COMMENT_EOF\n100\nCOV_COMMENT_EOF\n"));
        assert!(content.contains("changed_files_coverage_table<<"));
    }

    #[test]
    fn test_missing_summary_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = create_test_config(dir.path());
        config.summary_path = PathBuf::from("/nonexistent/coverage-summary.json");

        assert!(matches!(run(&config), Err(CoverageError::Io { .. })));
    }

    #[test]
    fn test_missing_template_is_io_error_only_when_rendering() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = create_test_config(dir.path());
        config.template_path = dir.path().join("missing.md");

        assert!(run(&config).is_ok());

        config.dry_run = true;
        assert!(matches!(run(&config), Err(CoverageError::Io { .. })));
    }

    #[test]
    fn test_malformed_summary_aborts_before_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = create_test_config(dir.path());
        std::fs::write(&config.summary_path, r#"{"src/a.js": {}}"#).unwrap();
        let output = dir.path().join("github_output");
        config.output_file = Some(output.clone());

        assert!(matches!(run(&config), Err(CoverageError::MalformedSummary { .. })));
        assert!(!output.exists());
    }
}
