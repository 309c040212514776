//! Output export: GitHub Actions output file and JSON.
//!
//! Each token becomes a named step output. Values are multi-line (the
//! tables), so they are written in the heredoc form
//! `name<<DELIMITER\nvalue\nDELIMITER\n` that the runner parses.

use super::tokens::TokenMap;
use crate::error::{CoverageError, Result};
use crate::types::ParsedSummary;
use log::debug;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

const DELIMITER_BASE: &str = "COV_COMMENT_EOF";

/// Pick a heredoc delimiter that does not occur in `value`
fn delimiter_for(value: &str) -> String {
    let mut delimiter = DELIMITER_BASE.to_string();
    let mut n = 0;
    while value.lines().any(|line| line == delimiter) {
        n += 1;
        delimiter = format!("{}_{}", DELIMITER_BASE, n);
    }
    delimiter
}

/// Format one output in the runner's heredoc syntax
pub fn format_output(name: &str, value: &str) -> String {
    let delimiter = delimiter_for(value);
    format!("{}<<{}\n{}\n{}\n", name, delimiter, value, delimiter)
}

/// Format every token as an output block, in map order
pub fn format_outputs(tokens: &TokenMap) -> String {
    tokens.iter().map(|(name, value)| format_output(name, value)).collect()
}

/// Append all tokens to the output file (created if missing)
pub fn write_outputs(path: &Path, tokens: &TokenMap) -> Result<()> {
    debug!("writing {} outputs to {}", tokens.len(), path.display());

    let mut file =
        OpenOptions::new().create(true).append(true).open(path).map_err(|e| CoverageError::io(path, e))?;
    file.write_all(format_outputs(tokens).as_bytes()).map_err(|e| CoverageError::io(path, e))?;

    Ok(())
}

/// Render tokens and the parsed summary as a pretty JSON document
pub fn export_json(tokens: &TokenMap, summary: &ParsedSummary) -> Result<String> {
    use serde_json::json;

    let report = json!({
        "tokens": tokens,
        "summary": summary,
    });

    serde_json::to_string_pretty(&report).map_err(|e| CoverageError::json("JSON report", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> TokenMap {
        let mut map = TokenMap::new();
        map.insert("total_lines_coverage_percent".to_string(), "80".to_string());
        map.insert("files_coverage_table".to_string(), "<table>\n</table>".to_string());
        map
    }

    #[test]
    fn test_format_output_heredoc() {
        assert_eq!(format_output("a", "1"), "a<<COV_COMMENT_EOF\n1\nCOV_COMMENT_EOF\n");
    }

    #[test]
    fn test_delimiter_avoids_collisions() {
        let value = "x\nCOV_COMMENT_EOF\ny";
        let out = format_output("a", value);
        assert!(out.starts_with("a<<COV_COMMENT_EOF_1\n"));
        assert!(out.ends_with("\nCOV_COMMENT_EOF_1\n"));
    }

    #[test]
    fn test_outputs_follow_map_order() {
        let out = format_outputs(&tokens());
        let first = out.find("total_lines_coverage_percent<<").unwrap();
        let second = out.find("files_coverage_table<<").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_write_outputs_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("github_output");
        std::fs::write(&path, "existing=1\n").unwrap();

        write_outputs(&path, &tokens()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("existing=1\n"));
        assert!(content.contains("total_lines_coverage_percent<<COV_COMMENT_EOF\n80\nCOV_COMMENT_EOF\n"));
    }

    #[test]
    fn test_export_json_shape() {
        let summary = ParsedSummary {
            total_lines_coverage_percent: 80.0,
            total_statements_coverage_percent: 70.0,
            total_functions_coverage_percent: 60.0,
            total_branches_coverage_percent: 50.0,
            files_coverage_data: vec![],
            changed_files_coverage_data: None,
        };
        let json = export_json(&tokens(), &summary).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["tokens"]["total_lines_coverage_percent"], "80");
        assert_eq!(value["summary"]["total_branches_coverage_percent"], 50.0);
        assert!(value["summary"]["changed_files_coverage_data"].is_null());
    }
}
