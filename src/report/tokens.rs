//! Token names and the token map built from a parsed summary.

use super::table::render_table;
use crate::types::ParsedSummary;
use indexmap::IndexMap;

/// Token name → rendered value, in `Token::ALL` order
pub type TokenMap = IndexMap<String, String>;

/// The values a comment template can reference, and the outputs the run exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    TotalLinesCoveragePercent,
    TotalStatementsCoveragePercent,
    TotalFunctionsCoveragePercent,
    TotalBranchesCoveragePercent,
    FilesCoverageTable,
    ChangedFilesCoverageTable,
}

impl Token {
    pub const ALL: [Token; 6] = [
        Token::TotalLinesCoveragePercent,
        Token::TotalStatementsCoveragePercent,
        Token::TotalFunctionsCoveragePercent,
        Token::TotalBranchesCoveragePercent,
        Token::FilesCoverageTable,
        Token::ChangedFilesCoverageTable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Token::TotalLinesCoveragePercent => "total_lines_coverage_percent",
            Token::TotalStatementsCoveragePercent => "total_statements_coverage_percent",
            Token::TotalFunctionsCoveragePercent => "total_functions_coverage_percent",
            Token::TotalBranchesCoveragePercent => "total_branches_coverage_percent",
            Token::FilesCoverageTable => "files_coverage_table",
            Token::ChangedFilesCoverageTable => "changed_files_coverage_table",
        }
    }

    /// Render this token's value from a parsed summary
    pub fn render(&self, summary: &ParsedSummary) -> String {
        match self {
            Token::TotalLinesCoveragePercent => format_percent(summary.total_lines_coverage_percent),
            Token::TotalStatementsCoveragePercent => format_percent(summary.total_statements_coverage_percent),
            Token::TotalFunctionsCoveragePercent => format_percent(summary.total_functions_coverage_percent),
            Token::TotalBranchesCoveragePercent => format_percent(summary.total_branches_coverage_percent),
            Token::FilesCoverageTable => render_table(Some(summary.files_coverage_data.as_slice())),
            Token::ChangedFilesCoverageTable => render_table(summary.changed_files_coverage_data.as_deref()),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shortest text form of a percentage: `80`, `85.71`
pub fn format_percent(value: f64) -> String {
    value.to_string()
}

/// Build the map of all six tokens
pub fn build_token_map(summary: &ParsedSummary) -> TokenMap {
    Token::ALL.iter().map(|token| (token.as_str().to_string(), token.render(summary))).collect()
}
