//! Core data structures for coverage summaries
//!
//! These types mirror the shape of an Istanbul `coverage-summary.json` once
//! it has been validated, plus the aggregated result handed to the renderers.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// One of the four coverage dimensions reported per file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Lines,
    Statements,
    Functions,
    Branches,
}

impl Category {
    /// Column order used by every renderer
    pub const ALL: [Category; 4] = [Category::Lines, Category::Statements, Category::Functions, Category::Branches];

    /// Key used in the summary JSON
    pub fn key(&self) -> &'static str {
        match self {
            Category::Lines => "lines",
            Category::Statements => "statements",
            Category::Functions => "functions",
            Category::Branches => "branches",
        }
    }

    /// Column heading
    pub fn label(&self) -> &'static str {
        match self {
            Category::Lines => "Lines",
            Category::Statements => "Statements",
            Category::Functions => "Functions",
            Category::Branches => "Branches",
        }
    }
}

/// Counts and percentage for a single category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryCoverage {
    pub total: u64,
    pub covered: u64,
    #[serde(default)]
    pub skipped: u64,
    /// `None` when Istanbul reported `"Unknown"` (only happens for `total == 0`)
    #[serde(deserialize_with = "deserialize_pct")]
    pub pct: Option<f64>,
}

impl CategoryCoverage {
    /// The `pct` exactly as reported, with `"Unknown"` read as 100
    pub fn reported_pct(&self) -> f64 {
        self.pct.unwrap_or(100.0)
    }

    /// Percentage used for display: a category with nothing to cover is fully covered
    pub fn percent(&self) -> f64 {
        if self.total == 0 { 100.0 } else { self.reported_pct() }
    }

    /// Check the invariants the summary format promises
    pub fn validate(&self) -> Result<(), String> {
        if self.covered > self.total {
            return Err(format!("covered ({}) exceeds total ({})", self.covered, self.total));
        }
        if self.pct.is_none() && self.total > 0 {
            return Err(format!("pct is unknown but total is {}", self.total));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPct {
    Number(f64),
    Text(String),
}

fn deserialize_pct<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match RawPct::deserialize(deserializer)? {
        RawPct::Number(n) => Ok(Some(n)),
        RawPct::Text(s) if s == "Unknown" => Ok(None),
        RawPct::Text(s) => Err(serde::de::Error::custom(format!("unexpected pct value `{}`", s))),
    }
}

/// The four category records for one file (or for the `"total"` entry)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FileCoverageEntry {
    pub lines: CategoryCoverage,
    pub statements: CategoryCoverage,
    pub functions: CategoryCoverage,
    pub branches: CategoryCoverage,
}

impl FileCoverageEntry {
    pub fn get(&self, category: Category) -> &CategoryCoverage {
        match category {
            Category::Lines => &self.lines,
            Category::Statements => &self.statements,
            Category::Functions => &self.functions,
            Category::Branches => &self.branches,
        }
    }
}

/// A validated coverage summary: the aggregate entry plus per-file entries in source order
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageSummary {
    pub total: FileCoverageEntry,
    pub files: IndexMap<String, FileCoverageEntry>,
}

/// Per-file row after path normalization
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileCoverage {
    pub file_path: String,
    pub lines: CategoryCoverage,
    pub statements: CategoryCoverage,
    pub functions: CategoryCoverage,
    pub branches: CategoryCoverage,
}

impl FileCoverage {
    pub fn new(file_path: String, entry: &FileCoverageEntry) -> Self {
        Self {
            file_path,
            lines: entry.lines,
            statements: entry.statements,
            functions: entry.functions,
            branches: entry.branches,
        }
    }

    pub fn get(&self, category: Category) -> &CategoryCoverage {
        match category {
            Category::Lines => &self.lines,
            Category::Statements => &self.statements,
            Category::Functions => &self.functions,
            Category::Branches => &self.branches,
        }
    }
}

pub type FilesCoverageData = Vec<FileCoverage>;

/// Aggregated result of parsing a summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedSummary {
    pub total_lines_coverage_percent: f64,
    pub total_statements_coverage_percent: f64,
    pub total_functions_coverage_percent: f64,
    pub total_branches_coverage_percent: f64,
    pub files_coverage_data: FilesCoverageData,
    /// `None` outside a pull request; `Some(vec![])` when nothing covered was changed
    pub changed_files_coverage_data: Option<FilesCoverageData>,
}

impl ParsedSummary {
    pub fn total_percent(&self, category: Category) -> f64 {
        match category {
            Category::Lines => self.total_lines_coverage_percent,
            Category::Statements => self.total_statements_coverage_percent,
            Category::Functions => self.total_functions_coverage_percent,
            Category::Branches => self.total_branches_coverage_percent,
        }
    }
}
