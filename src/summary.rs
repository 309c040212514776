//! Coverage summary parsing and aggregation
//!
//! This module handles:
//! - Validating the raw summary JSON into a `CoverageSummary`
//! - Extracting the four total percentages
//! - Normalizing file paths and building per-file rows
//! - Filtering rows down to the changed files of a pull request

use crate::error::{CoverageError, Result};
use crate::path;
use crate::types::*;
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;

/// Key of the aggregate entry in `coverage-summary.json`
pub const TOTAL_KEY: &str = "total";

/// The summary as read from disk, before validation
pub type RawSummary = IndexMap<String, Value>;

/// Options controlling aggregation
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Prefix stripped from every file path (empty = keep paths as-is)
    pub base_path: String,
    /// Changed files of the pull request; `None` when there is no PR context
    pub changed_files: Option<Vec<String>>,
}

impl CoverageSummary {
    /// Validate a raw summary, failing on the first missing or malformed entry
    pub fn from_raw(raw: &RawSummary) -> Result<Self> {
        let total_value = raw
            .get(TOTAL_KEY)
            .ok_or_else(|| CoverageError::malformed(TOTAL_KEY, "is missing from the summary"))?;
        let total = parse_entry(TOTAL_KEY, total_value)?;

        let mut files = IndexMap::with_capacity(raw.len().saturating_sub(1));
        for (file_path, value) in raw {
            if file_path == TOTAL_KEY {
                continue;
            }
            files.insert(file_path.clone(), parse_entry(file_path, value)?);
        }

        Ok(CoverageSummary { total, files })
    }

    /// Parse and validate `coverage-summary.json` text
    pub fn from_json_str(text: &str) -> Result<Self> {
        let raw: RawSummary =
            serde_json::from_str(text).map_err(|e| CoverageError::json("coverage summary", e))?;
        Self::from_raw(&raw)
    }
}

fn parse_entry(key: &str, value: &Value) -> Result<FileCoverageEntry> {
    let object = value.as_object().ok_or_else(|| CoverageError::malformed(key, "is not an object"))?;

    let category = |category: Category| -> Result<CategoryCoverage> {
        let name = category.key();
        let raw = object
            .get(name)
            .ok_or_else(|| CoverageError::malformed(key, format!("is missing the `{}` category", name)))?;
        let parsed = CategoryCoverage::deserialize(raw)
            .map_err(|e| CoverageError::malformed(key, format!("has an invalid `{}` category: {}", name, e)))?;
        parsed
            .validate()
            .map_err(|reason| CoverageError::malformed(key, format!("has an invalid `{}` category: {}", name, reason)))?;
        Ok(parsed)
    };

    Ok(FileCoverageEntry {
        lines: category(Category::Lines)?,
        statements: category(Category::Statements)?,
        functions: category(Category::Functions)?,
        branches: category(Category::Branches)?,
    })
}

/// Aggregate a validated summary
///
/// Paths are normalized before changed-file matching, which is exact and case-sensitive.
pub fn aggregate(summary: &CoverageSummary, options: &ParseOptions) -> ParsedSummary {
    let files_coverage_data: FilesCoverageData = summary
        .files
        .iter()
        .map(|(file_path, entry)| FileCoverage::new(path::normalize(file_path, &options.base_path), entry))
        .collect();

    let changed_files_coverage_data = options.changed_files.as_ref().map(|changed| {
        let changed: HashSet<&str> = changed.iter().map(String::as_str).collect();
        files_coverage_data
            .iter()
            .filter(|file| changed.contains(file.file_path.as_str()))
            .cloned()
            .collect::<FilesCoverageData>()
    });

    debug!(
        "aggregated {} files, changed files: {:?}",
        files_coverage_data.len(),
        changed_files_coverage_data.as_ref().map(Vec::len)
    );

    ParsedSummary {
        total_lines_coverage_percent: summary.total.lines.reported_pct(),
        total_statements_coverage_percent: summary.total.statements.reported_pct(),
        total_functions_coverage_percent: summary.total.functions.reported_pct(),
        total_branches_coverage_percent: summary.total.branches.reported_pct(),
        files_coverage_data,
        changed_files_coverage_data,
    }
}

/// Validate and aggregate a raw summary
pub fn parse_summary(raw: &RawSummary, options: &ParseOptions) -> Result<ParsedSummary> {
    let summary = CoverageSummary::from_raw(raw)?;
    Ok(aggregate(&summary, options))
}

/// Validate and aggregate `coverage-summary.json` text
pub fn parse_summary_str(text: &str, options: &ParseOptions) -> Result<ParsedSummary> {
    let summary = CoverageSummary::from_json_str(text)?;
    Ok(aggregate(&summary, options))
}

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;
