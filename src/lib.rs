//! Turn an Istanbul `coverage-summary.json` into step outputs and a pull
//! request comment.
//!
//! The core is pure: [`summary::parse_summary`] validates and aggregates a
//! summary, [`report::render_table`] renders per-file rows, and
//! [`report::replace_tokens`] fills a comment template. The remaining
//! modules are the thin shell that reads files, runs git, and talks to GitHub.

pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod github;
pub mod path;
pub mod report;
pub mod runner;
pub mod summary;
pub mod types;
pub mod ui;

pub use error::{CoverageError, Result};
pub use path::normalize;
pub use report::{Token, TokenMap, build_token_map, render_table, replace_tokens};
pub use summary::{ParseOptions, RawSummary, parse_summary, parse_summary_str};
pub use types::*;
