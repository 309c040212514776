//! Report generation module - rendering parsed coverage for people and machines.
//!
//! This module handles:
//! - Rendering per-file coverage as an HTML table
//! - Building the token map from a parsed summary
//! - Substituting tokens into a comment template
//! - Exporting outputs (GitHub output file, JSON)
//! - Printing a plain-text summary to the console
//!
//! # Module Organization
//!
//! - `table` - HTML table for the comment
//! - `tokens` - Token names and `TokenMap` construction
//! - `template` - `{{token}}` substitution
//! - `export` - Output file and JSON export
//! - `console` - Terminal summary

mod console;
mod export;
mod table;
mod template;
mod tokens;

pub use table::{NO_FILES_MESSAGE, format_category_cell, render_table};

pub use tokens::{Token, TokenMap, build_token_map, format_percent};

pub use template::replace_tokens;

pub use export::{export_json, format_output, format_outputs, write_outputs};

pub use console::{display_width, format_files_table, print_summary, truncate_with_padding, write_summary};
