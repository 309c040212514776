//! HTML table rendering for per-file coverage.
//!
//! The table is embedded into a Markdown comment, so it is plain HTML with
//! one element row per line and no blank lines (a blank line would end the
//! HTML block in GitHub's Markdown renderer).

use crate::types::{Category, CategoryCoverage, FileCoverage};
use std::fmt::Write;

/// Text shown in place of data rows when there is nothing to list
pub const NO_FILES_MESSAGE: &str = "No files found.";

/// Render a category cell as `covered/total (pct%)`
pub fn format_category_cell(coverage: &CategoryCoverage) -> String {
    format!("{}/{} ({:.2}%)", coverage.covered, coverage.total, coverage.percent())
}

/// Render rows as an HTML table
///
/// `None` and an empty slice both produce a table with a single "no files"
/// row, so callers always get something to embed.
pub fn render_table(rows: Option<&[FileCoverage]>) -> String {
    let rows = rows.unwrap_or(&[]);
    let mut html = String::new();

    html.push_str("<table>\n<thead>\n<tr><th>File</th>");
    for category in Category::ALL {
        let _ = write!(html, "<th>{}</th>", category.label());
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    if rows.is_empty() {
        let _ = writeln!(html, "<tr><td colspan=\"{}\">{}</td></tr>", Category::ALL.len() + 1, NO_FILES_MESSAGE);
    }

    for row in rows {
        let _ = write!(html, "<tr><td>{}</td>", escape_html(&row.file_path));
        for category in Category::ALL {
            let _ = write!(html, "<td>{}</td>", format_category_cell(row.get(category)));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>");
    html
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
