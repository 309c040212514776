//! Plain-text rendering of a parsed summary for the terminal.
//!
//! Column widths are measured with `unicode-width` so paths containing wide
//! characters still line up.

use super::table::format_category_cell;
use super::tokens::format_percent;
use crate::types::{Category, FileCoverage, ParsedSummary};
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest the file column is allowed to grow before paths are truncated
const MAX_FILE_WIDTH: usize = 60;
const CELL_WIDTH: usize = 22;

/// Display width of a string in terminal columns
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate (with `...`) or pad a string to exactly `width` columns
pub fn truncate_with_padding(s: &str, width: usize) -> String {
    let display_w = display_width(s);

    if display_w <= width {
        return format!("{}{}", s, " ".repeat(width - display_w));
    }

    let target_width = if width >= 3 { width - 3 } else { width };
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let c_width = UnicodeWidthChar::width(c).unwrap_or(1);
        if current_width + c_width > target_width {
            break;
        }
        result.push(c);
        current_width += c_width;
    }
    if width >= 3 {
        result.push_str("...");
        current_width += 3;
    }
    if current_width < width {
        result.push_str(&" ".repeat(width - current_width));
    }
    result
}

/// Format the per-file rows as an aligned text table
pub fn format_files_table(rows: &[FileCoverage]) -> String {
    let file_width = rows
        .iter()
        .map(|r| display_width(&r.file_path))
        .max()
        .unwrap_or(0)
        .clamp("File".len(), MAX_FILE_WIDTH);

    let mut out = String::new();
    out.push_str(&truncate_with_padding("File", file_width));
    for category in Category::ALL {
        out.push_str(" │ ");
        out.push_str(&truncate_with_padding(category.label(), CELL_WIDTH));
    }
    out.push('\n');
    out.push_str(&"─".repeat(file_width + Category::ALL.len() * (CELL_WIDTH + 3)));
    out.push('\n');

    for row in rows {
        out.push_str(&truncate_with_padding(&row.file_path, file_width));
        for category in Category::ALL {
            out.push_str(" │ ");
            out.push_str(&truncate_with_padding(&format_category_cell(row.get(category)), CELL_WIDTH));
        }
        out.push('\n');
    }
    out
}

/// Write totals and the file tables
pub fn write_summary<W: Write>(writer: &mut W, summary: &ParsedSummary) -> io::Result<()> {
    writeln!(writer, "\n=== Coverage ===")?;
    for category in Category::ALL {
        writeln!(writer, "{:<12}{:>8}%", category.label(), format_percent(summary.total_percent(category)))?;
    }

    writeln!(writer, "\nAll files ({}):", summary.files_coverage_data.len())?;
    if summary.files_coverage_data.is_empty() {
        writeln!(writer, "  (none)")?;
    } else {
        write!(writer, "{}", format_files_table(&summary.files_coverage_data))?;
    }

    if let Some(ref changed) = summary.changed_files_coverage_data {
        writeln!(writer, "\nChanged files ({}):", changed.len())?;
        if changed.is_empty() {
            writeln!(writer, "  (none)")?;
        } else {
            write!(writer, "{}", format_files_table(changed))?;
        }
    }

    Ok(())
}

/// Print the summary to stdout
pub fn print_summary(summary: &ParsedSummary) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = write_summary(&mut handle, summary) {
        log::warn!("failed to print coverage summary: {}", e);
    }
}
