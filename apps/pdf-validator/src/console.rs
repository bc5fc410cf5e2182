//! Console reporter for validation results
//!
//! Renders the four-column report as a box-drawn table. Non-empty match
//! cells are marked `✓` and non-empty not-match cells `✗`.

use anyhow::Result;
use consistency_engine::export::{to_table, REPORT_COLUMNS};
use shared_types::ValidationResult;
use std::fmt::Write;

/// Console format reporter
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Format a validation result for console output
    pub fn format(result: &ValidationResult, source: Option<&str>) -> Result<String> {
        let mut output = String::new();

        writeln!(output)?;
        writeln!(output, "Validation Report: {}", source.unwrap_or("<stdin>"))?;
        writeln!(output, "Pages: {}", result.page_count)?;
        writeln!(output)?;

        let cells: Vec<[String; 4]> = to_table(result)
            .into_iter()
            .map(|row| {
                [
                    row.field,
                    row.reference,
                    mark("✓", row.match_pages),
                    mark("✗", row.not_match_pages),
                ]
            })
            .collect();

        let mut widths = REPORT_COLUMNS.map(|c| c.chars().count());
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        Self::format_border(&mut output, &widths, '┌', '┬', '┐')?;
        Self::format_row(&mut output, &widths, &REPORT_COLUMNS.map(String::from))?;
        Self::format_border(&mut output, &widths, '├', '┼', '┤')?;
        for row in &cells {
            Self::format_row(&mut output, &widths, row)?;
        }
        Self::format_border(&mut output, &widths, '└', '┴', '┘')?;
        writeln!(output)?;

        writeln!(
            output,
            "Consistent fields: {}/{}",
            result.consistent_fields().len(),
            result.rows.len()
        )?;

        let missing = result.missing_references();
        if !missing.is_empty() {
            writeln!(output, "Missing references: {}", missing.join(", "))?;
        }

        let (symbol, status) = if result.is_consistent() {
            ("✓", "CONSISTENT")
        } else {
            ("✗", "INCONSISTENT")
        };
        writeln!(output, "Overall Status: {} {}", symbol, status)?;

        Ok(output)
    }

    fn format_border(
        output: &mut String,
        widths: &[usize; 4],
        left: char,
        mid: char,
        right: char,
    ) -> Result<()> {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        writeln!(output, "{}{}{}", left, segments.join(mid.to_string().as_str()), right)?;
        Ok(())
    }

    fn format_row(output: &mut String, widths: &[usize; 4], cells: &[String; 4]) -> Result<()> {
        output.push('│');
        for (cell, width) in cells.iter().zip(widths.iter()) {
            let pad = width - cell.chars().count();
            write!(output, " {}{} │", cell, " ".repeat(pad))?;
        }
        output.push('\n');
        Ok(())
    }
}

fn mark(symbol: &str, pages: String) -> String {
    if pages.is_empty() {
        pages
    } else {
        format!("{} {}", symbol, pages)
    }
}
