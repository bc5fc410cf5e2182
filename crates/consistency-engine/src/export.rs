//! Tabular report and spreadsheet export
//!
//! The tabular form has one row per field with the columns
//! `Field, Reference, Match Pages, Not Match Pages`. Page columns hold
//! comma-joined ascending page numbers, or an empty string.

use crate::error::EngineError;
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use shared_types::{ValidationResult, ValidationRow};
use std::io::Write;

/// Header row of the tabular report
pub const REPORT_COLUMNS: [&str; 4] = ["Field", "Reference", "Match Pages", "Not Match Pages"];

/// One rendered report row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "Field")]
    pub field: String,
    #[serde(rename = "Reference")]
    pub reference: String,
    #[serde(rename = "Match Pages")]
    pub match_pages: String,
    #[serde(rename = "Not Match Pages")]
    pub not_match_pages: String,
}

impl From<&ValidationRow> for ReportRow {
    fn from(row: &ValidationRow) -> Self {
        Self {
            field: row.field.clone(),
            reference: row.reference.clone(),
            match_pages: join_pages(&row.match_pages),
            not_match_pages: join_pages(&row.not_match_pages),
        }
    }
}

/// Comma-join page numbers: `[1, 3]` -> `"1,3"`, `[]` -> `""`
pub fn join_pages(pages: &[usize]) -> String {
    pages
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Render the result as report rows, in result order
pub fn to_table(result: &ValidationResult) -> Vec<ReportRow> {
    result.rows.iter().map(ReportRow::from).collect()
}

/// Write the report as CSV with a header row
pub fn write_csv<W: Write>(result: &ValidationResult, writer: W) -> Result<(), EngineError> {
    let mut wtr = csv::Writer::from_writer(writer);
    // Header even when there are no rows
    wtr.write_record(REPORT_COLUMNS)?;
    for row in to_table(result) {
        wtr.write_record([
            &row.field,
            &row.reference,
            &row.match_pages,
            &row.not_match_pages,
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Render the report as a CSV string
pub fn to_csv_string(result: &ValidationResult) -> Result<String, EngineError> {
    let mut buffer = Vec::new();
    write_csv(result, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Render the report rows as pretty-printed JSON
pub fn to_json(result: &ValidationResult) -> Result<String, EngineError> {
    Ok(serde_json::to_string_pretty(&to_table(result))?)
}

/// Timestamped report file name, e.g. `Validation_Report_20240131_094500.csv`
pub fn report_file_name<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "Validation_Report_{}.csv",
        timestamp.format("%Y%m%d_%H%M%S")
    )
}
