//! Cross-page consistency validation
//!
//! Every field is evaluated on its own: a page matches when the field's
//! reference value occurs verbatim in the page text. Matching is exact,
//! case-sensitive and without whitespace normalization.

use crate::patterns::FieldTable;
use shared_types::{ReferenceMap, ValidationResult, ValidationRow};

/// Whether a page contains the reference value
///
/// An empty reference never matches, not even an empty page. A missing
/// reference must show up as a fully unmatched row.
pub fn page_matches(reference: &str, page_text: &str) -> bool {
    if reference.is_empty() {
        return false;
    }
    page_text.contains(reference)
}

/// Classify every page for a single field
pub fn validate_field<S: AsRef<str>>(field: &str, reference: &str, pages: &[S]) -> ValidationRow {
    let mut match_pages = Vec::new();
    let mut not_match_pages = Vec::new();

    for (idx, page) in pages.iter().enumerate() {
        let page_number = idx + 1;
        if page_matches(reference, page.as_ref()) {
            match_pages.push(page_number);
        } else {
            not_match_pages.push(page_number);
        }
    }

    tracing::debug!(
        field,
        matched = match_pages.len(),
        not_matched = not_match_pages.len(),
        "validated field"
    );

    ValidationRow {
        field: field.to_string(),
        reference: reference.to_string(),
        match_pages,
        not_match_pages,
    }
}

/// Validate every field of the table against every page
///
/// Rows come out in field table order, one per field. A field missing from
/// `reference` is validated as an empty reference; map entries for names
/// outside the table are ignored.
pub fn validate<S: AsRef<str>>(
    fields: &FieldTable,
    reference: &ReferenceMap,
    pages: &[S],
) -> ValidationResult {
    let rows = fields
        .iter()
        .map(|field| {
            let value = reference.get(field.name()).unwrap_or("");
            validate_field(field.name(), value, pages)
        })
        .collect();

    ValidationResult {
        page_count: pages.len(),
        rows,
    }
}
