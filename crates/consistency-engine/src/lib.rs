//! Cross-page field consistency engine
//!
//! Extracts reference values for a fixed table of fields from the first
//! page of a document, then reports, per field, which pages repeat the
//! reference value verbatim and which do not.

pub mod config;
pub mod error;
pub mod export;
pub mod extractor;
pub mod patterns;
pub mod validator;

pub use config::{load_field_table, FieldTableConfig};
pub use error::EngineError;
pub use export::ReportRow;
pub use patterns::{FieldDefinition, FieldTable, STANDARD_FIELD_PATTERNS};

use shared_types::{DocumentPages, ReferenceMap, ValidationResult};

/// ConsistencyEngine entry point
#[derive(Debug, Clone)]
pub struct ConsistencyEngine {
    fields: FieldTable,
}

impl ConsistencyEngine {
    /// Engine using the standard field table
    pub fn new() -> Self {
        Self::with_fields(FieldTable::standard())
    }

    pub fn with_fields(fields: FieldTable) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &FieldTable {
        &self.fields
    }

    /// Extract reference values from the reference page text
    pub fn extract_reference(&self, reference_text: &str) -> ReferenceMap {
        extractor::extract_reference(&self.fields, reference_text)
    }

    /// Validate reference values against every page
    ///
    /// One row per table field, in table order, whatever the map holds.
    pub fn validate<S: AsRef<str>>(&self, reference: &ReferenceMap, pages: &[S]) -> ValidationResult {
        validator::validate(&self.fields, reference, pages)
    }

    /// Extract from page 1, then validate all pages
    pub fn validate_document(&self, document: &DocumentPages) -> ValidationResult {
        tracing::info!(
            source = document.source.as_deref().unwrap_or("<memory>"),
            pages = document.page_count(),
            fields = self.fields.len(),
            "validating document"
        );

        let reference = self.extract_reference(document.reference_page());
        let result = self.validate(&reference, document.pages());

        tracing::info!(
            consistent = result.consistent_fields().len(),
            missing_references = result.missing_references().len(),
            "validation complete"
        );
        result
    }
}

impl Default for ConsistencyEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn document(pages: &[&str]) -> DocumentPages {
        DocumentPages::new(pages.iter().map(|p| p.to_string()).collect())
    }

    #[test]
    fn test_reference_found_on_later_page() {
        let engine = ConsistencyEngine::new();
        let doc = document(&["L Number: - 12345", "Certificate 12345", "Appendix"]);
        let result = engine.validate_document(&doc);

        let row = result.row("L Number").unwrap();
        assert_eq!(row.reference, "12345");
        // The reference page contains its own value
        assert_eq!(row.match_pages, vec![1, 2]);
        assert_eq!(row.not_match_pages, vec![3]);
    }

    #[test]
    fn test_unlabelled_field_is_all_not_match() {
        let engine = ConsistencyEngine::new();
        let doc = document(&["L Number: - 12345", "12345", ""]);
        let result = engine.validate_document(&doc);

        let row = result.row("F Date").unwrap();
        assert_eq!(row.reference, "");
        assert!(row.match_pages.is_empty());
        assert_eq!(row.not_match_pages, vec![1, 2, 3]);
    }

    #[test]
    fn test_rows_follow_field_table_order() {
        let engine = ConsistencyEngine::new();
        let result = engine.validate_document(&document(&["S: - 2.5 N: - Ann"]));

        let fields: Vec<&str> = result.rows.iter().map(|r| r.field.as_str()).collect();
        assert_eq!(fields, engine.fields().names());
    }

    #[test]
    fn test_empty_document() {
        let engine = ConsistencyEngine::new();
        let result = engine.validate_document(&DocumentPages::default());

        assert_eq!(result.page_count, 0);
        assert_eq!(result.rows.len(), STANDARD_FIELD_PATTERNS.len());
        for row in &result.rows {
            assert_eq!(row.reference, "");
            assert!(row.match_pages.is_empty());
            assert!(row.not_match_pages.is_empty());
        }
    }

    #[test]
    fn test_altered_reference_flips_page() {
        let engine = ConsistencyEngine::new();
        let pages = ["L Number: - 12345", "value 12345"];
        let mut reference = engine.extract_reference(pages[0]);

        let result = engine.validate(&reference, &pages);
        assert_eq!(result.rows[0].match_pages, vec![1, 2]);

        reference.insert("L Number", "12346");
        let result = engine.validate(&reference, &pages);
        assert!(result.rows[0].match_pages.is_empty());
        assert_eq!(result.rows[0].not_match_pages, vec![1, 2]);
    }

    #[test]
    fn test_hand_built_reference_uses_table_order() {
        let engine = ConsistencyEngine::new();
        let reference: ReferenceMap = vec![("S", "1.5"), ("L Number", "42"), ("Bogus", "x")]
            .into_iter()
            .collect();
        let result = engine.validate(&reference, &["L Number: - 42", "S: - 1.5 x"]);

        let fields: Vec<&str> = result.rows.iter().map(|r| r.field.as_str()).collect();
        assert_eq!(fields, engine.fields().names());
        assert!(result.row("Bogus").is_none());
        assert_eq!(result.row("L Number").unwrap().match_pages, vec![1]);
        assert_eq!(result.row("S").unwrap().match_pages, vec![2]);
        assert_eq!(result.row("N").unwrap().not_match_pages, vec![1, 2]);
    }

    #[test]
    fn test_full_certificate() {
        let engine = ConsistencyEngine::new();
        let page1 = "L Number: - 5501\nN: - Maria Lopez\nC number: - 44-120\n\
                     F date: - 01/03/2024\nM Date: - 02/03/2024\nA date: - 03/03/2024\n\
                     P P date: - 04/03/2024\nS: - 12.5";
        let page2 = "Holder Maria Lopez, licence 5501, cert 44-120, issued 01/03/2024";
        let page3 = "Maria Lopez 5501 44-120 01/03/2024 02/03/2024 03/03/2024 04/03/2024 12.5";
        let result = engine.validate_document(&document(&[page1, page2, page3]));

        assert_eq!(
            result.consistent_fields(),
            vec!["L Number", "N", "C Number", "F Date"]
        );
        assert!(result.missing_references().is_empty());
        assert_eq!(result.row("S").unwrap().not_match_pages, vec![2]);
        assert!(!result.is_consistent());
    }

    #[test]
    fn test_custom_field_table() {
        let fields = FieldTable::from_patterns(&[("Invoice", r"Invoice #(\w+)")]).unwrap();
        let engine = ConsistencyEngine::with_fields(fields);
        let result = engine.validate_document(&document(&["Invoice #A17", "re: A17", "a17"]));

        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.rows[0].match_pages, vec![1, 2]);
        assert_eq!(result.rows[0].not_match_pages, vec![3]);
    }
}
