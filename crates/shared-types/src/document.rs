//! Per-page document text
//!
//! Page text is produced at the boundary (PDF extraction, plain text files)
//! and is immutable once built. Page numbers are 1-indexed.

use serde::{Deserialize, Serialize};

/// Page separator used by plain-text page dumps
pub const FORM_FEED: char = '\x0C';

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentPages {
    pub source: Option<String>, // File name or other identifier
    pages: Vec<String>,
}

impl DocumentPages {
    pub fn new(pages: Vec<String>) -> Self {
        Self {
            source: None,
            pages,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Split plain text into pages on form feed characters.
    ///
    /// Blank pages are kept so that page numbers line up with the source.
    /// A single trailing form feed does not produce an extra page.
    pub fn from_form_feed_text(text: &str) -> Self {
        let text = text.strip_suffix(FORM_FEED).unwrap_or(text);
        if text.is_empty() {
            return Self::default();
        }
        Self::new(text.split(FORM_FEED).map(str::to_string).collect())
    }

    /// The reference page (page 1); empty when the document has no pages
    pub fn reference_page(&self) -> &str {
        self.pages.first().map(String::as_str).unwrap_or("")
    }

    /// Text of a 1-indexed page
    pub fn page(&self, number: usize) -> Option<&str> {
        let idx = number.checked_sub(1)?;
        self.pages.get(idx).map(String::as_str)
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_feed_split() {
        let doc = DocumentPages::from_form_feed_text("Page 1 content\x0CPage 2 content\x0CPage 3");
        assert_eq!(doc.page_count(), 3);
        assert_eq!(doc.page(1), Some("Page 1 content"));
        assert_eq!(doc.page(3), Some("Page 3"));
        assert_eq!(doc.page(0), None);
        assert_eq!(doc.page(4), None);
    }

    #[test]
    fn test_form_feed_keeps_blank_pages() {
        let doc = DocumentPages::from_form_feed_text("first\x0C\x0Cthird\x0C");
        assert_eq!(doc.page_count(), 3);
        assert_eq!(doc.page(2), Some(""));
        assert_eq!(doc.page(3), Some("third"));
    }

    #[test]
    fn test_no_form_feed_is_single_page() {
        let doc = DocumentPages::from_form_feed_text("Line 1\nLine 2");
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.reference_page(), "Line 1\nLine 2");
    }

    #[test]
    fn test_empty_document() {
        let doc = DocumentPages::from_form_feed_text("");
        assert!(doc.is_empty());
        assert_eq!(doc.reference_page(), "");
    }

    #[test]
    fn test_with_source() {
        let doc = DocumentPages::new(vec!["a".into()]).with_source("contract.pdf");
        assert_eq!(doc.source.as_deref(), Some("contract.pdf"));
    }
}
