//! Page-by-page text extraction
//!
//! Wraps a parsed `lopdf::Document` and turns it into [`DocumentPages`].
//! Extraction failures on a single page degrade to empty page text; only
//! failures that make the whole document unusable are errors.

use crate::error::PdfError;
use lopdf::Document;
use shared_types::DocumentPages;
use std::path::Path;

/// A parsed PDF ready for text extraction
pub struct PdfDocument {
    doc: Document,
    source: Option<String>,
}

impl PdfDocument {
    /// Parse a PDF from memory
    ///
    /// # Errors
    /// - `PdfError::ParseError` - The bytes are not a readable PDF
    /// - `PdfError::Encrypted` - The PDF requires a password
    /// - `PdfError::NoPages` - The page tree is empty
    pub fn load_mem(bytes: &[u8]) -> Result<Self, PdfError> {
        let doc = Document::load_mem(bytes).map_err(|e| PdfError::ParseError(e.to_string()))?;
        Self::from_document(doc, None)
    }

    /// Read and parse a PDF file
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self, PdfError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let doc = Document::load_mem(&bytes).map_err(|e| PdfError::ParseError(e.to_string()))?;
        let source = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        Self::from_document(doc, source)
    }

    fn from_document(doc: Document, source: Option<String>) -> Result<Self, PdfError> {
        if doc.trailer.get(b"Encrypt").is_ok() {
            return Err(PdfError::Encrypted);
        }
        if doc.get_pages().is_empty() {
            return Err(PdfError::NoPages);
        }
        Ok(Self { doc, source })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Plain text of a 1-indexed page
    ///
    /// Pages that yield no extractable text come back as an empty string.
    pub fn page_text(&self, page_number: u32) -> String {
        match self.doc.extract_text(&[page_number]) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(page = page_number, error = %e, "page text extraction failed");
                String::new()
            }
        }
    }

    /// Extract every page in document order
    pub fn extract_pages(&self) -> DocumentPages {
        let pages: Vec<String> = self
            .doc
            .get_pages()
            .keys()
            .map(|&page_number| self.page_text(page_number))
            .collect();

        tracing::debug!(pages = pages.len(), "extracted page text");

        let document = DocumentPages::new(pages);
        match &self.source {
            Some(source) => document.with_source(source.clone()),
            None => document,
        }
    }
}
