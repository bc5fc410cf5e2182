//! Shared PDF handling utilities
//!
//! This crate owns the document input boundary: it opens PDF files and
//! yields plain text per page for the consistency engine.

pub mod error;
pub mod parser;

pub use error::PdfError;
pub use parser::PdfDocument;
