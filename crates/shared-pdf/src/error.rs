use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("Failed to parse PDF: {0}")]
    ParseError(String),

    #[error("Password-protected PDF")]
    Encrypted,

    #[error("PDF contains no pages")]
    NoPages,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
