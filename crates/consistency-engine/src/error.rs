use thiserror::Error;

/// Errors raised while building field tables or exporting reports
///
/// Extraction and validation themselves never fail; missing values and
/// empty pages are represented in the result data.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    #[error("Pattern for field '{field}' has no capture group {group}")]
    MissingCaptureGroup { field: String, group: usize },

    #[error("Duplicate field name: {0}")]
    DuplicateField(String),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
