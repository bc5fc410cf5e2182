use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pdf-validator")]
#[command(
    version,
    about = "Check that page 1 reference fields recur on every page of a document"
)]
pub struct Args {
    /// Document to validate (PDF, or text with --text)
    pub input: PathBuf,

    /// Treat input as plain text with form-feed page breaks
    #[arg(long)]
    pub text: bool,

    /// TOML field table to use instead of the standard fields
    #[arg(long)]
    pub fields: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write a timestamped CSV report into this directory
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Exit with status 2 if any field is inconsistent
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}
