//! Input loading, validation and output
use crate::cli::{Args, OutputFormat};
use crate::console::ConsoleReporter;
use anyhow::{Context, Result};
use consistency_engine::{export, load_field_table, ConsistencyEngine};
use shared_pdf::PdfDocument;
use shared_types::{DocumentPages, ValidationResult};
use std::fs;
use std::path::Path;

/// Load page text from a PDF or a form-feed separated text file
pub fn load_document(path: &Path, plain_text: bool) -> Result<DocumentPages> {
    if plain_text {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read text file: {}", path.display()))?;
        let source = path.file_name().map(|n| n.to_string_lossy().into_owned());
        let document = DocumentPages::from_form_feed_text(&text);
        return Ok(match source {
            Some(source) => document.with_source(source),
            None => document,
        });
    }

    let pdf = PdfDocument::load_file(path)
        .with_context(|| format!("Failed to open PDF: {}", path.display()))?;
    Ok(pdf.extract_pages())
}

/// Render a result in the requested format
pub fn render(result: &ValidationResult, format: OutputFormat, source: Option<&str>) -> Result<String> {
    let rendered = match format {
        OutputFormat::Table => ConsoleReporter::format(result, source)?,
        OutputFormat::Json => export::to_json(result)?,
        OutputFormat::Csv => export::to_csv_string(result)?,
    };
    Ok(rendered)
}

/// Run a validation as described by `args`
///
/// Returns the validation result after writing all requested outputs.
pub fn run(args: &Args) -> Result<ValidationResult> {
    let engine = match &args.fields {
        Some(path) => {
            tracing::info!("Using field table from {}", path.display());
            ConsistencyEngine::with_fields(load_field_table(path)?)
        }
        None => ConsistencyEngine::new(),
    };

    let document = load_document(&args.input, args.text)?;
    let result = engine.validate_document(&document);

    let rendered = render(&result, args.format, document.source.as_deref())?;
    match &args.output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            tracing::info!("Report written to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    if let Some(dir) = &args.export_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create export directory: {}", dir.display()))?;
        let path = dir.join(export::report_file_name(&chrono::Local::now()));
        let file = fs::File::create(&path)
            .with_context(|| format!("Failed to create report: {}", path.display()))?;
        export::write_csv(&result, file)?;
        tracing::info!("Exported report to {}", path.display());
    }

    Ok(result)
}
