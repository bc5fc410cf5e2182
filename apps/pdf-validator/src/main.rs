//! PDF Validator Binary
//!
//! Entry point for the cross-page consistency validator.

use clap::Parser;
use pdf_validator::Args;

fn main() {
    let args = Args::parse();

    pdf_validator::logging::init();

    tracing::info!("Starting PDF Validator v{}", env!("CARGO_PKG_VERSION"));

    match pdf_validator::run(&args) {
        Ok(result) => {
            if args.strict && !result.is_consistent() {
                tracing::warn!("Document is inconsistent");
                std::process::exit(2);
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
