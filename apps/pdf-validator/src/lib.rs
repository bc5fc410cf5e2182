//! PDF consistency validator
//!
//! Command-line front end: loads page text from a PDF or a form-feed
//! separated text dump, runs the consistency engine and renders or exports
//! the report.

pub mod cli;
pub mod console;
pub mod logging;
pub mod run;

pub use cli::{Args, OutputFormat};
pub use console::ConsoleReporter;
pub use run::{load_document, render, run};
