//! # docvisit
//!
//! A small document model (paragraphs, images, tables) with operations
//! written as visitors.
//!
//! Elements expose a single [`Visitable::accept`] entry point and every
//! operation (HTML export, PDF placeholders, word count, validation, reading
//! time) is a separate [`DocumentVisitor`]. New operations never touch the
//! element types.
//!
//! ## Quick Start
//!
//! ```
//! use docvisit::analyze::WordCountVisitor;
//! use docvisit::model::{Document, Image, Paragraph, Table};
//! use docvisit::Visitable;
//!
//! let mut doc = Document::new("Annual Report");
//! doc.add_element(Paragraph::new("Hello world"));
//! doc.add_element(Image::new("chart.png", 800, 600));
//! doc.add_element(Table::new(2, 2));
//!
//! let mut words = WordCountVisitor::new();
//! doc.accept(&mut words);
//! assert_eq!(words.total_words(), 10);
//!
//! let html = docvisit::to_html(&doc);
//! assert!(html.starts_with("<p style='font-family:Arial;font-size:12px'>"));
//! ```
//!
//! ## Features
//!
//! - **Exports**: HTML fragment or page, PDF placeholder tokens, Markdown, JSON
//! - **Analysis**: word count, reading time, validation with issue list
//! - **Single pass**: [`CompositeVisitor`] feeds several visitors at once
//! - **Parallel batches**: `analyze_batch` uses Rayon (`parallel` feature)

pub mod analyze;
pub mod error;
pub mod model;
pub mod render;
pub mod visitor;

// Re-export commonly used types
pub use analyze::{
    analyze, analyze_batch, count_words, AnalyzeOptions, ElementCountVisitor, IssueKind,
    ReadingTimeVisitor, Report, ValidationIssue, ValidationVisitor, WordCountVisitor,
};
pub use error::{Error, Result};
pub use model::{Document, Element, Image, Paragraph, Table};
pub use render::{
    to_html, to_html_document, to_json, to_markdown, to_pdf, to_pdf_document, HtmlExportVisitor,
    JsonFormat, MarkdownExportVisitor, PdfExportVisitor,
};
pub use visitor::{CompositeVisitor, DocumentVisitor, Visitable};

use std::io::Read;
use std::path::Path;

/// Parse a document from its JSON form.
///
/// # Example
///
/// ```
/// let doc = docvisit::parse_json(
///     r#"{"title": "Report", "elements": [{"type": "paragraph", "text": "Hi"}]}"#,
/// )
/// .unwrap();
/// assert_eq!(doc.len(), 1);
/// ```
pub fn parse_json(json: &str) -> Result<Document> {
    let doc: Document = serde_json::from_str(json)?;
    log::debug!("parsed document '{}' ({} elements)", doc.title, doc.len());
    Ok(doc)
}

/// Parse a document from a JSON reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    let doc: Document = serde_json::from_reader(reader)?;
    Ok(doc)
}

/// Load a document from a JSON file.
///
/// # Example
///
/// ```no_run
/// let doc = docvisit::load_file("report.json").unwrap();
/// println!("Elements: {}", doc.len());
/// ```
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    log::debug!("loading document from {}", path.display());
    let json = std::fs::read_to_string(path)?;
    parse_json(&json)
}

/// Total words in a document.
pub fn word_count(doc: &Document) -> usize {
    let mut visitor = WordCountVisitor::new();
    doc.accept(&mut visitor);
    visitor.total_words()
}

/// Whole minutes needed to read a document at 200 words per minute.
pub fn reading_time_minutes(doc: &Document) -> usize {
    let mut visitor = ReadingTimeVisitor::new();
    doc.accept(&mut visitor);
    visitor.reading_time_minutes()
}

/// Whether every element of a document passes validation.
pub fn is_valid(doc: &Document) -> bool {
    let mut visitor = ValidationVisitor::new();
    doc.accept(&mut visitor);
    visitor.is_valid()
}
