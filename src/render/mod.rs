//! Export visitors and serialization.
//!
//! - [`HtmlExportVisitor`] - HTML fragment
//! - [`PdfExportVisitor`] - PDF placeholder tokens
//! - [`MarkdownExportVisitor`] - Markdown
//! - [`to_json`] - serde JSON of the whole document

mod html;
mod json;
mod markdown;
mod pdf;

pub use html::{to_html, to_html_document, wrap_html_page, HtmlExportVisitor};
pub use json::{to_json, JsonFormat};
pub use markdown::{to_markdown, MarkdownExportVisitor};
pub use pdf::{to_pdf, to_pdf_document, PdfExportVisitor};
