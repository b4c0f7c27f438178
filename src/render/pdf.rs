//! PDF placeholder export.
//!
//! Produces a token string describing what a PDF writer would emit. It is
//! not a PDF file.

use crate::model::{Document, Image, Paragraph, Table};
use crate::visitor::{DocumentVisitor, Visitable};

/// Convert a document's elements to placeholder tokens.
pub fn to_pdf(doc: &Document) -> String {
    let mut visitor = PdfExportVisitor::new();
    doc.accept(&mut visitor);
    visitor.into_pdf()
}

/// Convert a document to placeholder tokens prefixed by a document token.
pub fn to_pdf_document(doc: &Document) -> String {
    format!("PDF_DOCUMENT({}) {}", doc.title, to_pdf(doc))
}

/// Appends one placeholder token, followed by a space, per element.
#[derive(Debug, Clone, Default)]
pub struct PdfExportVisitor {
    pdf: String,
}

impl PdfExportVisitor {
    /// Create a visitor with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokens accumulated so far.
    pub fn pdf(&self) -> &str {
        &self.pdf
    }

    /// Consume the visitor and return the tokens.
    pub fn into_pdf(self) -> String {
        self.pdf
    }
}

impl DocumentVisitor for PdfExportVisitor {
    fn visit_paragraph(&mut self, paragraph: &Paragraph) {
        let token = format!(
            "PDF_TEXT({}, {}, {}) ",
            paragraph.text, paragraph.font_family, paragraph.font_size
        );
        self.pdf.push_str(&token);
    }

    fn visit_image(&mut self, image: &Image) {
        let token = format!("PDF_IMAGE({}, {}, {}) ", image.url, image.width, image.height);
        self.pdf.push_str(&token);
    }

    fn visit_table(&mut self, table: &Table) {
        // Cell contents are not serialized.
        let token = format!("PDF_TABLE({}, {}, data...) ", table.rows, table.columns);
        self.pdf.push_str(&token);
    }
}
