//! Markdown export.

use crate::model::{Document, Image, Paragraph, Table};
use crate::visitor::{DocumentVisitor, Visitable};

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document) -> String {
    let mut visitor = MarkdownExportVisitor::new();
    doc.accept(&mut visitor);
    visitor.into_markdown()
}

/// Appends a Markdown block per element, each followed by a blank line.
#[derive(Debug, Clone)]
pub struct MarkdownExportVisitor {
    markdown: String,
    header_row: bool,
}

impl MarkdownExportVisitor {
    /// Create a visitor that treats the first table row as a header.
    pub fn new() -> Self {
        Self {
            markdown: String::new(),
            header_row: true,
        }
    }

    /// Enable or disable the header separator after the first table row.
    pub fn with_header_row(mut self, header_row: bool) -> Self {
        self.header_row = header_row;
        self
    }

    /// Markdown accumulated so far.
    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    /// Consume the visitor and return the Markdown.
    pub fn into_markdown(self) -> String {
        self.markdown
    }
}

impl Default for MarkdownExportVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentVisitor for MarkdownExportVisitor {
    fn visit_paragraph(&mut self, paragraph: &Paragraph) {
        self.markdown.push_str(&paragraph.text);
        self.markdown.push_str("\n\n");
    }

    fn visit_image(&mut self, image: &Image) {
        self.markdown
            .push_str(&format!("![{}]({})\n\n", image.alt, image.url));
    }

    fn visit_table(&mut self, table: &Table) {
        if table.is_empty() {
            return;
        }

        for (i, row) in table.cells.iter().enumerate() {
            self.markdown.push('|');
            for cell in row {
                let content = cell.replace('\n', " ").replace('|', "\\|");
                self.markdown.push_str(&format!(" {} |", content.trim()));
            }
            self.markdown.push('\n');

            if i == 0 && self.header_row {
                self.markdown.push('|');
                for _ in row {
                    self.markdown.push_str(" --- |");
                }
                self.markdown.push('\n');
            }
        }

        self.markdown.push('\n');
    }
}
