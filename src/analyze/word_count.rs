//! Word counting.

use super::{count_words, table_words};
use crate::model::{Image, Paragraph, Table};
use crate::visitor::DocumentVisitor;

/// Counts words across paragraphs and table cells.
///
/// Images contribute nothing.
#[derive(Debug, Clone, Default)]
pub struct WordCountVisitor {
    total_words: usize,
}

impl WordCountVisitor {
    /// Create a visitor with a zero total.
    pub fn new() -> Self {
        Self::default()
    }

    /// Words counted so far.
    pub fn total_words(&self) -> usize {
        self.total_words
    }
}

impl DocumentVisitor for WordCountVisitor {
    fn visit_paragraph(&mut self, paragraph: &Paragraph) {
        self.total_words += count_words(&paragraph.text);
    }

    fn visit_image(&mut self, _image: &Image) {}

    fn visit_table(&mut self, table: &Table) {
        self.total_words += table_words(table);
    }
}
