//! Element statistics.

use crate::model::{Image, Paragraph, Table};
use crate::visitor::DocumentVisitor;
use serde::{Deserialize, Serialize};

/// Counts elements by variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementCountVisitor {
    /// Number of paragraphs visited
    pub paragraphs: usize,

    /// Number of images visited
    pub images: usize,

    /// Number of tables visited
    pub tables: usize,
}

impl ElementCountVisitor {
    /// Create a visitor with zero counts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of elements visited.
    pub fn total(&self) -> usize {
        self.paragraphs + self.images + self.tables
    }
}

impl DocumentVisitor for ElementCountVisitor {
    fn visit_paragraph(&mut self, _paragraph: &Paragraph) {
        self.paragraphs += 1;
    }

    fn visit_image(&mut self, _image: &Image) {
        self.images += 1;
    }

    fn visit_table(&mut self, _table: &Table) {
        self.tables += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Document;
    use crate::visitor::Visitable;

    #[test]
    fn test_element_counts() {
        let doc = Document::new("T")
            .with_element(Paragraph::new("a"))
            .with_element(Paragraph::new("b"))
            .with_element(Table::new(1, 1));

        let mut counts = ElementCountVisitor::new();
        doc.accept(&mut counts);
        assert_eq!(counts.paragraphs, 2);
        assert_eq!(counts.images, 0);
        assert_eq!(counts.tables, 1);
        assert_eq!(counts.total(), doc.len());
    }
}
